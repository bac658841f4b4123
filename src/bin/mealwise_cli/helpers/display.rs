// ABOUTME: Output formatting helpers for mealwise-cli
// ABOUTME: Prints results as pretty JSON and error responses to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use mealwise::errors::{AppError, AppResult, ErrorResponse};
use serde::Serialize;

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value).map_err(|e| {
        AppError::internal(format!("cannot render output: {e}")).with_source(e)
    })?;
    println!("{rendered}");
    Ok(())
}

/// Print the structured error body on stderr
pub fn print_error_response(response: &ErrorResponse) {
    match serde_json::to_string_pretty(response) {
        Ok(rendered) => eprintln!("{rendered}"),
        Err(e) => eprintln!("Cannot render error response: {e}"),
    }
}
