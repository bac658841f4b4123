// ABOUTME: Input helpers for mealwise-cli
// ABOUTME: Reads JSON documents from a file path or from stdin when given "-"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use mealwise::errors::{AppError, AppResult};
use tracing::debug;

/// Read the whole document at `path`; `-` reads stdin
pub fn read_input(path: &Path) -> AppResult<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map_err(|e| {
            AppError::storage(format!("cannot read stdin: {e}")).with_source(e)
        })?;
        debug!(bytes = buffer.len(), "Read input from stdin");
        return Ok(buffer);
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("cannot read {}: {e}", path.display())).with_source(e)
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "Read input file");
    Ok(contents)
}
