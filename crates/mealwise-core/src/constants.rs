// ABOUTME: Application constants organized by domain
// ABOUTME: Service names, environment variable keys, and shopping-list display separators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Constants module
//!
//! Groups constants by domain so that the service layer, the CLI and the
//! intelligence crate agree on names and separators.

/// Service identifiers used in structured logs
pub mod service_names {
    /// Library/service name reported by the logging layer
    pub const MEALWISE: &str = "mealwise";
    /// Command-line tool
    pub const MEALWISE_CLI: &str = "mealwise-cli";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Optional path to a JSON file of extra allergen taxonomy terms
    pub const TAXONOMY_OVERRIDES: &str = "MEALWISE_TAXONOMY_OVERRIDES";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Deployment environment (development, staging, production)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Include file and line in log output
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Service name override for logs
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
}

/// Separators used when ingredient amounts cannot be merged numerically
pub mod merge {
    /// Joins quantities or units that could not be summed
    pub const TEXTUAL_JOIN: &str = " + ";
    /// Joins preparation notes from merged ingredients
    pub const NOTES_JOIN: &str = ", ";
    /// Decimal places kept when displaying summed quantities
    pub const DISPLAY_PRECISION: i32 = 3;
}

/// User-facing message fragments for allergen warnings
pub mod safety_messages {
    /// Prefix for advisory warnings attached to generated recipes
    pub const WARNING_GLYPH: &str = "⚠️";
}
