// ABOUTME: Configuration module for the mealwise services and CLI
// ABOUTME: Environment-only configuration for logging and allergen taxonomy overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Configuration module
//!
//! Configuration is read from environment variables only. It is consumed by
//! the service layer and the CLI; the detector and the consolidator take
//! their tables as injected data and never read configuration themselves.

/// Environment-derived configuration
pub mod environment;

pub use environment::{MealwiseConfig, SafetyConfig};
