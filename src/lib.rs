// ABOUTME: Main library entry point for the Mealwise recipe-planning safety core
// ABOUTME: Wires configuration, logging, and services around the allergen and shopping engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

#![deny(unsafe_code)]

//! # Mealwise
//!
//! Allergen safety screening and shopping-list consolidation for a
//! recipe-planning application.
//!
//! ## Architecture
//!
//! - **`mealwise-core`**: error type, constants, shared models
//! - **`mealwise-intelligence`**: the allergen detector and the ingredient
//!   consolidator, both pure and synchronous
//! - **this crate**: environment configuration, logging setup, and the
//!   services the recipe-generation and meal-planning workflows call
//!
//! ## Example Usage
//!
//! ```rust
//! use mealwise::services::{AllergenPreferences, RecipeSafetyService};
//! use mealwise::errors::ErrorCode;
//!
//! let service = RecipeSafetyService::default();
//! let preferences = AllergenPreferences::from_labels(["peanuts"]);
//!
//! let refused = service
//!     .pre_generation_gate(&["peanut butter", "banana"], &preferences)
//!     .unwrap_err();
//! assert_eq!(refused.code, ErrorCode::AllergenConflict);
//! ```

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Recipe safety and shopping-list services
pub mod services;

/// Re-export the unified error types
pub use mealwise_core::errors;

/// Re-export shared data models
pub use mealwise_core::models;

/// Re-export the algorithmic components
pub use mealwise_intelligence::{allergens, shopping};
