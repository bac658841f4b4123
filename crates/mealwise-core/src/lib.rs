// ABOUTME: Core types and constants for the Mealwise recipe platform
// ABOUTME: Foundation crate with error handling, shared ingredient models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

#![deny(unsafe_code)]

//! # Mealwise Core
//!
//! Foundation crate providing shared types and constants for the Mealwise
//! platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Service names, environment keys, and display separators
//! - **models**: Allergens, ingredients, detection results, and shopping-list items

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models shared by the intelligence crate and the service layer
pub mod models;
