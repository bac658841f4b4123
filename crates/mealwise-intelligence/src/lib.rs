// ABOUTME: Allergen detection and shopping-list consolidation algorithms for Mealwise
// ABOUTME: Extracted from the main crate so the pure algorithms compile and test in isolation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

#![deny(unsafe_code)]

//! # Mealwise Intelligence
//!
//! The two algorithmic components of the platform:
//!
//! - [`allergens`]: classifies free-text ingredient descriptions against the
//!   14 regulated allergens using per-allergen safe/unsafe term tables and a
//!   derivative keyword fallback. Tuned for recall: a spurious warning is an
//!   inconvenience, a missed allergen is a safety failure.
//! - [`shopping`]: merges the ingredient lists of every scheduled recipe into
//!   one shopping list, summing compatible quantities and assigning an aisle.
//!
//! Both are pure functions over request-local data. Shared tables are
//! immutable statics, so every type here is `Send + Sync`.

/// Allergen taxonomy tables, detector, and generation screening
pub mod allergens;

/// Word-boundary aware term matching shared by both components
pub mod matching;

/// Ingredient normalization, quantity merging, and aisle categorization
pub mod shopping;
