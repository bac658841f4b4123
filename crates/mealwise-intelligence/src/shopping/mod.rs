// ABOUTME: Shopping-list consolidation across the recipes in a meal plan
// ABOUTME: Name normalization, quantity parsing, unit canonicalization, merging, and aisle assignment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # Shopping List Consolidation
//!
//! Turns the ingredient lists of every scheduled recipe into one list:
//! items are grouped by a normalized name, amounts are summed when both
//! sides are numeric with the same canonical unit and joined with `" + "`
//! otherwise, and each entry is placed in a shopping aisle.
//!
//! ## Example
//!
//! ```rust
//! use mealwise_core::models::Ingredient;
//! use mealwise_intelligence::shopping::consolidate;
//!
//! let onions = Ingredient::new("onions").with_quantity("1").with_unit("whole");
//! let list = consolidate(&[vec![onions.clone()], vec![onions]]);
//!
//! assert_eq!(list.len(), 1);
//! assert_eq!(list[0].quantity.as_deref(), Some("2"));
//! ```

/// Aisle keyword classifier
pub mod categories;
/// Grouping and folding across recipes
pub mod consolidate;
/// Amount merge policy
pub mod merge;
/// Item-name normalization
pub mod normalize;
/// Quantity parsing and formatting
pub mod quantity;
/// Unit canonicalization
pub mod units;

pub use categories::categorize;
pub use consolidate::{consolidate, group_by_category};
pub use merge::{Amount, UnitLabel};
pub use normalize::normalize_item_name;
pub use quantity::{format_number, parse_number, Quantity};
pub use units::Unit;
