// ABOUTME: Core data models shared across the Mealwise workspace
// ABOUTME: Allergens, ingredients, detection results, and shopping-list items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

/// The 14 regulated allergens
pub mod allergen;
/// Detection results, screening verdicts, and warnings
pub mod detection;
/// Structured recipe ingredient
pub mod ingredient;
/// Consolidated ingredients and shopping-list lines
pub mod shopping;

pub use allergen::{Allergen, AllergenParseError};
pub use detection::{AllergenWarning, DetectionResult, MatchSource, ScreeningVerdict};
pub use ingredient::Ingredient;
pub use shopping::{ConsolidatedIngredient, ShoppingCategory, ShoppingListItem};
