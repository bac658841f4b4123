// ABOUTME: Domain service layer used by the recipe-generation and meal-planning workflows
// ABOUTME: Turns detector and consolidator results into refusals, warnings, and shopping lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Domain service layer
//!
//! The intelligence crate classifies; this layer decides severity. A
//! conflict in the user's own ingredients becomes an `ALLERGEN_CONFLICT`
//! error, a conflict in a generated recipe becomes a warning, and a meal
//! plan becomes a list of unchecked shopping items.

/// Pre-generation gate and post-generation audit
pub mod recipe_safety;

/// Shopping-list generation from meal-plan recipes
pub mod shopping_list;

pub use recipe_safety::{
    refusal_message, warning_message, AllergenPreferences, RecipeSafetyService,
};
pub use shopping_list::{
    generate_grouped_shopping_list, generate_shopping_list, parse_meal_plan,
    parse_recipe_ingredients, ShoppingListSection,
};
