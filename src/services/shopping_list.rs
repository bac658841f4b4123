// ABOUTME: Shopping-list generation for the meal-planning workflow
// ABOUTME: Consolidates every scheduled recipe's ingredients into unchecked list items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use mealwise_core::errors::{AppError, AppResult};
use mealwise_core::models::{
    ConsolidatedIngredient, Ingredient, ShoppingCategory, ShoppingListItem,
};
use mealwise_intelligence::shopping::{consolidate, group_by_category};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Items of one aisle, for grouped display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListSection {
    /// Aisle
    pub category: ShoppingCategory,
    /// Items in the aisle, in consolidation order
    pub items: Vec<ShoppingListItem>,
}

/// Flat shopping list for the recipes scheduled in a meal plan
///
/// One unchecked item per consolidated ingredient. Identifiers are left to
/// the storage layer.
#[must_use]
pub fn generate_shopping_list(recipes: &[Vec<Ingredient>]) -> Vec<ShoppingListItem> {
    let items: Vec<ShoppingListItem> = consolidate(recipes)
        .into_iter()
        .map(ConsolidatedIngredient::into_shopping_list_item)
        .collect();

    debug!(
        recipes = recipes.len(),
        items = items.len(),
        "Generated shopping list"
    );
    items
}

/// Shopping list grouped by aisle, in aisle order, empty aisles omitted
#[must_use]
pub fn generate_grouped_shopping_list(recipes: &[Vec<Ingredient>]) -> Vec<ShoppingListSection> {
    group_by_category(consolidate(recipes))
        .into_iter()
        .map(|(category, items)| ShoppingListSection {
            category,
            items: items
                .into_iter()
                .map(ConsolidatedIngredient::into_shopping_list_item)
                .collect(),
        })
        .collect()
}

/// Parse a meal plan: a JSON array holding one ingredient array per recipe
///
/// # Errors
///
/// Returns `INVALID_FORMAT` when the document does not have that shape.
pub fn parse_meal_plan(json: &str) -> AppResult<Vec<Vec<Ingredient>>> {
    serde_json::from_str(json).map_err(|e| {
        AppError::invalid_format(format!(
            "meal plan must be an array of ingredient arrays: {e}"
        ))
        .with_source(e)
    })
}

/// Parse one recipe's ingredients: a JSON array of ingredient objects
///
/// # Errors
///
/// Returns `INVALID_FORMAT` when the document does not have that shape.
pub fn parse_recipe_ingredients(json: &str) -> AppResult<Vec<Ingredient>> {
    serde_json::from_str(json).map_err(|e| {
        AppError::invalid_format(format!("recipe must be an array of ingredients: {e}"))
            .with_source(e)
    })
}
