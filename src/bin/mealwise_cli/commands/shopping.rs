// ABOUTME: Shopping-list command for mealwise-cli
// ABOUTME: Consolidates a meal plan file into a flat or aisle-grouped list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::path::Path;

use mealwise::errors::AppResult;
use mealwise::services::{
    generate_grouped_shopping_list, generate_shopping_list, parse_meal_plan,
};
use tracing::info;

use crate::helpers::display::print_json;
use crate::helpers::input::read_input;

/// Print the consolidated shopping list for a meal plan as JSON
pub fn shopping_list(plan: &Path, grouped: bool) -> AppResult<()> {
    let recipes = parse_meal_plan(&read_input(plan)?)?;
    info!(recipes = recipes.len(), grouped, "Building shopping list");

    if grouped {
        print_json(&generate_grouped_shopping_list(&recipes))
    } else {
        print_json(&generate_shopping_list(&recipes))
    }
}
