// ABOUTME: Allergen commands for mealwise-cli
// ABOUTME: Handles detect, gate, and audit over command-line or file input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::path::Path;

use mealwise::errors::{AppError, AppResult};
use mealwise::services::{
    parse_recipe_ingredients, warning_message, AllergenPreferences, RecipeSafetyService,
};
use tracing::info;

use crate::helpers::display::print_json;
use crate::helpers::input::read_input;

type Result<T> = AppResult<T>;

/// Print detection results for the given ingredients as JSON
pub fn detect(
    service: &RecipeSafetyService,
    allergens: &[String],
    ingredients: &[String],
) -> Result<()> {
    let preferences = strict_preferences(allergens)?;
    let results = service
        .detector()
        .detect(ingredients, preferences.restricted());

    info!(matches = results.len(), "Detection finished");
    print_json(&results)
}

/// Run the pre-generation gate; a conflict is returned as an error
pub fn gate(
    service: &RecipeSafetyService,
    allergens: &[String],
    ingredients: &[String],
) -> Result<()> {
    let preferences = strict_preferences(allergens)?;
    service.pre_generation_gate(ingredients, &preferences)?;

    println!(
        "Clear: none of the {} ingredient(s) contain a restricted allergen",
        ingredients.len()
    );
    Ok(())
}

/// Print post-generation warnings for a recipe file
pub fn audit(
    service: &RecipeSafetyService,
    allergens: &[String],
    recipe: &Path,
    json: bool,
) -> Result<()> {
    let preferences = strict_preferences(allergens)?;
    let ingredients = parse_recipe_ingredients(&read_input(recipe)?)?;
    let warnings = service.post_generation_audit(&ingredients, &preferences);

    if json {
        return print_json(&warnings);
    }

    if warnings.is_empty() {
        println!(
            "No restricted allergens found in {} ingredient(s)",
            ingredients.len()
        );
    }
    for warning in &warnings {
        println!("{}", warning_message(warning));
    }
    Ok(())
}

/// Preferences from command-line labels; unknown labels are an input error here
fn strict_preferences(labels: &[String]) -> Result<AllergenPreferences> {
    let preferences = AllergenPreferences::from_labels(labels);

    if !preferences.unrecognized().is_empty() {
        return Err(AppError::invalid_input(format!(
            "unknown allergen(s): {}",
            preferences.unrecognized().join(", ")
        )));
    }
    Ok(preferences)
}
