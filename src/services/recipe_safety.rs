// ABOUTME: Recipe-generation safety service wrapping the allergen detector
// ABOUTME: Hard-refuses conflicting user input before generation and warns on generated recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use mealwise_core::constants::safety_messages::WARNING_GLYPH;
use mealwise_core::errors::{AppError, AppResult};
use mealwise_core::models::{Allergen, AllergenWarning, Ingredient, ScreeningVerdict};
use mealwise_intelligence::allergens::AllergenDetector;
use serde_json::json;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::SafetyConfig;

/// A user's declared allergen restrictions
///
/// Built from the labels stored in the user's preference record. Labels that
/// name no known allergen are kept aside and logged, never fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllergenPreferences {
    restricted: Vec<Allergen>,
    unrecognized: Vec<String>,
}

impl AllergenPreferences {
    /// Preferences from already-typed allergens
    #[must_use]
    pub fn new(restricted: impl IntoIterator<Item = Allergen>) -> Self {
        let mut preferences = Self::default();
        for allergen in restricted {
            preferences.push(allergen);
        }
        preferences
    }

    /// Preferences from free-form labels such as `"dairy"` or `"Tree Nuts"`
    #[must_use]
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut preferences = Self::default();

        for label in labels {
            let label = label.as_ref();
            if label.trim().is_empty() {
                continue;
            }
            match label.parse::<Allergen>() {
                Ok(allergen) => preferences.push(allergen),
                Err(e) => {
                    warn!(label = %label, "Ignoring allergen preference: {e}");
                    preferences.unrecognized.push(label.to_owned());
                }
            }
        }

        preferences
    }

    fn push(&mut self, allergen: Allergen) {
        if !self.restricted.contains(&allergen) {
            self.restricted.push(allergen);
        }
    }

    /// Restricted allergens, deduplicated, in declaration order
    #[must_use]
    pub fn restricted(&self) -> &[Allergen] {
        &self.restricted
    }

    /// Labels that did not name a known allergen
    #[must_use]
    pub fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }

    /// Whether the user declared no usable restriction
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.restricted.is_empty()
    }
}

/// Allergen checks run around recipe generation
#[derive(Debug, Clone, Default)]
pub struct RecipeSafetyService {
    detector: AllergenDetector,
}

impl RecipeSafetyService {
    /// Service over an injected detector
    #[must_use]
    pub const fn new(detector: AllergenDetector) -> Self {
        Self { detector }
    }

    /// Service over the configured taxonomies
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the taxonomy overrides cannot be
    /// loaded or break the safe/unsafe invariant.
    pub fn from_config(config: &SafetyConfig) -> AppResult<Self> {
        Ok(Self::new(config.build_detector()?))
    }

    /// The detector this service delegates to
    #[must_use]
    pub const fn detector(&self) -> &AllergenDetector {
        &self.detector
    }

    /// Check the user's own ingredients before calling the recipe generator
    ///
    /// # Errors
    ///
    /// Returns `ALLERGEN_CONFLICT` when any ingredient contains a restricted
    /// allergen. The message names every conflicting ingredient and the
    /// details carry the structured detection results.
    pub fn pre_generation_gate<S: AsRef<str>>(
        &self,
        user_ingredients: &[S],
        preferences: &AllergenPreferences,
    ) -> AppResult<()> {
        if preferences.is_empty() || user_ingredients.is_empty() {
            return Ok(());
        }

        let verdict = self
            .detector
            .screen_user_ingredients(user_ingredients, preferences.restricted());

        let ScreeningVerdict::Blocked { conflicts } = &verdict else {
            debug!(
                ingredients = user_ingredients.len(),
                "Pre-generation allergen gate passed"
            );
            return Ok(());
        };

        let screening_id = Uuid::new_v4();
        let message = refusal_message(&verdict);
        warn!(
            screening_id = %screening_id,
            conflicts = conflicts.len(),
            "Refusing recipe generation: {message}"
        );

        Err(AppError::allergen_conflict(message)
            .with_request_id(screening_id.to_string())
            .with_details(json!({
                "conflicting_ingredients": verdict.conflicting_ingredients(),
                "conflicts": conflicts,
            })))
    }

    /// Check the ingredients a generated recipe came back with
    ///
    /// Never blocks: returns one warning per restricted allergen found.
    #[must_use]
    pub fn post_generation_audit(
        &self,
        generated: &[Ingredient],
        preferences: &AllergenPreferences,
    ) -> Vec<AllergenWarning> {
        if preferences.is_empty() {
            return Vec::new();
        }

        let warnings = self
            .detector
            .audit_generated_ingredients(generated, preferences.restricted());

        if !warnings.is_empty() {
            info!(
                warnings = warnings.len(),
                ingredients = generated.len(),
                "Generated recipe contains restricted allergens"
            );
        }

        warnings
    }
}

/// Refusal text listing each conflicting ingredient with its allergens
#[must_use]
pub fn refusal_message(verdict: &ScreeningVerdict) -> String {
    let ScreeningVerdict::Blocked { conflicts } = verdict else {
        return String::new();
    };

    let parts: Vec<String> = verdict
        .conflicting_ingredients()
        .into_iter()
        .map(|ingredient| {
            let allergens: Vec<&str> = conflicts
                .iter()
                .filter(|c| c.source_phrase == ingredient)
                .map(|c| c.allergen.display_name())
                .collect();
            format!("{ingredient} ({})", allergens.join(", "))
        })
        .collect();

    format!(
        "Your ingredients include allergens you have restricted: {}. Remove them or update your allergen preferences.",
        parts.join("; ")
    )
}

/// User-facing line for one advisory warning
#[must_use]
pub fn warning_message(warning: &AllergenWarning) -> String {
    let qualifier = if warning.derivative_only {
        "May contain"
    } else {
        "Contains"
    };
    format!(
        "{WARNING_GLYPH} {qualifier} {}: {}",
        warning.allergen.display_name(),
        warning.ingredients.join(", ")
    )
}
