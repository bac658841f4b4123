// ABOUTME: Pre-generation gate and post-generation audit built on the allergen detector
// ABOUTME: Classifies user input as clear/blocked and groups generated-recipe hits into warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use mealwise_core::models::{
    Allergen, AllergenWarning, DetectionResult, Ingredient, MatchSource, ScreeningVerdict,
};

use super::detector::AllergenDetector;

impl AllergenDetector {
    /// Screen user-supplied ingredient texts against restricted allergens
    ///
    /// Any hit blocks generation. The verdict is a classification only; the
    /// caller turns `Blocked` into a refusal.
    #[must_use]
    pub fn screen_user_ingredients<S: AsRef<str>>(
        &self,
        ingredient_texts: &[S],
        restricted: &[Allergen],
    ) -> ScreeningVerdict {
        let conflicts = self.detect(ingredient_texts, restricted);
        if conflicts.is_empty() {
            ScreeningVerdict::Clear
        } else {
            ScreeningVerdict::Blocked { conflicts }
        }
    }

    /// Audit ingredients returned by recipe generation
    ///
    /// Produces one warning per detected allergen, in the order allergens
    /// were first found, listing the affected ingredient items. Item name
    /// and notes are scanned separately, so a safe phrase in one never
    /// clears a hit in the other.
    #[must_use]
    pub fn audit_generated_ingredients(
        &self,
        ingredients: &[Ingredient],
        restricted: &[Allergen],
    ) -> Vec<AllergenWarning> {
        let mut warnings: Vec<AllergenWarning> = Vec::new();

        for ingredient in ingredients {
            for hit in self.ingredient_hits(ingredient, restricted) {
                record_hit(&mut warnings, ingredient.item.trim(), &hit);
            }
        }

        warnings
    }

    /// Hits in the item name, completed by hits in the notes
    ///
    /// One hit per allergen; a taxonomy hit from either text outranks a
    /// derivative one.
    fn ingredient_hits(
        &self,
        ingredient: &Ingredient,
        restricted: &[Allergen],
    ) -> Vec<DetectionResult> {
        let mut hits = self.detect_one(&ingredient.item, restricted);

        let Some(notes) = ingredient.notes.as_deref() else {
            return hits;
        };

        for note_hit in self.detect_one(notes, restricted) {
            match hits.iter_mut().find(|hit| hit.allergen == note_hit.allergen) {
                Some(hit) if hit.source == MatchSource::Derivative => *hit = note_hit,
                Some(_) => {}
                None => hits.push(note_hit),
            }
        }

        hits
    }
}

fn record_hit(warnings: &mut Vec<AllergenWarning>, item: &str, hit: &DetectionResult) {
    let from_derivative = hit.source == MatchSource::Derivative;

    if let Some(warning) = warnings.iter_mut().find(|w| w.allergen == hit.allergen) {
        if !warning.ingredients.iter().any(|existing| existing == item) {
            warning.ingredients.push(item.to_owned());
        }
        warning.derivative_only &= from_derivative;
    } else {
        warnings.push(AllergenWarning {
            allergen: hit.allergen,
            ingredients: vec![item.to_owned()],
            derivative_only: from_derivative,
        });
    }
}
