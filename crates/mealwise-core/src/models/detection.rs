// ABOUTME: Allergen detection outputs shared by the detector, the service layer, and the CLI
// ABOUTME: DetectionResult, MatchSource, screening verdicts, and advisory warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use serde::{Deserialize, Serialize};

use super::Allergen;

/// Which detection stage produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    /// Explicit hit on the allergen's unsafe term list
    Taxonomy,
    /// Hit on a generic derivative keyword (lower confidence, still surfaced)
    Derivative,
}

/// One allergen found in one ingredient text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Allergen that was detected
    pub allergen: Allergen,
    /// Term from the taxonomy or derivative list that matched
    pub matched_term: String,
    /// Ingredient text the term was found in, as supplied (trimmed)
    pub source_phrase: String,
    /// Detection stage that matched
    pub source: MatchSource,
}

/// Outcome of screening user-supplied ingredients before generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScreeningVerdict {
    /// No restricted allergen found; generation may proceed
    Clear,
    /// Restricted allergens found; generation must be refused
    Blocked {
        /// Every conflicting (ingredient, allergen) pair
        conflicts: Vec<DetectionResult>,
    },
}

impl ScreeningVerdict {
    /// Whether generation must be refused
    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }

    /// Distinct conflicting ingredient texts, in first-seen order
    #[must_use]
    pub fn conflicting_ingredients(&self) -> Vec<&str> {
        let Self::Blocked { conflicts } = self else {
            return Vec::new();
        };

        let mut seen: Vec<&str> = Vec::new();
        for conflict in conflicts {
            if !seen.contains(&conflict.source_phrase.as_str()) {
                seen.push(conflict.source_phrase.as_str());
            }
        }
        seen
    }
}

/// Non-blocking warning attached to a generated recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllergenWarning {
    /// Allergen the recipe contains
    pub allergen: Allergen,
    /// Ingredient items where the allergen was found
    pub ingredients: Vec<String>,
    /// True when every hit came from the derivative fallback
    pub derivative_only: bool,
}
