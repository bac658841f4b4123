// ABOUTME: Allergen detector classifying free-text ingredient descriptions
// ABOUTME: Applies safe list, then unsafe list, then derivative keywords, in that fixed order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use mealwise_core::models::{Allergen, DetectionResult, MatchSource};

use super::derivatives::DerivativeKeywords;
use super::taxonomy::AllergenTaxonomies;
use crate::matching::{contains_compound_term, contains_term, normalize_text};

/// Taxonomy-driven allergen detector
///
/// Detection is total: blank text, unknown ingredients and an empty set of
/// allergens of interest all produce an empty result, never an error. The
/// detector holds only immutable tables and can be shared across threads.
#[derive(Debug, Clone)]
pub struct AllergenDetector {
    taxonomies: AllergenTaxonomies,
    derivatives: DerivativeKeywords,
}

impl Default for AllergenDetector {
    fn default() -> Self {
        Self::new(
            AllergenTaxonomies::builtin().clone(),
            DerivativeKeywords::builtin().clone(),
        )
    }
}

impl AllergenDetector {
    /// Detector over injected tables
    #[must_use]
    pub const fn new(taxonomies: AllergenTaxonomies, derivatives: DerivativeKeywords) -> Self {
        Self {
            taxonomies,
            derivatives,
        }
    }

    /// Taxonomies this detector reads
    #[must_use]
    pub const fn taxonomies(&self) -> &AllergenTaxonomies {
        &self.taxonomies
    }

    /// Derivative keywords this detector falls back to
    #[must_use]
    pub const fn derivatives(&self) -> &DerivativeKeywords {
        &self.derivatives
    }

    /// Detect allergens of interest across several ingredient texts
    ///
    /// Results are ordered by ingredient, then by the order allergens were
    /// requested. Repeated allergens of interest are checked once.
    #[must_use]
    pub fn detect<S: AsRef<str>>(
        &self,
        ingredient_texts: &[S],
        allergens_of_interest: &[Allergen],
    ) -> Vec<DetectionResult> {
        let allergens = dedup_allergens(allergens_of_interest);

        ingredient_texts
            .iter()
            .flat_map(|text| self.detect_in(text.as_ref(), &allergens))
            .collect()
    }

    /// Detect allergens of interest in one ingredient text
    #[must_use]
    pub fn detect_one(&self, text: &str, allergens_of_interest: &[Allergen]) -> Vec<DetectionResult> {
        self.detect_in(text, &dedup_allergens(allergens_of_interest))
    }

    /// Whether `text` contains `allergen`
    #[must_use]
    pub fn contains_allergen(&self, text: &str, allergen: Allergen) -> bool {
        self.classify(&normalize_text(text), allergen).is_some()
    }

    fn detect_in(&self, text: &str, allergens: &[Allergen]) -> Vec<DetectionResult> {
        let source_phrase = text.trim();
        if source_phrase.is_empty() {
            return Vec::new();
        }

        let normalized = normalize_text(source_phrase);
        allergens
            .iter()
            .filter_map(|allergen| {
                self.classify(&normalized, *allergen)
                    .map(|(matched_term, source)| DetectionResult {
                        allergen: *allergen,
                        matched_term: matched_term.to_owned(),
                        source_phrase: source_phrase.to_owned(),
                        source,
                    })
            })
            .collect()
    }

    /// Run the three detection stages for one allergen on normalized text
    ///
    /// Unsafe terms and derivative keywords also match inside compound
    /// words ("catfish", "soymilk"), except within the allergen's
    /// look-alike words.
    fn classify(&self, normalized: &str, allergen: Allergen) -> Option<(&str, MatchSource)> {
        let mut lookalikes: &[String] = &[];

        if let Some(taxonomy) = self.taxonomies.get(allergen) {
            if taxonomy
                .safe_terms
                .iter()
                .any(|term| contains_term(normalized, term))
            {
                return None;
            }

            lookalikes = &taxonomy.lookalike_words;

            // Longest hit so "peanut butter" is reported over "peanut"
            let unsafe_hit = taxonomy
                .unsafe_terms
                .iter()
                .filter(|term| contains_compound_term(normalized, term, lookalikes))
                .max_by_key(|term| term.len());

            if let Some(term) = unsafe_hit {
                return Some((term.as_str(), MatchSource::Taxonomy));
            }
        }

        self.derivatives
            .first_match(allergen, normalized, lookalikes)
            .map(|term| (term, MatchSource::Derivative))
    }
}

fn dedup_allergens(allergens: &[Allergen]) -> Vec<Allergen> {
    let mut unique = Vec::with_capacity(allergens.len());
    for allergen in allergens {
        if !unique.contains(allergen) {
            unique.push(*allergen);
        }
    }
    unique
}
