// ABOUTME: Per-allergen safe/unsafe term lists and the validated collection the detector reads
// ABOUTME: Built-in tables load once; JSON overrides can extend them before validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::collections::HashMap;
use std::sync::LazyLock;

use mealwise_core::errors::AppError;
use mealwise_core::models::Allergen;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::taxonomy_data::BUILTIN_TERMS;
use crate::matching::normalize_text;

/// Errors raised while building or validating taxonomies
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    /// A phrase is listed as both safe and unsafe for one allergen
    #[error("term '{term}' is listed as both safe and unsafe for {allergen}")]
    Overlap {
        /// Allergen whose lists overlap
        allergen: Allergen,
        /// The duplicated phrase
        term: String,
    },
    /// A blank phrase was supplied
    #[error("empty term in the {allergen} taxonomy")]
    EmptyTerm {
        /// Allergen the blank phrase was supplied for
        allergen: Allergen,
    },
}

impl From<TaxonomyError> for AppError {
    fn from(err: TaxonomyError) -> Self {
        Self::config_invalid(err.to_string())
    }
}

/// Safe and unsafe phrase lists for one allergen
///
/// Phrases are stored lower-cased, trimmed and without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllergenTaxonomy {
    /// Phrases indicating the allergen is present
    pub unsafe_terms: Vec<String>,
    /// Look-alike phrases confirmed free of the allergen
    pub safe_terms: Vec<String>,
    /// Compound words in which a short unsafe term does not count
    #[serde(default)]
    pub lookalike_words: Vec<String>,
}

impl AllergenTaxonomy {
    /// Build a taxonomy from raw phrase lists, normalizing each phrase
    #[must_use]
    pub fn new<U, S>(unsafe_terms: U, safe_terms: S) -> Self
    where
        U: IntoIterator,
        U::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let mut taxonomy = Self::default();
        taxonomy.add_terms(unsafe_terms, safe_terms);
        taxonomy
    }

    /// Append phrases to both lists, skipping ones already present
    pub fn add_terms<U, S>(&mut self, unsafe_terms: U, safe_terms: S)
    where
        U: IntoIterator,
        U::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        push_unique(&mut self.unsafe_terms, unsafe_terms);
        push_unique(&mut self.safe_terms, safe_terms);
    }

    /// Add look-alike words, skipping ones already present
    #[must_use]
    pub fn with_lookalikes<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        push_unique(&mut self.lookalike_words, words);
        self
    }

    /// Check the disjointness invariant for this allergen
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError::EmptyTerm`] for blank phrases or look-alike
    /// words and [`TaxonomyError::Overlap`] for a phrase present in both lists.
    pub fn validate(&self, allergen: Allergen) -> Result<(), TaxonomyError> {
        if self
            .unsafe_terms
            .iter()
            .chain(&self.safe_terms)
            .chain(&self.lookalike_words)
            .any(String::is_empty)
        {
            return Err(TaxonomyError::EmptyTerm { allergen });
        }

        if let Some(term) = self
            .unsafe_terms
            .iter()
            .find(|term| self.safe_terms.contains(term))
        {
            return Err(TaxonomyError::Overlap {
                allergen,
                term: term.clone(),
            });
        }

        Ok(())
    }
}

fn push_unique<I>(target: &mut Vec<String>, terms: I)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for term in terms {
        let term = normalize_text(term.as_ref());
        if !target.contains(&term) {
            target.push(term);
        }
    }
}

/// Extra terms for one allergen, as read from an overrides file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermOverrides {
    /// Additional unsafe phrases
    #[serde(default, rename = "unsafe")]
    pub unsafe_terms: Vec<String>,
    /// Additional safe phrases
    #[serde(default, rename = "safe")]
    pub safe_terms: Vec<String>,
    /// Additional look-alike words
    #[serde(default)]
    pub lookalikes: Vec<String>,
}

/// Deployment-specific additions to the built-in taxonomies
///
/// ```json
/// {
///   "allergens": {
///     "gluten": { "unsafe": ["farina"], "safe": ["teff"], "lookalikes": ["whale"] }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyOverrides {
    /// Extra phrases keyed by allergen
    #[serde(default)]
    pub allergens: HashMap<Allergen, TermOverrides>,
}

static BUILTIN_TAXONOMIES: LazyLock<AllergenTaxonomies> = LazyLock::new(|| {
    let taxonomies = BUILTIN_TERMS
        .iter()
        .map(|entry| {
            (
                entry.allergen,
                AllergenTaxonomy::new(entry.unsafe_terms, entry.safe_terms)
                    .with_lookalikes(entry.lookalikes),
            )
        })
        .collect();

    AllergenTaxonomies { taxonomies }
});

/// Taxonomies for every allergen the detector knows about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllergenTaxonomies {
    taxonomies: HashMap<Allergen, AllergenTaxonomy>,
}

impl AllergenTaxonomies {
    /// The built-in tables covering all 14 allergens
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN_TAXONOMIES
    }

    /// Taxonomy for one allergen, if any terms are registered
    #[must_use]
    pub fn get(&self, allergen: Allergen) -> Option<&AllergenTaxonomy> {
        self.taxonomies.get(&allergen)
    }

    /// Replace the taxonomy for one allergen
    pub fn insert(&mut self, allergen: Allergen, taxonomy: AllergenTaxonomy) {
        self.taxonomies.insert(allergen, taxonomy);
    }

    /// Number of allergens with a registered taxonomy
    #[must_use]
    pub fn len(&self) -> usize {
        self.taxonomies.len()
    }

    /// Whether no taxonomy is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.taxonomies.is_empty()
    }

    /// Merge override terms into the tables and re-validate
    ///
    /// # Errors
    ///
    /// Returns a [`TaxonomyError`] when the merged tables break the
    /// safe/unsafe disjointness invariant or contain blank phrases.
    pub fn extend(&mut self, overrides: &TaxonomyOverrides) -> Result<(), TaxonomyError> {
        for (allergen, terms) in &overrides.allergens {
            let taxonomy = self.taxonomies.entry(*allergen).or_default();
            taxonomy.add_terms(&terms.unsafe_terms, &terms.safe_terms);
            push_unique(&mut taxonomy.lookalike_words, &terms.lookalikes);
        }
        self.validate()
    }

    /// Check every allergen's taxonomy
    ///
    /// # Errors
    ///
    /// Returns the first [`TaxonomyError`] found, in allergen order.
    pub fn validate(&self) -> Result<(), TaxonomyError> {
        Allergen::ALL
            .iter()
            .filter_map(|allergen| self.get(*allergen).map(|taxonomy| (allergen, taxonomy)))
            .try_for_each(|(allergen, taxonomy)| taxonomy.validate(*allergen))
    }
}
