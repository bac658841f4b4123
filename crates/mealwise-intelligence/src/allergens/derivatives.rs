// ABOUTME: Generic derivative keywords checked when neither taxonomy list matched
// ABOUTME: Lower-confidence fallback tuned to over-warn rather than miss an allergen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::collections::HashMap;
use std::sync::LazyLock;

use mealwise_core::models::Allergen;

use crate::matching::{contains_compound_term, normalize_text};

const BUILTIN_DERIVATIVES: &[(Allergen, &[&str])] = &[
    (
        Allergen::Gluten,
        &[
            "gluten", "wheat", "flour", "bread", "pasta", "barley", "rye", "malt", "semolina",
            "crumb",
        ],
    ),
    (
        Allergen::Milk,
        &[
            "dairy", "cheese", "butter", "cream", "yogurt", "yoghurt", "whey", "casein",
            "lactose", "milk",
        ],
    ),
    (Allergen::Peanuts, &["peanut", "groundnut", "arachis"]),
    (Allergen::TreeNuts, &["nut", "almond"]),
    (Allergen::Eggs, &["egg", "mayo", "albumin"]),
    (Allergen::Fish, &["fish", "anchov", "roe"]),
    (
        Allergen::Shellfish,
        &["shrimp", "prawn", "crab", "lobster", "crustacean", "shellfish"],
    ),
    (Allergen::Soy, &["soy", "soya", "tofu", "miso", "edamame"]),
    (
        Allergen::Molluscs,
        &[
            "clam", "mussel", "oyster", "squid", "octopus", "scallop", "mollusc", "mollusk",
        ],
    ),
    (Allergen::Sesame, &["sesame", "tahini"]),
    (Allergen::Mustard, &["mustard", "dijon"]),
    (Allergen::Lupin, &["lupin"]),
    (Allergen::Celery, &["celer", "bouillon", "stock cube"]),
    (
        Allergen::Sulphites,
        &["sulphite", "sulfite", "sulphur", "sulfur", "wine"],
    ),
];

static BUILTIN_KEYWORDS: LazyLock<DerivativeKeywords> = LazyLock::new(|| {
    let keywords = BUILTIN_DERIVATIVES
        .iter()
        .map(|(allergen, terms)| (*allergen, terms.iter().map(|t| normalize_text(t)).collect()))
        .collect();

    DerivativeKeywords { keywords }
});

/// Allergen to derivative keyword map, scanned in list order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivativeKeywords {
    keywords: HashMap<Allergen, Vec<String>>,
}

impl DerivativeKeywords {
    /// The built-in keyword lists
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN_KEYWORDS
    }

    /// Replace the keyword list for one allergen
    pub fn insert<I>(&mut self, allergen: Allergen, terms: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|term| normalize_text(term.as_ref()))
            .filter(|term| !term.is_empty())
            .collect();
        self.keywords.insert(allergen, terms);
    }

    /// Keywords registered for one allergen
    #[must_use]
    pub fn get(&self, allergen: Allergen) -> &[String] {
        self.keywords.get(&allergen).map_or(&[], Vec::as_slice)
    }

    /// First keyword for `allergen` contained in already-normalized `text`
    ///
    /// Short keywords may sit inside a compound word unless that word is
    /// one of `lookalikes`.
    #[must_use]
    pub fn first_match(
        &self,
        allergen: Allergen,
        text: &str,
        lookalikes: &[String],
    ) -> Option<&str> {
        self.get(allergen)
            .iter()
            .find(|keyword| contains_compound_term(text, keyword, lookalikes))
            .map(String::as_str)
    }
}
