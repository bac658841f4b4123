// ABOUTME: The fixed set of 14 regulated allergens and their label parsing
// ABOUTME: Allergen enum with display names, aliases, and a lenient FromStr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the 14 regulated allergens
///
/// The set is closed: allergens are never created or destroyed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Allergen {
    /// Cereals containing gluten (wheat, rye, barley, oats, spelt, kamut)
    Gluten,
    /// Milk and dairy products
    Milk,
    /// Peanuts and groundnuts
    Peanuts,
    /// Tree nuts (almonds, hazelnuts, walnuts, cashews, ...)
    TreeNuts,
    /// Eggs
    Eggs,
    /// Fish
    Fish,
    /// Crustacean shellfish (shrimp, crab, lobster, ...)
    Shellfish,
    /// Soybeans
    Soy,
    /// Molluscs (clams, mussels, squid, ...)
    Molluscs,
    /// Sesame seeds
    Sesame,
    /// Mustard
    Mustard,
    /// Lupin
    Lupin,
    /// Celery and celeriac
    Celery,
    /// Sulphur dioxide and sulphites
    Sulphites,
}

impl Allergen {
    /// Every allergen, in declaration order
    pub const ALL: [Self; 14] = [
        Self::Gluten,
        Self::Milk,
        Self::Peanuts,
        Self::TreeNuts,
        Self::Eggs,
        Self::Fish,
        Self::Shellfish,
        Self::Soy,
        Self::Molluscs,
        Self::Sesame,
        Self::Mustard,
        Self::Lupin,
        Self::Celery,
        Self::Sulphites,
    ];

    /// Stable identifier, identical to the serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gluten => "gluten",
            Self::Milk => "milk",
            Self::Peanuts => "peanuts",
            Self::TreeNuts => "tree_nuts",
            Self::Eggs => "eggs",
            Self::Fish => "fish",
            Self::Shellfish => "shellfish",
            Self::Soy => "soy",
            Self::Molluscs => "molluscs",
            Self::Sesame => "sesame",
            Self::Mustard => "mustard",
            Self::Lupin => "lupin",
            Self::Celery => "celery",
            Self::Sulphites => "sulphites",
        }
    }

    /// Human-readable name for warnings and refusal messages
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Gluten => "Gluten",
            Self::Milk => "Milk",
            Self::Peanuts => "Peanuts",
            Self::TreeNuts => "Tree Nuts",
            Self::Eggs => "Eggs",
            Self::Fish => "Fish",
            Self::Shellfish => "Shellfish",
            Self::Soy => "Soy",
            Self::Molluscs => "Molluscs",
            Self::Sesame => "Sesame",
            Self::Mustard => "Mustard",
            Self::Lupin => "Lupin",
            Self::Celery => "Celery",
            Self::Sulphites => "Sulphites",
        }
    }
}

impl Display for Allergen {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.display_name())
    }
}

/// Label that does not name any known allergen
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown allergen '{label}'")]
pub struct AllergenParseError {
    /// The label as supplied
    pub label: String,
}

impl FromStr for Allergen {
    type Err = AllergenParseError;

    /// Parse an allergen label as stored in user preferences
    ///
    /// Accepts the canonical identifiers plus the spellings users and
    /// preference forms commonly produce (`dairy`, `nuts`, `sulfites`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");

        let allergen = match normalized.as_str() {
            "gluten" | "wheat" | "cereals" | "cereals_containing_gluten" => Self::Gluten,
            "milk" | "dairy" | "lactose" => Self::Milk,
            "peanuts" | "peanut" | "groundnuts" => Self::Peanuts,
            "tree_nuts" | "tree_nut" | "treenuts" | "nuts" => Self::TreeNuts,
            "eggs" | "egg" => Self::Eggs,
            "fish" => Self::Fish,
            "shellfish" | "crustaceans" | "crustacean" => Self::Shellfish,
            "soy" | "soya" | "soybeans" => Self::Soy,
            "molluscs" | "mollusc" | "mollusks" | "mollusk" => Self::Molluscs,
            "sesame" | "sesame_seeds" => Self::Sesame,
            "mustard" => Self::Mustard,
            "lupin" | "lupine" => Self::Lupin,
            "celery" | "celeriac" => Self::Celery,
            "sulphites" | "sulfites" | "sulphite" | "sulfite" | "sulphur_dioxide" => {
                Self::Sulphites
            }
            _ => {
                return Err(AllergenParseError {
                    label: s.to_owned(),
                })
            }
        };

        Ok(allergen)
    }
}
