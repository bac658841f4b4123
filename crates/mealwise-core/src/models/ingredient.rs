// ABOUTME: Structured recipe ingredient as authored by users or returned by recipe generation
// ABOUTME: Loosely typed item/quantity/unit/notes record shared by detection and consolidation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use serde::{Deserialize, Serialize};

/// One ingredient line of a recipe
///
/// `quantity` is deliberately a string: recipes contain values such as
/// `"2"`, `"1/2"` and `"a pinch"`. Interpretation happens in the shopping
/// module, never here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name as written, e.g. "Onions"
    pub item: String,
    /// Amount, possibly non-numeric
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// Unit of measure, e.g. "g", "cups", "whole"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Preparation notes, e.g. "finely diced"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Ingredient {
    /// Ingredient with just a name
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            ..Self::default()
        }
    }

    /// Set the quantity
    #[must_use]
    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    /// Set the unit
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set the preparation notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
