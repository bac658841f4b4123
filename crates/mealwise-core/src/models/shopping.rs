// ABOUTME: Shopping-list models produced by ingredient consolidation
// ABOUTME: ShoppingCategory aisle buckets, ConsolidatedIngredient, and ShoppingListItem
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Shopping-aisle bucket assigned to every consolidated item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShoppingCategory {
    /// Fruit, vegetables, fresh herbs
    Produce,
    /// Meat, poultry, fish, and shellfish
    #[serde(rename = "Meat & Seafood")]
    MeatSeafood,
    /// Milk, cheese, butter, eggs
    Dairy,
    /// Dry goods, spices, oils, canned goods
    Pantry,
    /// Frozen foods
    Frozen,
    /// Bread and baked goods
    Bakery,
    /// Drinks
    Beverages,
    /// Anything no keyword matched
    #[default]
    Other,
}

impl ShoppingCategory {
    /// Every category, in aisle display order
    pub const ALL: [Self; 8] = [
        Self::Produce,
        Self::MeatSeafood,
        Self::Dairy,
        Self::Pantry,
        Self::Frozen,
        Self::Bakery,
        Self::Beverages,
        Self::Other,
    ];

    /// Display label, identical to the serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Produce => "Produce",
            Self::MeatSeafood => "Meat & Seafood",
            Self::Dairy => "Dairy",
            Self::Pantry => "Pantry",
            Self::Frozen => "Frozen",
            Self::Bakery => "Bakery",
            Self::Beverages => "Beverages",
            Self::Other => "Other",
        }
    }
}

impl Display for ShoppingCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Result of merging every ingredient that shares a normalized name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedIngredient {
    /// First-seen spelling of the item name
    pub item: String,
    /// Summed or textually joined quantity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// Unit spelling kept for display, or joined units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Comma-joined non-empty notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Aisle bucket
    pub category: ShoppingCategory,
}

impl ConsolidatedIngredient {
    /// Quantity and unit as one display string, e.g. `"2 whole"`
    #[must_use]
    pub fn display_quantity(&self) -> String {
        [self.quantity.as_deref(), self.unit.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Convert into the externally visible shopping-list line
    #[must_use]
    pub fn into_shopping_list_item(self) -> ShoppingListItem {
        ShoppingListItem {
            quantity: self.display_quantity(),
            item_name: self.item,
            category: self.category,
            checked: false,
        }
    }
}

/// Externally visible shopping-list line
///
/// Identifiers and the `checked` state are owned by the calling layer; items
/// produced by consolidation always start unchecked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    /// Display name of the item
    pub item_name: String,
    /// Quantity and unit as one string
    pub quantity: String,
    /// Aisle bucket
    pub category: ShoppingCategory,
    /// Whether the user ticked the item off
    pub checked: bool,
}
