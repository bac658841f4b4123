// ABOUTME: Unit canonicalization for shopping-list merging
// ABOUTME: Maps unit spellings and abbreviations onto one Unit so "g" and "grams" compare equal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::collections::HashMap;
use std::sync::LazyLock;

/// Canonical unit of measure
///
/// Units only compare equal when they canonicalize to the same variant;
/// no conversion between units is attempted (grams never merge with
/// kilograms or cups).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Weight in grams
    Grams,
    /// Weight in kilograms
    Kilograms,
    /// Weight in milligrams
    Milligrams,
    /// Weight in ounces
    Ounces,
    /// Weight in pounds
    Pounds,
    /// Volume in milliliters
    Milliliters,
    /// Volume in liters
    Liters,
    /// US cups
    Cups,
    /// Tablespoons
    Tablespoons,
    /// Teaspoons
    Teaspoons,
    /// Fluid ounces
    FluidOunces,
    /// Generic count
    Pieces,
    /// Whole items ("2 whole onions")
    Whole,
    /// Garlic cloves
    Cloves,
    /// Cans or tins
    Cans,
    /// Pinches
    Pinches,
    /// Dashes
    Dashes,
    /// Slices
    Slices,
    /// Bunches
    Bunches,
    /// Handfuls
    Handfuls,
    /// Herb sprigs
    Sprigs,
    /// Sticks (butter, cinnamon, celery)
    Sticks,
    /// Packages or packets
    Packages,
    /// Heads (garlic, lettuce)
    Heads,
    /// Unrecognized unit, compared by its normalized spelling
    Other(String),
}

static UNIT_ALIASES: LazyLock<HashMap<&'static str, Unit>> = LazyLock::new(|| {
    let table: &[(Unit, &[&str])] = &[
        (Unit::Grams, &["g", "gr", "gram", "grams", "gramme", "grammes"]),
        (Unit::Kilograms, &["kg", "kgs", "kilo", "kilos", "kilogram", "kilograms"]),
        (Unit::Milligrams, &["mg", "milligram", "milligrams"]),
        (Unit::Ounces, &["oz", "ounce", "ounces"]),
        (Unit::Pounds, &["lb", "lbs", "pound", "pounds"]),
        (
            Unit::Milliliters,
            &["ml", "mls", "milliliter", "milliliters", "millilitre", "millilitres"],
        ),
        (Unit::Liters, &["l", "liter", "liters", "litre", "litres"]),
        (Unit::Cups, &["c", "cup", "cups"]),
        (
            Unit::Tablespoons,
            &["tbsp", "tbsps", "tbs", "tbl", "tablespoon", "tablespoons"],
        ),
        (Unit::Teaspoons, &["tsp", "tsps", "teaspoon", "teaspoons"]),
        (
            Unit::FluidOunces,
            &["fl oz", "floz", "fluid ounce", "fluid ounces"],
        ),
        (Unit::Pieces, &["pc", "pcs", "piece", "pieces", "item", "items"]),
        (Unit::Whole, &["whole"]),
        (Unit::Cloves, &["clove", "cloves"]),
        (Unit::Cans, &["can", "cans", "tin", "tins"]),
        (Unit::Pinches, &["pinch", "pinches"]),
        (Unit::Dashes, &["dash", "dashes"]),
        (Unit::Slices, &["slice", "slices"]),
        (Unit::Bunches, &["bunch", "bunches"]),
        (Unit::Handfuls, &["handful", "handfuls"]),
        (Unit::Sprigs, &["sprig", "sprigs"]),
        (Unit::Sticks, &["stick", "sticks"]),
        (
            Unit::Packages,
            &["pkg", "pack", "packs", "package", "packages", "packet", "packets"],
        ),
        (Unit::Heads, &["head", "heads"]),
    ];

    table
        .iter()
        .flat_map(|(unit, aliases)| aliases.iter().map(move |alias| (*alias, unit.clone())))
        .collect()
});

impl Unit {
    /// Canonicalize a unit spelling
    ///
    /// Lower-cases, trims and drops periods ("Tbsp." → tablespoons).
    /// Returns `None` for a blank unit.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.trim().to_lowercase().replace('.', "");
        let key = key.trim();
        if key.is_empty() {
            return None;
        }

        Some(
            UNIT_ALIASES
                .get(key)
                .cloned()
                .unwrap_or_else(|| Self::Other(key.to_owned())),
        )
    }
}
