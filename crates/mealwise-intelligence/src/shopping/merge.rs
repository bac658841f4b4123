// ABOUTME: Merge policy for the amounts of ingredients that share a normalized name
// ABOUTME: Sums numeric amounts with compatible units, otherwise joins them textually
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use mealwise_core::constants::merge::TEXTUAL_JOIN;
use mealwise_core::models::Ingredient;

use super::quantity::{format_number, Quantity};
use super::units::Unit;

/// A unit as written, with its canonical form
#[derive(Debug, Clone, PartialEq)]
pub struct UnitLabel {
    /// Spelling kept for display
    pub raw: String,
    /// Canonical unit used for comparison
    pub canonical: Unit,
}

impl UnitLabel {
    /// Label for a raw unit string; `None` when blank
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Unit::parse(raw).map(|canonical| Self {
            raw: raw.trim().to_owned(),
            canonical,
        })
    }
}

/// Quantity and unit of a (possibly merged) shopping-list entry
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    /// Numeric value that can still be summed
    Numeric {
        /// Running total
        value: f64,
        /// Display form: the original text, or the formatted total once summed
        text: String,
        /// Unit, if any side supplied one
        unit: Option<UnitLabel>,
    },
    /// Amount that can no longer take part in arithmetic
    Textual {
        /// Joined quantity text, `None` when no side had a quantity
        quantity: Option<String>,
        /// Every unit supplied, in first-seen order
        units: Vec<UnitLabel>,
    },
}

impl Amount {
    /// Classify an ingredient's quantity and unit
    #[must_use]
    pub fn from_ingredient(ingredient: &Ingredient) -> Self {
        let unit = ingredient.unit.as_deref().and_then(UnitLabel::parse);

        match ingredient.quantity.as_deref().and_then(Quantity::parse) {
            Some(Quantity::Numeric(value)) => Self::Numeric {
                value,
                text: ingredient
                    .quantity
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or_default()
                    .to_owned(),
                unit,
            },
            Some(Quantity::Descriptive(text)) => Self::Textual {
                quantity: Some(text),
                units: unit.into_iter().collect(),
            },
            None => Self::Textual {
                quantity: None,
                units: unit.into_iter().collect(),
            },
        }
    }

    /// Fold `other` into this amount
    ///
    /// - numeric on both sides with equal canonical units (or a side without
    ///   a unit): values are summed and this side's unit spelling is kept
    /// - one side without a quantity: the other side's quantity is kept
    /// - otherwise: quantities and units are joined with `" + "`
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (
                Self::Numeric {
                    value: left,
                    unit: left_unit,
                    ..
                },
                Self::Numeric {
                    value: right,
                    unit: right_unit,
                    ..
                },
            ) if units_compatible(left_unit.as_ref(), right_unit.as_ref()) => {
                let value = left + right;
                Self::Numeric {
                    value,
                    text: format_number(value),
                    unit: left_unit.or(right_unit),
                }
            }
            (left, right) => {
                let units: Vec<UnitLabel> = left.units().chain(right.units()).cloned().collect();

                match (left.quantity(), right.quantity()) {
                    (Some(l), Some(r)) => Self::Textual {
                        quantity: Some(format!("{l}{TEXTUAL_JOIN}{r}")),
                        units,
                    },
                    (Some(_), None) => left.with_units(units),
                    (None, Some(_)) => right.with_units(units),
                    (None, None) => Self::Textual {
                        quantity: None,
                        units,
                    },
                }
            }
        }
    }

    /// Quantity for display
    #[must_use]
    pub fn quantity(&self) -> Option<&str> {
        match self {
            Self::Numeric { text, .. } => Some(text),
            Self::Textual { quantity, .. } => quantity.as_deref(),
        }
    }

    /// Unit for display, joined with `" + "` when several were kept
    #[must_use]
    pub fn unit(&self) -> Option<String> {
        match self {
            Self::Numeric { unit, .. } => unit.as_ref().map(|u| u.raw.clone()),
            Self::Textual { units, .. } if units.is_empty() => None,
            Self::Textual { units, .. } => Some(
                units
                    .iter()
                    .map(|u| u.raw.as_str())
                    .collect::<Vec<_>>()
                    .join(TEXTUAL_JOIN),
            ),
        }
    }

    fn units(&self) -> impl Iterator<Item = &UnitLabel> {
        let (single, many) = match self {
            Self::Numeric { unit, .. } => (unit.as_ref(), &[][..]),
            Self::Textual { units, .. } => (None, units.as_slice()),
        };
        single.into_iter().chain(many)
    }

    /// Keep this side's quantity with a merged unit list
    fn with_units(&self, mut units: Vec<UnitLabel>) -> Self {
        match self {
            Self::Numeric { value, text, .. } if units.len() <= 1 => Self::Numeric {
                value: *value,
                text: text.clone(),
                unit: units.pop(),
            },
            _ => Self::Textual {
                quantity: self.quantity().map(str::to_owned),
                units,
            },
        }
    }
}

fn units_compatible(left: Option<&UnitLabel>, right: Option<&UnitLabel>) -> bool {
    match (left, right) {
        (Some(l), Some(r)) => l.canonical == r.canonical,
        _ => true,
    }
}
