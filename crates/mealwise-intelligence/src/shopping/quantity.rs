// ABOUTME: Quantity parsing for loosely typed recipe amounts
// ABOUTME: Splits "2", "1 1/2" and "½" from descriptive values like "a pinch"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use mealwise_core::constants::merge::DISPLAY_PRECISION;

/// A recipe amount, classified once when the ingredient is read
#[derive(Debug, Clone, PartialEq)]
pub enum Quantity {
    /// A value that can take part in arithmetic
    Numeric(f64),
    /// Anything else ("a pinch", "2-3", "to taste")
    Descriptive(String),
}

impl Quantity {
    /// Classify a raw quantity string; `None` when blank
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(parse_number(trimmed).map_or_else(
            || Self::Descriptive(trimmed.to_owned()),
            Self::Numeric,
        ))
    }
}

const VULGAR_FRACTIONS: &[(char, f64)] = &[
    ('½', 0.5),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('¼', 0.25),
    ('¾', 0.75),
    ('⅕', 0.2),
    ('⅛', 0.125),
    ('⅜', 0.375),
    ('⅝', 0.625),
    ('⅞', 0.875),
];

/// Parse a non-negative amount
///
/// Accepts integers, decimals, simple fractions (`1/2`), mixed numbers
/// (`1 1/2`) and a trailing unicode vulgar fraction (`1½`, `½`).
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();

    if let Some((last_index, last)) = raw.char_indices().next_back() {
        if let Some((_, fraction)) = VULGAR_FRACTIONS.iter().find(|(c, _)| *c == last) {
            let whole = raw[..last_index].trim();
            let whole = if whole.is_empty() {
                0.0
            } else {
                parse_decimal(whole)?
            };
            return Some(whole + fraction);
        }
    }

    let mut tokens = raw.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(single), None, None) => parse_fraction(single).or_else(|| parse_decimal(single)),
        (Some(whole), Some(fraction), None) => {
            Some(parse_decimal(whole)? + parse_fraction(fraction)?)
        }
        _ => None,
    }
}

fn parse_decimal(token: &str) -> Option<f64> {
    let digits = token.chars().filter(char::is_ascii_digit).count();
    let dots = token.chars().filter(|c| *c == '.').count();
    if digits == 0 || dots > 1 || digits + dots != token.chars().count() {
        return None;
    }
    token.parse().ok()
}

fn parse_fraction(token: &str) -> Option<f64> {
    let (numerator, denominator) = token.split_once('/')?;
    let numerator = parse_decimal(numerator)?;
    let denominator = parse_decimal(denominator)?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

/// Display a summed amount without trailing zeros, rounded to three decimals
#[must_use]
pub fn format_number(value: f64) -> String {
    let scale = 10_f64.powi(DISPLAY_PRECISION);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    format!("{rounded}")
}
