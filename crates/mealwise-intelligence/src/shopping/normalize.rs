// ABOUTME: Item-name normalization used as the grouping key for consolidation
// ABOUTME: Lower-cases, trims, and applies a naive plural strip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use crate::matching::normalize_text;

/// Grouping key for an ingredient name
///
/// Strips a trailing "es" (tomatoes → tomato), otherwise a trailing "s" not
/// preceded by another "s" (onions → onion, grass stays grass). This is a
/// heuristic: irregular plurals are not handled and some words lose a
/// letter they should keep. A name that would become empty is kept as is.
#[must_use]
pub fn normalize_item_name(item: &str) -> String {
    let lowered = normalize_text(item);

    let stripped = lowered.strip_suffix("es").or_else(|| {
        lowered
            .strip_suffix('s')
            .filter(|stem| !stem.ends_with('s'))
    });

    match stripped {
        Some(stem) if !stem.trim_end().is_empty() => stem.to_owned(),
        _ => lowered,
    }
}
