// ABOUTME: Term matching used by the allergen detector and the aisle classifier
// ABOUTME: Short terms match on word boundaries (whole or compound words), longer terms as substrings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

/// Terms at or below this many characters must match on word boundaries
///
/// Keeps "rye" out of "dryer", "ham" out of "champagne" and "sage" out of
/// "sausage", while longer terms still catch compounds such as "buttermilk".
pub const WHOLE_WORD_MAX_CHARS: usize = 4;

/// Lower-case and trim text before matching
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Whether `haystack` contains `term`
///
/// Both arguments are expected to be lower-case already. Short terms (see
/// [`WHOLE_WORD_MAX_CHARS`]) must start on a word boundary and end on one,
/// optionally after an `s` or `es` plural suffix; longer terms match
/// anywhere. An empty term never matches.
#[must_use]
pub fn contains_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }

    if term.chars().count() > WHOLE_WORD_MAX_CHARS {
        return haystack.contains(term);
    }

    haystack.match_indices(term).any(|(start, _)| {
        starts_word(haystack, start) && ends_word(&haystack[start + term.len()..])
    })
}

/// Whether `haystack` contains `term`, including inside compound words
///
/// Like [`contains_term`], but a short term only needs a word boundary on
/// one side, so "fish" is found in "catfish" and "soy" in "soymilk". An
/// occurrence embedded in one of `lookalikes` ("fish" in "shellfish")
/// does not count; look-alikes are compared with any plural suffix removed.
#[must_use]
pub fn contains_compound_term<S: AsRef<str>>(
    haystack: &str,
    term: &str,
    lookalikes: &[S],
) -> bool {
    if term.is_empty() {
        return false;
    }

    if term.chars().count() > WHOLE_WORD_MAX_CHARS {
        return haystack.contains(term);
    }

    haystack.match_indices(term).any(|(start, _)| {
        let end = start + term.len();
        let at_start = starts_word(haystack, start);
        let at_end = ends_word(&haystack[end..]);

        if at_start && at_end {
            return true;
        }
        (at_start || at_end) && !is_lookalike(enclosing_word(haystack, start, end), lookalikes)
    })
}

/// Whether the character before `start` opens a word
fn starts_word(haystack: &str, start: usize) -> bool {
    haystack[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_alphanumeric())
}

/// Whether the text following a match closes the word, allowing a plural suffix
fn ends_word(rest: &str) -> bool {
    let closes = |s: &str| s.chars().next().is_none_or(|c| !c.is_alphanumeric());

    closes(rest)
        || rest.strip_prefix("es").is_some_and(closes)
        || rest.strip_prefix('s').is_some_and(closes)
}

/// The run of alphanumeric characters around `haystack[start..end]`
fn enclosing_word(haystack: &str, start: usize, end: usize) -> &str {
    let from = haystack[..start]
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_alphanumeric())
        .map_or(0, |(index, c)| index + c.len_utf8());
    let to = haystack[end..]
        .find(|c: char| !c.is_alphanumeric())
        .map_or(haystack.len(), |index| end + index);

    &haystack[from..to]
}

fn is_lookalike<S: AsRef<str>>(word: &str, lookalikes: &[S]) -> bool {
    lookalikes.iter().any(|lookalike| {
        let lookalike = lookalike.as_ref();
        word == lookalike
            || word.strip_suffix("es") == Some(lookalike)
            || word.strip_suffix('s') == Some(lookalike)
    })
}
