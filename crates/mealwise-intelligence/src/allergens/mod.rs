// ABOUTME: Allergen safety detection over free-text ingredient descriptions
// ABOUTME: Taxonomy tables, derivative keywords, the detector, and pre/post-generation screening
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # Allergen Detection
//!
//! Classifies ingredient text against the 14 regulated allergens using a
//! fixed three-stage priority:
//!
//! 1. **Safe list**: look-alikes such as "buckwheat" or "coconut" clear the
//!    allergen outright
//! 2. **Unsafe list**: explicit terms, dish names and hidden sources
//! 3. **Derivative keywords**: generic fragments such as "cheese" or "flour"
//!
//! Recall is favoured over precision. The two screening entry points decide
//! how hits are surfaced: the pre-generation gate blocks, the post-generation
//! audit warns.

/// Derivative keyword fallback
pub mod derivatives;
/// The allergen detector
pub mod detector;
/// Pre-generation gate and post-generation audit
pub mod screening;
/// Safe/unsafe term tables
pub mod taxonomy;
mod taxonomy_data;

pub use derivatives::DerivativeKeywords;
pub use detector::AllergenDetector;
pub use taxonomy::{
    AllergenTaxonomies, AllergenTaxonomy, TaxonomyError, TaxonomyOverrides, TermOverrides,
};
