// ABOUTME: Reduces several recipes' ingredient lists into one deduplicated shopping list
// ABOUTME: Groups by normalized name, folds amounts and notes, then assigns aisles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::collections::HashMap;
use std::mem;

use mealwise_core::constants::merge::NOTES_JOIN;
use mealwise_core::models::{ConsolidatedIngredient, Ingredient, ShoppingCategory};
use tracing::debug;

use super::categories::categorize;
use super::merge::Amount;
use super::normalize::normalize_item_name;

/// Running state for one normalized item name
struct Group {
    item: String,
    amount: Amount,
    notes: Vec<String>,
}

impl Group {
    fn start(ingredient: &Ingredient) -> Self {
        let mut group = Self {
            item: ingredient.item.trim().to_owned(),
            amount: Amount::from_ingredient(ingredient),
            notes: Vec::new(),
        };
        group.push_notes(ingredient);
        group
    }

    fn fold(&mut self, ingredient: &Ingredient) {
        let amount = mem::replace(
            &mut self.amount,
            Amount::Textual {
                quantity: None,
                units: Vec::new(),
            },
        );
        self.amount = amount.merge(Amount::from_ingredient(ingredient));
        self.push_notes(ingredient);
    }

    fn push_notes(&mut self, ingredient: &Ingredient) {
        if let Some(notes) = ingredient.notes.as_deref().map(str::trim) {
            if !notes.is_empty() {
                self.notes.push(notes.to_owned());
            }
        }
    }

    fn finish(self) -> ConsolidatedIngredient {
        let category = categorize(&self.item);
        ConsolidatedIngredient {
            quantity: self.amount.quantity().map(str::to_owned),
            unit: self.amount.unit(),
            notes: (!self.notes.is_empty()).then(|| self.notes.join(NOTES_JOIN)),
            category,
            item: self.item,
        }
    }
}

/// Merge every recipe's ingredients into one shopping list
///
/// Entries appear in the order their normalized name was first seen and keep
/// that first spelling. Ingredients with a blank item name are skipped. An
/// empty input gives an empty list; malformed quantities never fail, they
/// fall back to textual joining.
#[must_use]
pub fn consolidate(ingredient_lists: &[Vec<Ingredient>]) -> Vec<ConsolidatedIngredient> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for ingredient in ingredient_lists.iter().flatten() {
        if ingredient.item.trim().is_empty() {
            debug!("Skipping ingredient with blank item name");
            continue;
        }

        let key = normalize_item_name(&ingredient.item);
        match index.get(&key).and_then(|&position| groups.get_mut(position)) {
            Some(group) => group.fold(ingredient),
            None => {
                index.insert(key, groups.len());
                groups.push(Group::start(ingredient));
            }
        }
    }

    debug!(
        lists = ingredient_lists.len(),
        items = groups.len(),
        "Consolidated ingredient lists"
    );

    groups.into_iter().map(Group::finish).collect()
}

/// Bucket consolidated items by aisle, in aisle display order
///
/// Only non-empty categories are returned; items keep their relative order.
#[must_use]
pub fn group_by_category(
    items: Vec<ConsolidatedIngredient>,
) -> Vec<(ShoppingCategory, Vec<ConsolidatedIngredient>)> {
    let mut buckets: Vec<(ShoppingCategory, Vec<ConsolidatedIngredient>)> = ShoppingCategory::ALL
        .iter()
        .map(|category| (*category, Vec::new()))
        .collect();

    for item in items {
        if let Some((_, bucket)) = buckets.iter_mut().find(|(c, _)| *c == item.category) {
            bucket.push(item);
        }
    }

    buckets.retain(|(_, bucket)| !bucket.is_empty());
    buckets
}
