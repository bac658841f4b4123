// ABOUTME: Integration tests for ingredient consolidation and shopping-list generation
// ABOUTME: Tests name normalization, amount merging, unit handling, and aisle grouping
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Tests for the shopping module including:
//! - Consolidation of several recipes into one list
//! - Numeric and textual amount merging
//! - Quantity and unit parsing
//! - Category assignment and grouping

use mealwise::errors::ErrorCode;
use mealwise::models::{ConsolidatedIngredient, Ingredient, ShoppingCategory};
use mealwise::services::{
    generate_grouped_shopping_list, generate_shopping_list, parse_meal_plan,
    parse_recipe_ingredients,
};
use mealwise::shopping::{
    categorize, consolidate, format_number, group_by_category, normalize_item_name, parse_number,
    Quantity, Unit,
};

fn ingredient(item: &str, quantity: &str, unit: &str) -> Ingredient {
    Ingredient::new(item).with_quantity(quantity).with_unit(unit)
}

fn find<'a>(items: &'a [ConsolidatedIngredient], item: &str) -> &'a ConsolidatedIngredient {
    items
        .iter()
        .find(|i| i.item == item)
        .unwrap_or_else(|| panic!("no consolidated entry for '{item}'"))
}

// ============================================================================
// Consolidation Scenarios
// ============================================================================

#[test]
fn test_onions_across_two_recipes_are_summed() {
    let recipes = vec![
        vec![ingredient("onions", "1", "whole")],
        vec![ingredient("onions", "1", "whole")],
    ];

    let items = consolidate(&recipes);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item, "onions");
    assert_eq!(items[0].quantity.as_deref(), Some("2"));
    assert_eq!(items[0].unit.as_deref(), Some("whole"));
    assert_eq!(items[0].category, ShoppingCategory::Produce);
}

#[test]
fn test_unit_mismatch_falls_back_to_text() {
    let recipes = vec![
        vec![ingredient("flour", "200", "g")],
        vec![ingredient("flour", "2", "cups")],
    ];

    let items = consolidate(&recipes);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity.as_deref(), Some("200 + 2"));
    assert_eq!(items[0].unit.as_deref(), Some("g + cups"));
}

#[test]
fn test_unit_synonyms_are_summed() {
    let recipes = vec![
        vec![ingredient("sugar", "100", "grams")],
        vec![ingredient("sugar", "50", "g")],
        vec![ingredient("sugar", "1/2", "Gram")],
    ];

    let items = consolidate(&recipes);

    assert_eq!(items[0].quantity.as_deref(), Some("150.5"));
    assert_eq!(items[0].unit.as_deref(), Some("grams"));
}

#[test]
fn test_consolidating_a_list_twice_doubles_numeric_amounts() {
    let list = vec![
        ingredient("onions", "1", "whole"),
        ingredient("flour", "200", "g"),
        ingredient("garlic", "2", "cloves"),
        ingredient("milk", "1 1/2", "cups"),
        ingredient("salt", "a pinch", ""),
    ];

    let once = consolidate(&[list.clone()]);
    let twice = consolidate(&[list.clone(), list]);

    let names = |items: &[ConsolidatedIngredient]| -> Vec<String> {
        items.iter().map(|i| normalize_item_name(&i.item)).collect()
    };
    assert_eq!(names(&once), names(&twice));

    for (single, doubled) in once.iter().zip(&twice) {
        let Some(value) = single.quantity.as_deref().and_then(parse_number) else {
            continue;
        };
        assert_eq!(doubled.quantity, Some(format_number(value * 2.0)));
        assert_eq!(doubled.unit, single.unit);
    }

    assert_eq!(
        find(&twice, "salt").quantity.as_deref(),
        Some("a pinch + a pinch")
    );
}

#[test]
fn test_plural_and_singular_spellings_merge() {
    let recipes = vec![
        vec![ingredient("Tomatoes", "2", "whole")],
        vec![ingredient("tomato", "1", "whole")],
    ];

    let items = consolidate(&recipes);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item, "Tomatoes");
    assert_eq!(items[0].quantity.as_deref(), Some("3"));
}

#[test]
fn test_first_seen_order_is_kept() {
    let recipes = vec![
        vec![
            ingredient("rice", "1", "cup"),
            ingredient("chicken breast", "500", "g"),
        ],
        vec![
            ingredient("carrots", "3", "whole"),
            ingredient("rice", "1", "cup"),
        ],
    ];

    let order: Vec<String> = consolidate(&recipes).into_iter().map(|i| i.item).collect();
    assert_eq!(order, vec!["rice", "chicken breast", "carrots"]);
}

#[test]
fn test_missing_quantity_keeps_the_other_side() {
    let recipes = vec![
        vec![Ingredient::new("salt")],
        vec![ingredient("salt", "1", "tsp")],
    ];

    let items = consolidate(&recipes);

    assert_eq!(items[0].quantity.as_deref(), Some("1"));
    assert_eq!(items[0].unit.as_deref(), Some("tsp"));
}

#[test]
fn test_missing_unit_is_compatible() {
    let recipes = vec![
        vec![Ingredient::new("eggs").with_quantity("2")],
        vec![ingredient("eggs", "3", "whole")],
    ];

    let items = consolidate(&recipes);

    assert_eq!(items[0].quantity.as_deref(), Some("5"));
    assert_eq!(items[0].unit.as_deref(), Some("whole"));
}

#[test]
fn test_descriptive_quantities_are_joined() {
    let recipes = vec![
        vec![ingredient("basil", "2-3", "sprigs")],
        vec![ingredient("basil", "1", "sprig")],
    ];

    let items = consolidate(&recipes);

    assert_eq!(items[0].quantity.as_deref(), Some("2-3 + 1"));
    assert_eq!(items[0].unit.as_deref(), Some("sprigs + sprig"));
}

#[test]
fn test_notes_are_joined_skipping_blanks() {
    let recipes = vec![
        vec![Ingredient::new("garlic").with_notes("minced")],
        vec![Ingredient::new("garlic").with_notes("   ")],
        vec![Ingredient::new("garlic").with_notes("crushed")],
    ];

    let items = consolidate(&recipes);

    assert_eq!(items[0].notes.as_deref(), Some("minced, crushed"));
    assert_eq!(items[0].quantity, None);
    assert_eq!(items[0].unit, None);
}

#[test]
fn test_degenerate_inputs() {
    assert!(consolidate(&[]).is_empty());
    assert!(consolidate(&[Vec::new(), Vec::new()]).is_empty());

    let blank = vec![vec![Ingredient::new("  ").with_quantity("1")]];
    assert!(consolidate(&blank).is_empty());
}

// ============================================================================
// Normalization, Quantity and Unit Tests
// ============================================================================

#[test]
fn test_depluralization_boundaries() {
    assert_eq!(normalize_item_name("tomatoes"), "tomato");
    assert_eq!(normalize_item_name(" Tomato "), "tomato");
    assert_eq!(normalize_item_name("onions"), "onion");
    assert_eq!(normalize_item_name("grass"), "grass");
    assert_eq!(normalize_item_name("s"), "s");
}

#[test]
fn test_parse_number_forms() {
    assert_eq!(parse_number("2"), Some(2.0));
    assert_eq!(parse_number("0.5"), Some(0.5));
    assert_eq!(parse_number("1/4"), Some(0.25));
    assert_eq!(parse_number("1 1/2"), Some(1.5));
    assert_eq!(parse_number("1½"), Some(1.5));
    assert_eq!(parse_number("¾"), Some(0.75));
    assert_eq!(parse_number("1/0"), None);
    assert_eq!(parse_number("2-3"), None);
    assert_eq!(parse_number("a pinch"), None);
}

#[test]
fn test_quantity_classification() {
    assert_eq!(Quantity::parse("  "), None);
    assert_eq!(Quantity::parse("3"), Some(Quantity::Numeric(3.0)));
    assert_eq!(
        Quantity::parse(" to taste "),
        Some(Quantity::Descriptive("to taste".to_owned()))
    );
}

#[test]
fn test_format_number_trims_noise() {
    assert_eq!(format_number(2.0), "2");
    assert_eq!(format_number(0.1 + 0.2), "0.3");
    assert_eq!(format_number(1.0 / 3.0 * 3.0), "1");
    assert_eq!(format_number(0.0), "0");
}

#[test]
fn test_unit_canonicalization() {
    assert_eq!(Unit::parse("Tbsp."), Some(Unit::Tablespoons));
    assert_eq!(Unit::parse("grams"), Unit::parse("g"));
    assert_eq!(Unit::parse("  "), None);
    assert_eq!(Unit::parse("Sachet"), Some(Unit::Other("sachet".to_owned())));
}

// ============================================================================
// Category Tests
// ============================================================================

#[test]
fn test_every_item_gets_a_category() {
    let recipes = vec![vec![
        ingredient("onions", "1", "whole"),
        ingredient("chicken breast", "500", "g"),
        ingredient("whole milk", "1", "cup"),
        ingredient("flour", "200", "g"),
        ingredient("sourdough bread", "1", "loaf"),
        ingredient("sparkling water", "1", "l"),
        ingredient("xyzzy", "1", ""),
    ]];

    for item in consolidate(&recipes) {
        assert!(ShoppingCategory::ALL.contains(&item.category));
    }

    assert_eq!(categorize("xyzzy"), ShoppingCategory::Other);
    assert_eq!(categorize("Chicken Breast"), ShoppingCategory::MeatSeafood);
    assert_eq!(categorize("sourdough bread"), ShoppingCategory::Bakery);
    assert_eq!(categorize("sparkling water"), ShoppingCategory::Beverages);
    assert_eq!(categorize(""), ShoppingCategory::Other);
}

#[test]
fn test_group_by_category_uses_aisle_order() {
    let recipes = vec![vec![
        ingredient("flour", "200", "g"),
        ingredient("whole milk", "1", "cup"),
        ingredient("onions", "1", "whole"),
        ingredient("chicken breast", "500", "g"),
        ingredient("garlic", "2", "cloves"),
    ]];

    let groups = group_by_category(consolidate(&recipes));
    let aisles: Vec<ShoppingCategory> = groups.iter().map(|(c, _)| *c).collect();

    assert_eq!(
        aisles,
        vec![
            ShoppingCategory::Produce,
            ShoppingCategory::MeatSeafood,
            ShoppingCategory::Dairy,
            ShoppingCategory::Pantry,
        ]
    );

    let produce: Vec<&str> = groups[0].1.iter().map(|i| i.item.as_str()).collect();
    assert_eq!(produce, vec!["onions", "garlic"]);
}

// ============================================================================
// Service Tests
// ============================================================================

#[test]
fn test_generate_shopping_list_items_start_unchecked() {
    let recipes = vec![
        vec![ingredient("onions", "1", "whole")],
        vec![ingredient("onions", "1", "whole"), Ingredient::new("salt")],
    ];

    let items = generate_shopping_list(&recipes);

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].item_name, "onions");
    assert_eq!(items[0].quantity, "2 whole");
    assert!(!items[0].checked);
    assert_eq!(items[1].quantity, "");
}

#[test]
fn test_grouped_shopping_list_serializes_category_labels() {
    let recipes = vec![vec![
        ingredient("salmon fillet", "2", "pieces"),
        ingredient("lemons", "1", "whole"),
    ]];

    let sections = generate_grouped_shopping_list(&recipes);
    let json = serde_json::to_value(&sections).unwrap();

    assert_eq!(json[0]["category"], "Produce");
    assert_eq!(json[1]["category"], "Meat & Seafood");
    assert_eq!(json[1]["items"][0]["item_name"], "salmon fillet");
}

#[test]
fn test_parse_meal_plan() {
    let plan = parse_meal_plan(
        r#"[
            [{ "item": "onions", "quantity": "1", "unit": "whole" }],
            [{ "item": "flour", "quantity": "200", "unit": "g", "notes": "sifted" }]
        ]"#,
    )
    .unwrap();

    assert_eq!(plan.len(), 2);
    assert_eq!(plan[1][0].notes.as_deref(), Some("sifted"));

    let err = parse_meal_plan(r#"{ "item": "onions" }"#).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_parse_recipe_ingredients() {
    let ingredients = parse_recipe_ingredients(r#"[{ "item": "eggs" }]"#).unwrap();
    assert_eq!(ingredients, vec![Ingredient::new("eggs")]);

    let err = parse_recipe_ingredients("not json").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
    assert!(err.source.is_some());
}
