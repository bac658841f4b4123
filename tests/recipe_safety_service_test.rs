// ABOUTME: Integration tests for the recipe safety service
// ABOUTME: Tests the pre-generation refusal, post-generation warnings, and preference parsing
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use mealwise::errors::{ErrorCode, ErrorResponse};
use mealwise::models::{Allergen, AllergenWarning, Ingredient, ScreeningVerdict};
use mealwise::services::{
    refusal_message, warning_message, AllergenPreferences, RecipeSafetyService,
};
use serde_json::json;
use uuid::Uuid;

fn preferences(labels: &[&str]) -> AllergenPreferences {
    AllergenPreferences::from_labels(labels)
}

// ============================================================================
// Preference Tests
// ============================================================================

#[test]
fn test_preferences_from_labels() {
    let prefs = preferences(&["Dairy", "tree nuts", "kiwi", "  ", "milk"]);

    assert_eq!(prefs.restricted(), [Allergen::Milk, Allergen::TreeNuts]);
    assert_eq!(prefs.unrecognized(), ["kiwi"]);
    assert!(!prefs.is_empty());
}

#[test]
fn test_preferences_from_typed_allergens() {
    let prefs = AllergenPreferences::new([Allergen::Soy, Allergen::Soy, Allergen::Sesame]);
    assert_eq!(prefs.restricted(), [Allergen::Soy, Allergen::Sesame]);
    assert!(AllergenPreferences::default().is_empty());
}

// ============================================================================
// Pre-generation Gate Tests
// ============================================================================

#[test]
fn test_gate_refuses_conflicting_user_ingredients() {
    let service = RecipeSafetyService::default();
    let err = service
        .pre_generation_gate(
            &["peanut butter", "banana", "semolina"],
            &preferences(&["peanuts", "gluten"]),
        )
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::AllergenConflict);
    assert_eq!(err.http_status(), 422);
    assert!(err.message.contains("peanut butter (Peanuts)"));
    assert!(err.message.contains("semolina (Gluten)"));
    assert!(!err.message.contains("banana"));
    assert_eq!(
        err.context.details["conflicting_ingredients"],
        json!(["peanut butter", "semolina"])
    );

    let request_id = err.context.request_id.clone().unwrap();
    assert!(Uuid::parse_str(&request_id).is_ok());

    let response = serde_json::to_value(ErrorResponse::from(err)).unwrap();
    assert_eq!(response["error"]["code"], "ALLERGEN_CONFLICT");
    assert_eq!(response["error"]["details"]["conflicts"][0]["allergen"], "peanuts");
}

#[test]
fn test_gate_passes_clean_ingredients() {
    let service = RecipeSafetyService::default();
    let prefs = preferences(&["gluten", "tree nuts"]);

    assert!(service
        .pre_generation_gate(&["banana", "rice", "buckwheat flour"], &prefs)
        .is_ok());
    assert!(service.pre_generation_gate(&["coconut milk"], &prefs).is_ok());
}

#[test]
fn test_gate_skips_when_nothing_to_check() {
    let service = RecipeSafetyService::default();
    let no_ingredients: [&str; 0] = [];

    assert!(service
        .pre_generation_gate(&["peanut butter"], &AllergenPreferences::default())
        .is_ok());
    assert!(service
        .pre_generation_gate(&["peanut butter"], &preferences(&["kiwi"]))
        .is_ok());
    assert!(service
        .pre_generation_gate(&no_ingredients, &preferences(&["peanuts"]))
        .is_ok());
}

#[test]
fn test_screening_verdict_and_refusal_message() {
    let service = RecipeSafetyService::default();
    let verdict = service
        .detector()
        .screen_user_ingredients(&["whole milk", "2 eggs"], &[Allergen::Milk, Allergen::Eggs]);

    assert!(verdict.is_blocked());
    assert_eq!(verdict.conflicting_ingredients(), vec!["whole milk", "2 eggs"]);
    assert_eq!(
        refusal_message(&verdict),
        "Your ingredients include allergens you have restricted: whole milk (Milk); 2 eggs (Eggs). Remove them or update your allergen preferences."
    );

    assert_eq!(refusal_message(&ScreeningVerdict::Clear), "");
    assert!(ScreeningVerdict::Clear.conflicting_ingredients().is_empty());
}

// ============================================================================
// Post-generation Audit Tests
// ============================================================================

#[test]
fn test_audit_groups_warnings_by_allergen() {
    let service = RecipeSafetyService::default();
    let generated = vec![
        Ingredient::new("eggs").with_quantity("2").with_unit("whole"),
        Ingredient::new("flour").with_quantity("200").with_unit("g"),
        Ingredient::new("crumb topping"),
        Ingredient::new("rice").with_quantity("1").with_unit("cup"),
        Ingredient::new("flour").with_quantity("1").with_unit("tbsp"),
    ];

    let warnings = service.post_generation_audit(&generated, &preferences(&["eggs", "gluten"]));

    assert_eq!(
        warnings,
        vec![
            AllergenWarning {
                allergen: Allergen::Eggs,
                ingredients: vec!["eggs".to_owned()],
                derivative_only: false,
            },
            AllergenWarning {
                allergen: Allergen::Gluten,
                ingredients: vec!["flour".to_owned(), "crumb topping".to_owned()],
                derivative_only: false,
            },
        ]
    );
    assert_eq!(warning_message(&warnings[1]), "⚠️ Contains Gluten: flour, crumb topping");
}

#[test]
fn test_audit_marks_derivative_only_hits() {
    let service = RecipeSafetyService::default();
    let generated = vec![Ingredient::new("crumb topping")];

    let warnings = service.post_generation_audit(&generated, &preferences(&["gluten"]));

    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].derivative_only);
    assert_eq!(warning_message(&warnings[0]), "⚠️ May contain Gluten: crumb topping");
}

#[test]
fn test_audit_scans_notes() {
    let service = RecipeSafetyService::default();
    let generated = vec![Ingredient::new("gravy").with_notes("thickened with wheat flour")];

    let warnings = service.post_generation_audit(&generated, &preferences(&["gluten"]));

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].ingredients, vec!["gravy"]);
}

#[test]
fn test_audit_safe_phrase_in_notes_does_not_clear_item() {
    let service = RecipeSafetyService::default();
    let generated = vec![
        Ingredient::new("cheddar cheese").with_notes("swap for dairy-free if needed"),
        Ingredient::new("peanuts").with_notes("or use peanut-free seed mix"),
    ];

    let warnings = service.post_generation_audit(&generated, &preferences(&["milk", "peanuts"]));

    assert_eq!(
        warnings,
        vec![
            AllergenWarning {
                allergen: Allergen::Milk,
                ingredients: vec!["cheddar cheese".to_owned()],
                derivative_only: false,
            },
            AllergenWarning {
                allergen: Allergen::Peanuts,
                ingredients: vec!["peanuts".to_owned()],
                derivative_only: false,
            },
        ]
    );
}

#[test]
fn test_audit_prefers_taxonomy_hit_from_notes() {
    let service = RecipeSafetyService::default();
    let generated = vec![Ingredient::new("crumb topping").with_notes("made with wheat flour")];

    let warnings = service.post_generation_audit(&generated, &preferences(&["gluten"]));

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].ingredients, vec!["crumb topping"]);
    assert!(!warnings[0].derivative_only);
}

#[test]
fn test_audit_without_restrictions_is_empty() {
    let service = RecipeSafetyService::default();
    let generated = vec![Ingredient::new("peanut butter")];

    assert!(service
        .post_generation_audit(&generated, &AllergenPreferences::default())
        .is_empty());
    assert!(service
        .post_generation_audit(&[], &preferences(&["peanuts"]))
        .is_empty());
}
