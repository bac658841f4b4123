// ABOUTME: Integration tests for environment configuration and taxonomy overrides loading
// ABOUTME: Validates missing, malformed, conflicting, and valid overrides files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::fs;
use std::path::PathBuf;

use mealwise::allergens::AllergenTaxonomies;
use mealwise::config::{MealwiseConfig, SafetyConfig};
use mealwise::errors::ErrorCode;
use mealwise::logging::{LogFormat, LoggingConfig};
use mealwise::models::Allergen;
use mealwise::services::{AllergenPreferences, RecipeSafetyService};
use mealwise_core::constants::env_config::TAXONOMY_OVERRIDES;
use serial_test::serial;
use tempfile::TempDir;

fn write_overrides(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("overrides.json");
    fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// Environment Tests
// ============================================================================

#[test]
#[serial]
fn test_no_overrides_configured() {
    env::remove_var(TAXONOMY_OVERRIDES);

    let config = MealwiseConfig::from_env().unwrap();
    assert_eq!(config.safety, SafetyConfig::default());
    assert!(config.summary().contains("taxonomy_overrides=none"));

    let taxonomies = config.safety.load_taxonomies().unwrap();
    assert_eq!(&taxonomies, AllergenTaxonomies::builtin());
}

#[test]
#[serial]
fn test_blank_overrides_variable_is_unset() {
    env::set_var(TAXONOMY_OVERRIDES, "   ");
    let safety = SafetyConfig::from_env();
    env::remove_var(TAXONOMY_OVERRIDES);

    assert_eq!(safety.taxonomy_overrides_path, None);
}

#[test]
#[serial]
fn test_missing_overrides_file_fails_validation() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.json");

    env::set_var(TAXONOMY_OVERRIDES, &missing);
    let result = MealwiseConfig::from_env();
    env::remove_var(TAXONOMY_OVERRIDES);

    let err = result.unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);
    assert!(err.message.contains(TAXONOMY_OVERRIDES));
}

#[test]
#[serial]
fn test_overrides_loaded_from_environment() {
    let dir = TempDir::new().unwrap();
    let path = write_overrides(&dir, r#"{ "allergens": { "gluten": { "unsafe": ["farina"] } } }"#);

    env::set_var(TAXONOMY_OVERRIDES, &path);
    let config = MealwiseConfig::from_env();
    env::remove_var(TAXONOMY_OVERRIDES);

    let config = config.unwrap();
    assert_eq!(config.safety.taxonomy_overrides_path.as_deref(), Some(path.as_path()));

    let service = RecipeSafetyService::from_config(&config.safety).unwrap();
    let err = service
        .pre_generation_gate(&["farina pudding"], &AllergenPreferences::new([Allergen::Gluten]))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::AllergenConflict);
}

// ============================================================================
// Overrides File Tests
// ============================================================================

#[test]
fn test_unreadable_overrides_file() {
    let dir = TempDir::new().unwrap();
    let safety = SafetyConfig::with_overrides_path(dir.path().join("absent.json"));

    let err = safety.load_overrides().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);
    assert!(err.message.contains("not found"));
    assert!(err.source.is_some());
}

#[test]
fn test_malformed_overrides_file() {
    let dir = TempDir::new().unwrap();
    let safety = SafetyConfig::with_overrides_path(write_overrides(&dir, "{ not json"));

    let err = safety.load_overrides().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_unknown_allergen_in_overrides_is_invalid() {
    let dir = TempDir::new().unwrap();
    let safety = SafetyConfig::with_overrides_path(write_overrides(
        &dir,
        r#"{ "allergens": { "kiwi": { "unsafe": ["kiwi fruit"] } } }"#,
    ));

    assert_eq!(
        safety.build_detector().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
}

#[test]
fn test_conflicting_overrides_are_invalid() {
    let dir = TempDir::new().unwrap();
    let safety = SafetyConfig::with_overrides_path(write_overrides(
        &dir,
        r#"{ "allergens": { "eggs": { "safe": ["mayonnaise"] } } }"#,
    ));

    let err = RecipeSafetyService::from_config(&safety).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("mayonnaise"));
}

#[test]
fn test_safe_override_clears_an_ingredient() {
    let dir = TempDir::new().unwrap();
    let safety = SafetyConfig::with_overrides_path(write_overrides(
        &dir,
        r#"{ "allergens": { "milk": { "safe": ["Cashew Cheese"] } } }"#,
    ));

    let detector = safety.build_detector().unwrap();
    assert!(!detector.contains_allergen("cashew cheese", Allergen::Milk));
    assert!(detector.contains_allergen("cheddar cheese", Allergen::Milk));
}

// ============================================================================
// Logging Configuration Tests
// ============================================================================

#[test]
fn test_log_format_names() {
    assert_eq!(LogFormat::from_name("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_name("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_name("anything"), LogFormat::Pretty);
}

#[test]
fn test_logging_overrides() {
    let logging = LoggingConfig::default()
        .with_level("debug")
        .with_service_name("mealwise-test");

    assert_eq!(logging.level, "debug");
    assert_eq!(logging.service_name, "mealwise-test");
    assert_eq!(logging.format, LogFormat::Pretty);
}
