// ABOUTME: Integration tests for the mealwise-cli binary
// ABOUTME: Runs detect, gate, audit, and shopping-list end to end and checks exit codes and output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Integration tests for the mealwise-cli binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::process::Command;

use mealwise_core::constants::env_config::TAXONOMY_OVERRIDES;
use serde_json::Value;
use tempfile::TempDir;

/// Helper to run CLI command and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_mealwise-cli"))
        .args(args)
        .env_remove(TAXONOMY_OVERRIDES)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0);
    for command in ["detect", "gate", "audit", "shopping-list"] {
        assert!(stdout.contains(command), "help should mention '{command}'");
    }
}

#[test]
fn test_cli_detect_prints_results() {
    let (exit_code, stdout, _stderr) = run_cli(&[
        "detect",
        "-a",
        "peanuts",
        "-a",
        "gluten",
        "-i",
        "peanut butter",
        "-i",
        "semolina",
    ]);

    assert_eq!(exit_code, 0);
    let results: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(results[0]["allergen"], "peanuts");
    assert_eq!(results[0]["matched_term"], "peanut butter");
    assert_eq!(results[1]["allergen"], "gluten");
}

#[test]
fn test_cli_gate_refuses_conflict() {
    let (exit_code, stdout, stderr) =
        run_cli(&["gate", "-a", "dairy", "-i", "whole milk", "-i", "rice"]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("ALLERGEN_CONFLICT"));
    assert!(stderr.contains("whole milk"));
}

#[test]
fn test_cli_gate_clear() {
    let (exit_code, stdout, _stderr) = run_cli(&["gate", "-a", "gluten", "-i", "buckwheat flour"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("Clear"));
}

#[test]
fn test_cli_rejects_unknown_allergen() {
    let (exit_code, _stdout, stderr) = run_cli(&["detect", "-a", "kiwi", "-i", "kiwi"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("INVALID_INPUT"));
}

#[test]
fn test_cli_audit_prints_warnings() {
    let dir = TempDir::new().unwrap();
    let recipe = dir.path().join("recipe.json");
    fs::write(
        &recipe,
        r#"[{ "item": "eggs", "quantity": "2" }, { "item": "spinach" }]"#,
    )
    .unwrap();

    let (exit_code, stdout, _stderr) =
        run_cli(&["audit", "-a", "eggs", "--recipe", recipe.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Contains Eggs: eggs"));
}

#[test]
fn test_cli_shopping_list_grouped() {
    let dir = TempDir::new().unwrap();
    let plan = dir.path().join("plan.json");
    fs::write(
        &plan,
        r#"[
            [{ "item": "onions", "quantity": "1", "unit": "whole" }],
            [{ "item": "onions", "quantity": "1", "unit": "whole" }, { "item": "flour", "quantity": "200", "unit": "g" }]
        ]"#,
    )
    .unwrap();

    let (exit_code, stdout, _stderr) = run_cli(&[
        "shopping-list",
        "--plan",
        plan.to_str().unwrap(),
        "--grouped",
    ]);

    assert_eq!(exit_code, 0);
    let sections: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(sections[0]["category"], "Produce");
    assert_eq!(sections[0]["items"][0]["quantity"], "2 whole");
    assert_eq!(sections[1]["category"], "Pantry");
}

#[test]
fn test_cli_missing_plan_file_reports_one_error_response() {
    let (exit_code, _stdout, stderr) = run_cli(&["shopping-list", "--plan", "/nonexistent/plan.json"]);

    assert_eq!(exit_code, 1);
    assert!(!stderr.contains("Error:"));

    let response: Value = serde_json::from_str(&stderr).unwrap();
    assert_eq!(response["error"]["code"], "STORAGE_ERROR");
}
