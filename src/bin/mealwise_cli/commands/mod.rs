// ABOUTME: Re-exports command modules for mealwise-cli
// ABOUTME: Provides access to allergen and shopping-list commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

pub mod allergens;
pub mod shopping;
