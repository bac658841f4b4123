// ABOUTME: Re-exports helper modules for mealwise-cli
// ABOUTME: Provides access to input reading and display formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

pub mod display;
pub mod input;
