// ABOUTME: Mealwise CLI - command-line access to allergen screening and shopping-list generation
// ABOUTME: Runs detection, the pre-generation gate, recipe audits, and consolidation on local input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors
//!
//! Usage:
//! ```bash
//! # Detect allergens in free-text ingredients
//! mealwise-cli detect --allergen peanuts --allergen gluten \
//!     --ingredient "peanut butter" --ingredient "semolina"
//!
//! # Refuse generation when the user's own ingredients conflict
//! mealwise-cli gate --allergen dairy --ingredient "whole milk"
//!
//! # Warn about restricted allergens in a generated recipe
//! mealwise-cli audit --allergen eggs --recipe recipe.json
//!
//! # Consolidate a meal plan into a shopping list, grouped by aisle
//! mealwise-cli shopping-list --plan plan.json --grouped
//! ```

mod commands;
mod helpers;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mealwise::config::MealwiseConfig;
use mealwise::errors::{AppResult, ErrorResponse};
use mealwise::services::RecipeSafetyService;
use mealwise_core::constants::service_names;
use tracing::{debug, info};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "mealwise-cli",
    about = "Mealwise allergen safety and shopping-list CLI",
    long_about = "Command-line access to the Mealwise allergen detector and ingredient consolidator."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print every allergen detected in the given ingredients as JSON
    Detect {
        /// Allergen to check (repeatable, e.g. peanuts, dairy, tree nuts)
        #[arg(long = "allergen", short = 'a', required = true)]
        allergens: Vec<String>,

        /// Ingredient text (repeatable)
        #[arg(long = "ingredient", short = 'i', required = true)]
        ingredients: Vec<String>,
    },

    /// Fail when user-supplied ingredients contain a restricted allergen
    Gate {
        /// Restricted allergen (repeatable)
        #[arg(long = "allergen", short = 'a', required = true)]
        allergens: Vec<String>,

        /// Ingredient text (repeatable)
        #[arg(long = "ingredient", short = 'i', required = true)]
        ingredients: Vec<String>,
    },

    /// Print warnings for restricted allergens in a generated recipe
    Audit {
        /// Restricted allergen (repeatable)
        #[arg(long = "allergen", short = 'a', required = true)]
        allergens: Vec<String>,

        /// JSON file holding an array of ingredients ("-" reads stdin)
        #[arg(long)]
        recipe: PathBuf,

        /// Print structured warnings as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Consolidate a meal plan into one shopping list
    ShoppingList {
        /// JSON file holding one ingredient array per recipe ("-" reads stdin)
        #[arg(long)]
        plan: PathBuf,

        /// Group items by aisle
        #[arg(long)]
        grouped: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            debug!(code = ?error.code, "Command failed");
            helpers::display::print_error_response(&ErrorResponse::from(error));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = MealwiseConfig::from_env()?;

    // Quiet by default so stderr only carries warnings; --verbose opens it up
    let mut logging = config
        .logging
        .clone()
        .with_service_name(service_names::MEALWISE_CLI);
    if cli.verbose {
        logging = logging.with_level("debug");
    } else if env::var_os("RUST_LOG").is_none() {
        logging = logging.with_level("warn");
    }
    if let Err(e) = logging.init() {
        eprintln!("Logging disabled: {e}");
    }

    info!("Mealwise CLI: {}", config.summary());

    match cli.command {
        Command::Detect {
            allergens,
            ingredients,
        } => {
            let service = RecipeSafetyService::from_config(&config.safety)?;
            commands::allergens::detect(&service, &allergens, &ingredients)?;
        }
        Command::Gate {
            allergens,
            ingredients,
        } => {
            let service = RecipeSafetyService::from_config(&config.safety)?;
            commands::allergens::gate(&service, &allergens, &ingredients)?;
        }
        Command::Audit {
            allergens,
            recipe,
            json,
        } => {
            let service = RecipeSafetyService::from_config(&config.safety)?;
            commands::allergens::audit(&service, &allergens, &recipe, json)?;
        }
        Command::ShoppingList { plan, grouped } => {
            commands::shopping::shopping_list(&plan, grouped)?;
        }
    }

    Ok(())
}
