// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Loads logging settings and the optional allergen taxonomy overrides file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Environment-based configuration

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use mealwise_core::constants::env_config;
use mealwise_core::errors::{AppError, AppResult};
use mealwise_intelligence::allergens::{
    AllergenDetector, AllergenTaxonomies, DerivativeKeywords, TaxonomyOverrides,
};
use tracing::{debug, info};

use crate::logging::LoggingConfig;

/// Allergen safety settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafetyConfig {
    /// JSON file of extra safe/unsafe terms merged into the built-in taxonomies
    pub taxonomy_overrides_path: Option<PathBuf>,
}

impl SafetyConfig {
    /// Read safety settings from the environment
    ///
    /// A blank `MEALWISE_TAXONOMY_OVERRIDES` is treated as unset.
    #[must_use]
    pub fn from_env() -> Self {
        let taxonomy_overrides_path = env::var(env_config::TAXONOMY_OVERRIDES)
            .ok()
            .map(|path| path.trim().to_owned())
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Self {
            taxonomy_overrides_path,
        }
    }

    /// Settings that read overrides from `path`
    #[must_use]
    pub fn with_overrides_path(path: impl Into<PathBuf>) -> Self {
        Self {
            taxonomy_overrides_path: Some(path.into()),
        }
    }

    /// Parse the overrides file, if one is configured
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` when the file cannot be read and
    /// `CONFIG_INVALID` when it is not valid overrides JSON.
    pub fn load_overrides(&self) -> AppResult<Option<TaxonomyOverrides>> {
        let Some(path) = self.taxonomy_overrides_path.as_deref() else {
            return Ok(None);
        };

        let contents = fs::read_to_string(path).map_err(|e| {
            let message = if e.kind() == ErrorKind::NotFound {
                format!("taxonomy overrides file not found: {}", path.display())
            } else {
                format!("cannot read taxonomy overrides {}: {e}", path.display())
            };
            AppError::config_missing(message).with_source(e)
        })?;

        let overrides = serde_json::from_str(&contents).map_err(|e| {
            AppError::config_invalid(format!(
                "malformed taxonomy overrides {}: {e}",
                path.display()
            ))
            .with_source(e)
        })?;

        debug!(path = %path.display(), "Parsed taxonomy overrides");
        Ok(Some(overrides))
    }

    /// Built-in taxonomies extended by the configured overrides
    ///
    /// # Errors
    ///
    /// Fails as [`Self::load_overrides`] does, or with `CONFIG_INVALID` when
    /// an override lists a term as both safe and unsafe.
    pub fn load_taxonomies(&self) -> AppResult<AllergenTaxonomies> {
        let mut taxonomies = AllergenTaxonomies::builtin().clone();

        if let Some(overrides) = self.load_overrides()? {
            taxonomies.extend(&overrides)?;
            info!(
                allergens = overrides.allergens.len(),
                "Applied allergen taxonomy overrides"
            );
        }

        Ok(taxonomies)
    }

    /// Detector over the configured taxonomies and the built-in derivative keywords
    ///
    /// # Errors
    ///
    /// Fails as [`Self::load_taxonomies`] does.
    pub fn build_detector(&self) -> AppResult<AllergenDetector> {
        Ok(AllergenDetector::new(
            self.load_taxonomies()?,
            DerivativeKeywords::builtin().clone(),
        ))
    }
}

/// Top-level configuration
#[derive(Debug, Clone)]
pub struct MealwiseConfig {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Allergen safety settings
    pub safety: SafetyConfig,
}

impl MealwiseConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` when a configured overrides file does not exist.
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            logging: LoggingConfig::from_env(),
            safety: SafetyConfig::from_env(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` when a configured overrides file does not exist.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(path) = self.safety.taxonomy_overrides_path.as_deref() {
            ensure_file(path)?;
        }
        Ok(())
    }

    /// One-line summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} log_level={} taxonomy_overrides={}",
            self.logging.environment,
            self.logging.level,
            self.safety
                .taxonomy_overrides_path
                .as_deref()
                .map_or_else(|| "none".to_owned(), |p| p.display().to_string()),
        )
    }
}

fn ensure_file(path: &Path) -> AppResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(AppError::config_missing(format!(
            "{} points to a missing file: {}",
            env_config::TAXONOMY_OVERRIDES,
            path.display()
        )))
    }
}
