//! # Importer Configuration
//!
//! Headings that switch the recipe text importer between its sections. The
//! defaults cover the usual English headings; both lists can be overridden
//! from the environment with comma-separated values.

use crate::errors::{PantryError, PantryResult};
use log::warn;
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_INGREDIENTS_HEADINGS: &[&str] = &["ingredients"];
pub const DEFAULT_INSTRUCTIONS_HEADINGS: &[&str] = &["instructions", "directions"];

/// Environment variable overriding the ingredients headings
pub const INGREDIENTS_HEADINGS_VAR: &str = "PANTRY_INGREDIENTS_HEADINGS";
/// Environment variable overriding the instructions headings
pub const INSTRUCTIONS_HEADINGS_VAR: &str = "PANTRY_INSTRUCTIONS_HEADINGS";

/// Configuration options for recipe text import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImporterConfig {
    /// Lowercase prefixes that open the ingredients section
    pub ingredients_headings: Vec<String>,
    /// Lowercase prefixes that open the instructions section
    pub instructions_headings: Vec<String>,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            ingredients_headings: to_owned_list(DEFAULT_INGREDIENTS_HEADINGS),
            instructions_headings: to_owned_list(DEFAULT_INSTRUCTIONS_HEADINGS),
        }
    }
}

impl ImporterConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> PantryResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> PantryResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(INGREDIENTS_HEADINGS_VAR) {
            config.ingredients_headings = split_headings(&value);
        }
        if let Some(value) = lookup(INSTRUCTIONS_HEADINGS_VAR) {
            config.instructions_headings = split_headings(&value);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate importer configuration
    pub fn validate(&self) -> PantryResult<()> {
        if self.ingredients_headings.is_empty() {
            return Err(PantryError::Config(
                "At least one ingredients heading is required".to_string(),
            ));
        }
        if self.instructions_headings.is_empty() {
            return Err(PantryError::Config(
                "At least one instructions heading is required".to_string(),
            ));
        }

        let all = self
            .ingredients_headings
            .iter()
            .chain(self.instructions_headings.iter());
        for heading in all {
            if heading.trim().is_empty() {
                return Err(PantryError::Config("Headings cannot be blank".to_string()));
            }
            if heading.chars().any(char::is_uppercase) {
                warn!("Heading '{}' contains uppercase letters and will never match", heading);
            }
        }

        Ok(())
    }
}

fn to_owned_list(headings: &[&str]) -> Vec<String> {
    headings.iter().map(|h| h.to_string()).collect()
}

fn split_headings(value: &str) -> Vec<String> {
    value.split(',').map(|h| h.trim().to_lowercase()).collect()
}
