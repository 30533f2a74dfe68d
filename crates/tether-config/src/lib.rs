//! Configuration system for Tether.
//!
//! Load a deck of anchored items and an optional seed from TOML or YAML.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use tether_config::ShuffleConfig;
//! use tether_core::AnchorKind;
//!
//! let config = ShuffleConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [[items]]
//!     value = "Chemmy"
//!
//!     [[items]]
//!     value = "Irish"
//!     anchor = "to_previous"
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(7));
//! assert_eq!(config.items[1].anchor, AnchorKind::ToPrevious);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use tether_config::ShuffleConfig;
//!
//! let config = ShuffleConfig::load("shuffle.toml").unwrap_or_default();
//! // Proceeds with an empty deck if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tether_core::{AnchorKind, TetherError};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for TetherError {
    fn from(err: ConfigError) -> Self {
        TetherError::Config(err.to_string())
    }
}

/// Main shuffle configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ShuffleConfig {
    /// Random seed for reproducible results.
    ///
    /// A secure seed is generated when absent.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Items in slot order.
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

impl ShuffleConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Appends an item.
    pub fn with_item(mut self, value: impl Into<String>, anchor: AnchorKind) -> Self {
        self.items.push(ItemConfig::new(value, anchor));
        self
    }

    /// Checks that every item carries a value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = self.items.iter().position(|item| item.value.is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "item {} has an empty value",
                index
            )));
        }
        Ok(())
    }
}

/// A single item in the deck.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ItemConfig {
    /// Item value.
    pub value: String,

    /// How the item is held in place.
    #[serde(default)]
    pub anchor: AnchorKind,
}

impl ItemConfig {
    /// Creates an item.
    pub fn new(value: impl Into<String>, anchor: AnchorKind) -> Self {
        Self {
            value: value.into(),
            anchor,
        }
    }
}
