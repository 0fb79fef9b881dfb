//! Configuration management.
//!
//! Supports configuration from:
//! - TOML config files
//! - Environment variables
//! - CLI arguments (for the `genai-models` binary)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::ModelRecord;

/// Environment variable overriding the default model
pub const DEFAULT_MODEL_ENV: &str = "GENAI_DEFAULT_MODEL";

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Model used when no model is requested (None = built-in default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,

    /// Extra records added to the built-in table; a record whose name
    /// matches a built-in one replaces it
    #[serde(default)]
    pub models: Vec<ModelRecord>,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Read failures surface as `ModelError::Io`, parse failures as
    /// `ModelError::Config`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(model) = std::env::var(DEFAULT_MODEL_ENV) {
            let model = model.trim();
            if !model.is_empty() {
                config.default_model = Some(model.to_string());
            }
        }

        config
    }

    /// Merge with another config (other takes precedence)
    pub fn merge(self, other: Self) -> Self {
        let mut models = self.models;
        models.extend(other.models);

        Self {
            default_model: other.default_model.or(self.default_model),
            models,
        }
    }

    /// Default config file location (`<config dir>/genai-models/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("genai-models").join("config.toml"))
    }
}
