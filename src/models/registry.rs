//! Model registry for model lookups.
//!
//! The registry provides:
//! - Lookup by exact model name
//! - A default model for callers that do not pick one
//! - Filtering by provider and substring search
//!
//! A registry is built once and never mutated afterwards, so a shared
//! reference (or an `Arc`) can be read from any number of threads.

use std::collections::HashMap;

use crate::config::Config;
use crate::error::{ModelError, Result};
use crate::models::card::ModelRecord;
use crate::models::embedded::{embedded_models, DEFAULT_MODEL};
use crate::models::provider::Provider;

/// Read-only map from model name to record
///
/// # Example
/// ```
/// use genai_models::models::{ModelRegistry, Provider};
///
/// let registry = ModelRegistry::new();
///
/// let record = registry.lookup("deepseek-chat").unwrap();
/// assert_eq!(record.provider(), Provider::DeepSeek);
/// assert_eq!(record.description(), "");
///
/// assert!(registry.lookup("nonexistent-model").is_none());
/// assert_eq!(registry.default_model().name(), "gpt-4o-mini");
/// ```
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    /// Name -> ModelRecord
    by_name: HashMap<String, ModelRecord>,

    /// Key of the model returned by `default_model`
    default_model: String,
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelRegistry {
    /// Create a registry over the embedded models with `DEFAULT_MODEL` as default
    ///
    /// # Panics
    ///
    /// Panics if the embedded table does not contain `DEFAULT_MODEL`.
    pub fn new() -> Self {
        let by_name: HashMap<String, ModelRecord> = embedded_models()
            .into_iter()
            .map(|record| (record.name().to_string(), record))
            .collect();

        tracing::debug!("Loaded {} embedded models", by_name.len());

        Self::checked(by_name, DEFAULT_MODEL.to_string())
            .expect("embedded table contains DEFAULT_MODEL")
    }

    /// Build a registry over an alternate table
    ///
    /// Fails on duplicate names or when `default_model` is not in the table.
    pub fn from_records(
        records: impl IntoIterator<Item = ModelRecord>,
        default_model: impl Into<String>,
    ) -> Result<Self> {
        let mut by_name = HashMap::new();
        for record in records {
            let name = record.name().to_string();
            if by_name.insert(name.clone(), record).is_some() {
                return Err(ModelError::DuplicateModel(name));
            }
        }

        Self::checked(by_name, default_model.into())
    }

    /// Build the embedded registry with configured extras and default
    ///
    /// A configured record named like an embedded one replaces it.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut by_name = Self::new().by_name;

        let mut seen = std::collections::HashSet::new();
        for record in &config.models {
            if !seen.insert(record.name()) {
                return Err(ModelError::DuplicateModel(record.name().to_string()));
            }
            if by_name
                .insert(record.name().to_string(), record.clone())
                .is_some()
            {
                tracing::debug!("Config overrides embedded model {}", record.name());
            }
        }

        let default_model = config
            .default_model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Self::checked(by_name, default_model)
    }

    fn checked(by_name: HashMap<String, ModelRecord>, default_model: String) -> Result<Self> {
        if !by_name.contains_key(&default_model) {
            return Err(ModelError::ModelNotFound(default_model));
        }

        tracing::debug!(
            "Built registry with {} models, default {}",
            by_name.len(),
            default_model
        );

        Ok(Self {
            by_name,
            default_model,
        })
    }

    /// Get a model by exact name
    pub fn lookup(&self, name: &str) -> Option<&ModelRecord> {
        self.by_name.get(name)
    }

    /// Alias for [`ModelRegistry::lookup`]
    pub fn get(&self, name: &str) -> Option<&ModelRecord> {
        self.lookup(name)
    }

    /// Get a model by name, treating absence as an error
    pub fn resolve(&self, name: &str) -> Result<&ModelRecord> {
        self.lookup(name)
            .ok_or_else(|| ModelError::ModelNotFound(name.to_string()))
    }

    /// Get the requested model, or the default when none was requested
    pub fn select(&self, requested: Option<&str>) -> Result<&ModelRecord> {
        match requested {
            Some(name) => self.resolve(name),
            None => Ok(self.default_model()),
        }
    }

    /// Check if a model exists in the registry
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Name of the default model
    pub fn default_model_name(&self) -> &str {
        &self.default_model
    }

    /// Record of the default model
    pub fn default_model(&self) -> &ModelRecord {
        // Every constructor goes through `checked`.
        &self.by_name[&self.default_model]
    }

    /// Get total count of models
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Iterate over all models (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &ModelRecord> {
        self.by_name.values()
    }

    /// All model names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get models filtered by provider, sorted by name
    pub fn by_provider(&self, provider: Provider) -> Vec<&ModelRecord> {
        let mut records: Vec<&ModelRecord> = self
            .by_name
            .values()
            .filter(|record| record.provider() == provider)
            .collect();
        records.sort_by(|a, b| a.name().cmp(b.name()));
        records
    }

    /// Search models by name or description substring (case-insensitive)
    pub fn search(&self, query: &str) -> Vec<&ModelRecord> {
        let query_lower = query.to_lowercase();

        let mut records: Vec<&ModelRecord> = self
            .by_name
            .values()
            .filter(|record| {
                record.name().to_lowercase().contains(&query_lower)
                    || record.description().to_lowercase().contains(&query_lower)
            })
            .collect();
        records.sort_by(|a, b| a.name().cmp(b.name()));
        records
    }
}
