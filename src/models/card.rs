//! Model record data structures.
//!
//! This module defines the value types stored in the registry:
//! - `ModelRecord`: provider, name, description and pricing of one model
//! - `Pricing`: input/output token prices

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::models::provider::Provider;

/// Token pricing information (USD per million tokens)
///
/// A price of `0.0` means free or unpublished, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pricing {
    /// Cost per million input (prompt) tokens
    pub input: f64,
    /// Cost per million output (completion) tokens
    pub output: f64,
}

impl Pricing {
    /// Create new pricing
    pub fn new(input: f64, output: f64) -> Self {
        Self { input, output }
    }

    /// True when neither direction carries a price
    pub fn is_free(&self) -> bool {
        self.input == 0.0 && self.output == 0.0
    }
}

/// Metadata for one named model variant
///
/// Records are immutable once built; fields are only reachable through
/// accessors. Construction rejects empty names and prices that are
/// negative or not finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecordFields")]
pub struct ModelRecord {
    provider: Provider,
    name: String,
    description: String,
    input_price: f64,
    output_price: f64,
}

impl ModelRecord {
    /// Create a validated record
    ///
    /// # Examples
    /// ```
    /// use genai_models::models::{ModelRecord, Provider};
    ///
    /// let record = ModelRecord::new(Provider::DeepSeek, "deepseek-chat", "", 0.014, 0.28).unwrap();
    /// assert_eq!(record.formatted_info(), "deepseek-chat: ");
    /// assert!(ModelRecord::new(Provider::DeepSeek, "bad", "", -1.0, 0.0).is_err());
    /// ```
    pub fn new(
        provider: Provider,
        name: impl Into<String>,
        description: impl Into<String>,
        input_price: f64,
        output_price: f64,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::InvalidName);
        }
        for price in [input_price, output_price] {
            if !price.is_finite() || price < 0.0 {
                return Err(ModelError::InvalidPrice { model: name, price });
            }
        }

        Ok(Self {
            provider,
            name,
            description: description.into(),
            input_price,
            output_price,
        })
    }

    /// Upstream provider
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Unique model name, also the registry key
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description (may be empty)
    pub fn description(&self) -> &str {
        &self.description
    }

    /// USD per million input tokens
    pub fn input_price(&self) -> f64 {
        self.input_price
    }

    /// USD per million output tokens
    pub fn output_price(&self) -> f64 {
        self.output_price
    }

    /// Both prices as one value
    pub fn pricing(&self) -> Pricing {
        Pricing::new(self.input_price, self.output_price)
    }

    /// One-line summary: `"<name>: <description>"`
    pub fn formatted_info(&self) -> String {
        format!("{}: {}", self.name, self.description)
    }
}

impl fmt::Display for ModelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Unvalidated shape used when deserializing records.
#[derive(Deserialize)]
struct RecordFields {
    provider: Provider,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    input_price: f64,
    #[serde(default)]
    output_price: f64,
}

impl TryFrom<RecordFields> for ModelRecord {
    type Error = ModelError;

    fn try_from(fields: RecordFields) -> Result<Self> {
        ModelRecord::new(
            fields.provider,
            fields.name,
            fields.description,
            fields.input_price,
            fields.output_price,
        )
    }
}
