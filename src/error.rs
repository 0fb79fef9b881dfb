//! Model registry error types.
//!
//! Lookups signal absence with `Option`; these errors cover construction
//! of records and registries, configuration loading, and the `resolve`
//! family of lookups that prefer `?` over a presence check.

use thiserror::Error;

/// Model registry errors.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Model not found in registry.
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Two records share the same name.
    #[error("Duplicate model: {0}")]
    DuplicateModel(String),

    /// A price is negative, NaN or infinite.
    #[error("Invalid price {price} for model {model}")]
    InvalidPrice {
        /// Name of the offending record.
        model: String,
        /// The rejected value.
        price: f64,
    },

    /// A record was built with an empty name.
    #[error("Model name must not be empty")]
    InvalidName,

    /// Provider string did not match any supported provider.
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, ModelError>;

impl From<toml::de::Error> for ModelError {
    fn from(err: toml::de::Error) -> Self {
        ModelError::Config(err.to_string())
    }
}
