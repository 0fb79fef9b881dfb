//! Model registry and metadata.
//!
//! This module provides model records with:
//! - Upstream provider
//! - Human-readable description
//! - Input/output pricing per million tokens
//!
//! # Example
//!
//! ```
//! use genai_models::models::{ModelRegistry, Provider, DEFAULT_MODEL};
//!
//! // Create a registry
//! let registry = ModelRegistry::new();
//!
//! // Lookup a model
//! let record = registry.lookup(DEFAULT_MODEL).unwrap();
//! assert_eq!(record.provider(), Provider::OpenAI);
//! assert_eq!(
//!     record.formatted_info(),
//!     "gpt-4o-mini: Fast, affordable small model for focused tasks."
//! );
//! ```

mod card;
mod embedded;
mod provider;
mod registry;

pub use card::{ModelRecord, Pricing};
pub use embedded::{embedded_models, EmbeddedModel, DEFAULT_MODEL, EMBEDDED_MODELS};
pub use provider::Provider;
pub use registry::ModelRegistry;
