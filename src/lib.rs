//! # genai-models - Generative Model Registry
//!
//! A read-only catalog of generative language models: which provider hosts
//! each model, a short description, and its input/output price per million
//! tokens.
//!
//! ## Quick Start
//!
//! ```rust
//! use genai_models::{ModelRegistry, Provider};
//!
//! let registry = ModelRegistry::new();
//!
//! // Absence is a `None`, never an error
//! assert!(registry.lookup("nonexistent-model").is_none());
//!
//! let record = registry.lookup("deepseek-chat").unwrap();
//! assert_eq!(record.provider(), Provider::DeepSeek);
//!
//! // Fall back to the default model when the caller has no preference
//! let record = registry.select(None).unwrap();
//! assert_eq!(record.name(), "gpt-4o-mini");
//! ```
//!
//! ## Providers
//!
//! | Provider   | Models                                   |
//! |------------|------------------------------------------|
//! | Google     | Gemini 1.5 / 2.0                         |
//! | OpenAI     | GPT-4.1, GPT-4o mini, o3-mini, o4-mini   |
//! | Anthropic  | Claude 3 / 3.5 / 3.7                     |
//! | Mistral    | Large, Small, Codestral, Pixtral, Saba   |
//! | DeepInfra  | Llama, Qwen, Gemma, WizardLM, Mistral 7B |
//! | DeepSeek   | deepseek-chat                            |
//!
//! ## Configuration
//!
//! A registry can be extended from a TOML file (see [`config::Config`]):
//! extra records are added, records sharing a built-in name replace it,
//! and the default model may be changed. The registry checks at
//! construction that its default model is present.
//!
//! ## Modules
//!
//! - [`models`]: Records, providers, the embedded table and the registry
//! - [`config`]: Configuration management
//! - [`error`]: Error types and result aliases

pub mod config;
pub mod error;
pub mod models;

// Re-exports for convenience
pub use config::Config;
pub use error::{ModelError, Result};
pub use models::{ModelRecord, ModelRegistry, Pricing, Provider, DEFAULT_MODEL};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
