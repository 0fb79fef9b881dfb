//! Upstream model providers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Service hosting a model.
///
/// The set is closed: every record in a registry names one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Google Gemini models
    Google,
    /// OpenAI GPT and o-series models
    OpenAI,
    /// Anthropic Claude models
    Anthropic,
    /// Mistral AI models (Large, Small, Codestral, Pixtral, Ministral)
    Mistral,
    /// DeepInfra-hosted open weight models (Llama, Qwen, Gemma, WizardLM)
    DeepInfra,
    /// DeepSeek models
    DeepSeek,
}

impl Provider {
    /// Every provider, in declaration order.
    pub const ALL: [Provider; 6] = [
        Provider::Google,
        Provider::OpenAI,
        Provider::Anthropic,
        Provider::Mistral,
        Provider::DeepInfra,
        Provider::DeepSeek,
    ];

    /// Get provider display name
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Google => "Google",
            Provider::OpenAI => "OpenAI",
            Provider::Anthropic => "Anthropic",
            Provider::Mistral => "Mistral",
            Provider::DeepInfra => "DeepInfra",
            Provider::DeepSeek => "DeepSeek",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Provider {
    type Err = ModelError;

    /// Parse a provider from its display name or serde key
    ///
    /// # Examples
    /// ```
    /// use genai_models::models::Provider;
    ///
    /// assert_eq!("openai".parse::<Provider>().unwrap(), Provider::OpenAI);
    /// assert_eq!("DeepInfra".parse::<Provider>().unwrap(), Provider::DeepInfra);
    /// assert!("cohere".parse::<Provider>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(Provider::Google),
            "openai" | "open_ai" | "open-ai" => Ok(Provider::OpenAI),
            "anthropic" => Ok(Provider::Anthropic),
            "mistral" => Ok(Provider::Mistral),
            "deepinfra" => Ok(Provider::DeepInfra),
            "deepseek" => Ok(Provider::DeepSeek),
            _ => Err(ModelError::UnknownProvider(s.to_string())),
        }
    }
}
