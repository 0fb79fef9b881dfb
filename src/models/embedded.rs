//! Embedded model definitions.
//!
//! The built-in table compiled into the binary. Prices are USD per
//! million tokens; `0.0` marks a free or unpublished price.

use crate::models::{ModelRecord, Provider};

/// Model used when a caller does not request one explicitly
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Embedded model definition tuple: (provider, name, description, input_price, output_price)
pub type EmbeddedModel = (Provider, &'static str, &'static str, f64, f64);

/// All embedded model definitions, grouped by provider
pub static EMBEDDED_MODELS: &[EmbeddedModel] = &[
    // ============================================================
    // Google
    // ============================================================
    (
        Provider::Google,
        "gemini-2.0-flash",
        "Next-generation features, speed, and multimodal generation for a diverse variety of tasks.",
        0.10,
        0.40,
    ),
    (
        Provider::Google,
        "gemini-2.0-flash-lite",
        "A Gemini 2.0 Flash model optimized for cost efficiency and low latency.",
        0.05,
        0.20,
    ),
    (
        Provider::Google,
        "gemini-1.5-flash",
        "A fast and cost-effective model for rapid assessments. Highly recommended.",
        0.075,
        0.30,
    ),
    (
        Provider::Google,
        "gemini-1.5-pro",
        "A professional version of the Gemini model with enhanced capabilities.",
        1.25,
        5.00,
    ),
    // ============================================================
    // OpenAI
    // ============================================================
    (
        Provider::OpenAI,
        "gpt-4.1-nano",
        "Fastest, most cost-effective GPT-4.1 model",
        0.10,
        0.40,
    ),
    (
        Provider::OpenAI,
        "gpt-4.1-mini",
        "Balanced for intelligence, speed, and cost.",
        0.40,
        1.60,
    ),
    (
        Provider::OpenAI,
        "gpt-4.1",
        "Fast, intelligent, flexible GPT model.",
        2.00,
        8.00,
    ),
    (
        Provider::OpenAI,
        "o4-mini",
        "Faster, more affordable reasoning model.",
        1.10,
        4.40,
    ),
    (
        Provider::OpenAI,
        "gpt-4o-mini",
        "Fast, affordable small model for focused tasks.",
        0.150,
        0.600,
    ),
    (
        Provider::OpenAI,
        "o3-mini",
        "A small model alternative to o3.",
        1.10,
        4.40,
    ),
    // ============================================================
    // Anthropic
    // ============================================================
    (
        Provider::Anthropic,
        "claude-3-5-sonnet-20240620",
        "A sonnet model offering refined conversational capabilities.",
        3.00,
        15.00,
    ),
    (
        Provider::Anthropic,
        "claude-3-haiku-20240307",
        "A haiku model designed for concise and creative expression.",
        0.25,
        1.25,
    ),
    (
        Provider::Anthropic,
        "claude-3-5-sonnet-20241022",
        "An upgraded sonnet model with enhanced reasoning and computer use capabilities.",
        3.00,
        15.00,
    ),
    (
        Provider::Anthropic,
        "claude-3-5-haiku-20241022",
        "An upgraded haiku model with improved intelligence and performance.",
        0.50,
        2.50,
    ),
    (
        Provider::Anthropic,
        "claude-3-7-sonnet-20250224",
        "A hybrid reasoning model excelling in complex problem-solving, especially in math and coding.",
        3.00,
        15.00,
    ),
    // ============================================================
    // Mistral
    // ============================================================
    (
        Provider::Mistral,
        "open-codestral-mamba",
        "The first Mamba 2 open-source model, ideal for diverse tasks.",
        0.0,
        0.0,
    ),
    (Provider::Mistral, "pixtral-12b", "Version-capable small model.", 0.15, 0.15),
    (
        Provider::Mistral,
        "mistral-nemo",
        "State-of-the-art Mistral model trained specifically for code tasks.",
        0.15,
        0.15,
    ),
    (
        Provider::Mistral,
        "pixtral-12b-2409",
        "A 12B model with image understanding capabilities in addition to text.",
        0.0,
        0.0,
    ),
    (
        Provider::Mistral,
        "open-mistral-nemo",
        "A multilingual open-source model released in July 2024.",
        0.0,
        0.0,
    ),
    (
        Provider::Mistral,
        "mistral-large-latest",
        "Top-tier reasoning for high-complexity tasks, for your most sophisticated needs.",
        2.00,
        6.00,
    ),
    (
        Provider::Mistral,
        "mistral-small-latest",
        "Cost-efficient, fast, and reliable option for translation, summarization, and sentiment analysis.",
        0.20,
        0.60,
    ),
    (
        Provider::Mistral,
        "codestral-latest",
        "State-of-the-art Mistral model trained specifically for code tasks.",
        0.20,
        0.60,
    ),
    // No published output price
    (
        Provider::Mistral,
        "mistral-embed",
        "State-of-the-art semantic model for extracting text representations.",
        0.10,
        0.00,
    ),
    (Provider::Mistral, "ministral-3b-latest", "Most efficient edge model.", 0.04, 0.04),
    (
        Provider::Mistral,
        "ministral-8b-latest",
        "Powerful model for on-device use cases.",
        0.10,
        0.10,
    ),
    (
        Provider::Mistral,
        "mistral-nemo-latest",
        "A state-of-the-art 12B model with 128k context length, built in collaboration with NVIDIA.",
        1.50,
        4.50,
    ),
    (
        Provider::Mistral,
        "pixtral-large-latest",
        "Frontier-class multimodal model for image and text understanding.",
        2.50,
        7.50,
    ),
    (
        Provider::Mistral,
        "mistral-saba-latest",
        "Efficient model optimized for languages from the Middle East and South Asia.",
        1.00,
        3.00,
    ),
    // ============================================================
    // DeepInfra
    // ============================================================
    (
        Provider::DeepInfra,
        "meta-llama/Llama-3.2-3B-Instruct",
        "A 3B instruct model by Meta for instructional tasks.",
        0.15,
        0.45,
    ),
    (
        Provider::DeepInfra,
        "Qwen/Qwen2.5-72B-Instruct",
        "A large instruct model for various applications.",
        0.20,
        0.50,
    ),
    (
        Provider::DeepInfra,
        "google/gemma-2-9b-it",
        "Gemini model specialized for IT tasks, with a focus on performance.",
        0.10,
        0.30,
    ),
    (
        Provider::DeepInfra,
        "microsoft/WizardLM-2-8x22B",
        "An 8x22B model designed for advanced conversational applications.",
        0.25,
        0.75,
    ),
    (
        Provider::DeepInfra,
        "mistralai/Mistral-7B-Instruct-v0.3",
        "A 7B instruct model optimized for general tasks.",
        0.15,
        0.45,
    ),
    // ============================================================
    // DeepSeek
    // ============================================================
    (Provider::DeepSeek, "deepseek-chat", "", 0.014, 0.28),
];

/// Get all embedded models as ModelRecord instances
///
/// Every literal entry satisfies `ModelRecord::new`'s checks (see the
/// tests below), so entries that fail are skipped with an error log
/// rather than panicking.
pub fn embedded_models() -> Vec<ModelRecord> {
    EMBEDDED_MODELS
        .iter()
        .filter_map(|(provider, name, description, input, output)| {
            ModelRecord::new(*provider, *name, *description, *input, *output)
                .map_err(|e| tracing::error!("Skipping embedded model {name}: {e}"))
                .ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_models_count() {
        assert_eq!(EMBEDDED_MODELS.len(), 35);
        assert_eq!(embedded_models().len(), EMBEDDED_MODELS.len());
    }

    #[test]
    fn test_unique_names() {
        let mut seen = std::collections::HashSet::new();
        for (_, name, _, _, _) in EMBEDDED_MODELS {
            assert!(seen.insert(*name), "Duplicate model name '{name}'");
        }
    }

    #[test]
    fn test_prices_non_negative() {
        for (_, name, _, input, output) in EMBEDDED_MODELS {
            assert!(*input >= 0.0, "Negative input price for '{name}'");
            assert!(*output >= 0.0, "Negative output price for '{name}'");
        }
    }

    #[test]
    fn test_default_model_embedded() {
        assert!(EMBEDDED_MODELS
            .iter()
            .any(|(_, name, _, _, _)| *name == DEFAULT_MODEL));
    }

    #[test]
    fn test_all_providers_represented() {
        let providers: std::collections::HashSet<_> =
            embedded_models().iter().map(ModelRecord::provider).collect();

        for provider in Provider::ALL {
            assert!(providers.contains(&provider), "Missing {provider}");
        }
    }
}
