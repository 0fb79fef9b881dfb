//! End-to-end registry tests.
//!
//! These tests exercise the public API the way a host application uses
//! it: build a registry once, share it, and look models up by name.

use std::sync::Arc;

use genai_models::models::EMBEDDED_MODELS;
use genai_models::{Config, ModelError, ModelRecord, ModelRegistry, Provider, DEFAULT_MODEL};
use proptest::prelude::*;

/// Every embedded key resolves to a record carrying the same name
#[test]
fn test_lookup_returns_matching_name() {
    let registry = ModelRegistry::new();

    for (provider, name, description, input, output) in EMBEDDED_MODELS {
        let record = registry.lookup(name).expect("embedded model present");
        assert_eq!(record.name(), *name);
        assert_eq!(record.provider(), *provider);
        assert_eq!(record.description(), *description);
        assert!((record.input_price() - input).abs() < 1e-12);
        assert!((record.output_price() - output).abs() < 1e-12);
    }
}

#[test]
fn test_all_prices_non_negative() {
    let registry = ModelRegistry::new();
    for record in registry.iter() {
        assert!(record.input_price() >= 0.0, "{record}");
        assert!(record.output_price() >= 0.0, "{record}");
    }
}

#[test]
fn test_gpt_4o_mini_formatted_info() {
    let registry = ModelRegistry::new();
    let record = registry.lookup("gpt-4o-mini").unwrap();
    assert_eq!(
        record.formatted_info(),
        "gpt-4o-mini: Fast, affordable small model for focused tasks."
    );
}

#[test]
fn test_deepseek_chat_scenario() {
    let registry = ModelRegistry::new();
    let record = registry.lookup("deepseek-chat").unwrap();
    assert_eq!(record.provider(), Provider::DeepSeek);
    assert_eq!(record.description(), "");
    assert!((record.input_price() - 0.014).abs() < 1e-12);
    assert!((record.output_price() - 0.28).abs() < 1e-12);
    assert_eq!(record.formatted_info(), "deepseek-chat: ");
}

#[test]
fn test_nonexistent_model_is_absent() {
    let registry = ModelRegistry::new();
    assert!(registry.lookup("nonexistent-model").is_none());
}

#[test]
fn test_default_model_present() {
    let registry = ModelRegistry::new();
    assert_eq!(DEFAULT_MODEL, "gpt-4o-mini");
    assert!(registry.lookup(DEFAULT_MODEL).is_some());
}

#[test]
fn test_concurrent_reads() {
    let registry = Arc::new(ModelRegistry::new());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                EMBEDDED_MODELS
                    .iter()
                    .filter(|(_, name, _, _, _)| registry.contains(name))
                    .count()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), EMBEDDED_MODELS.len());
    }
}

#[test]
fn test_config_file_overlay() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
default_model = "local-llama"

[[models]]
provider = "deepinfra"
name = "local-llama"
description = "Self-hosted Llama."
input_price = 0.0
output_price = 0.0
"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    let registry = ModelRegistry::from_config(&config).unwrap();

    assert_eq!(registry.len(), EMBEDDED_MODELS.len() + 1);
    let record = registry.select(None).unwrap();
    assert_eq!(record.name(), "local-llama");
    assert_eq!(record.formatted_info(), "local-llama: Self-hosted Llama.");
}

#[test]
fn test_config_file_bad_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_model = \"missing\"\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    let err = ModelRegistry::from_config(&config).unwrap_err();
    assert!(matches!(err, ModelError::ModelNotFound(ref n) if n == "missing"));
}

#[test]
fn test_alternate_table() {
    let registry = ModelRegistry::from_records(
        [
            ModelRecord::new(Provider::Anthropic, "test-a", "A.", 1.0, 2.0).unwrap(),
            ModelRecord::new(Provider::Google, "test-b", "", 0.0, 0.0).unwrap(),
        ],
        "test-a",
    )
    .unwrap();

    assert_eq!(registry.names(), vec!["test-a", "test-b"]);
    assert!(registry.lookup(DEFAULT_MODEL).is_none());
    assert_eq!(registry.default_model().formatted_info(), "test-a: A.");
}

proptest! {
    #[test]
    fn prop_unknown_names_are_absent(name in "\\PC{0,40}") {
        let registry = ModelRegistry::new();
        let known = EMBEDDED_MODELS.iter().any(|(_, n, _, _, _)| *n == name);
        prop_assert_eq!(registry.lookup(&name).is_some(), known);
    }

    #[test]
    fn prop_formatted_info_is_verbatim(name in "[a-z0-9./-]{1,30}", description in "\\PC{0,60}") {
        let record =
            ModelRecord::new(Provider::Mistral, name.clone(), description.clone(), 0.0, 0.0)
                .unwrap();
        prop_assert_eq!(record.formatted_info(), format!("{name}: {description}"));
    }
}
