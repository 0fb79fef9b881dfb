//! genai-models CLI binary.
//!
//! Inspect the generative model registry.
//!
//! # Commands
//!
//! - `list` - List models, optionally for one provider
//! - `search` - Search names and descriptions
//! - `info` - Show one model
//! - `default` - Show the default model

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use genai_models::{Config, ModelRecord, ModelRegistry, Provider, VERSION};

#[derive(Parser)]
#[command(name = "genai-models")]
#[command(version = VERSION)]
#[command(about = "Generative model registry - providers, descriptions and pricing", long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/genai-models/config.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all known models
    List {
        /// Filter by provider (google, openai, anthropic, mistral, deepinfra, deepseek)
        #[arg(short, long)]
        provider: Option<Provider>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search model names and descriptions
    Search {
        /// Search query
        query: String,
    },

    /// Get info about a specific model
    Info {
        /// Model name
        model: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the default model
    Default,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let registry = load_registry(cli.config)?;

    match cli.command {
        Commands::List { provider, json } => cmd_list(&registry, provider, json),
        Commands::Search { query } => {
            cmd_search(&registry, &query);
            Ok(())
        },
        Commands::Info { model, json } => cmd_info(&registry, &model, json),
        Commands::Default => {
            println!("{}", registry.default_model().formatted_info());
            Ok(())
        },
    }
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();
}

fn load_registry(path: Option<PathBuf>) -> anyhow::Result<ModelRegistry> {
    let file_config = match path {
        Some(path) => load_config_file(&path)?,
        None => match Config::default_path().filter(|p| p.exists()) {
            Some(path) => {
                tracing::debug!("Using config {}", path.display());
                load_config_file(&path)?
            },
            None => Config::default(),
        },
    };

    let config = file_config.merge(Config::from_env());
    Ok(ModelRegistry::from_config(&config)?)
}

fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    Config::from_file(path).with_context(|| format!("loading config {}", path.display()))
}

fn print_table(records: &[&ModelRecord]) {
    println!(
        "{:<36} {:<10} {:>10} {:>10}",
        "Name", "Provider", "Input/1M", "Output/1M"
    );
    println!("{}", "-".repeat(69));

    for record in records {
        println!(
            "{:<36} {:<10} {:>10} {:>10}",
            record.name(),
            record.provider().name(),
            format!("${:.3}", record.input_price()),
            format!("${:.3}", record.output_price())
        );
    }
}

fn cmd_list(
    registry: &ModelRegistry,
    provider: Option<Provider>,
    json: bool,
) -> anyhow::Result<()> {
    let records: Vec<&ModelRecord> = match provider {
        Some(p) => registry.by_provider(p),
        None => registry
            .names()
            .into_iter()
            .filter_map(|name| registry.lookup(name))
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    match provider {
        Some(p) => println!("Models from {p} ({}):", records.len()),
        None => println!("Available Models ({}):", records.len()),
    }
    println!();
    print_table(&records);

    Ok(())
}

fn cmd_search(registry: &ModelRegistry, query: &str) {
    println!("Search results for '{query}':");
    println!();

    let results = registry.search(query);
    if results.is_empty() {
        println!("(no matches)");
    } else {
        print_table(&results);
    }
}

fn cmd_info(registry: &ModelRegistry, model: &str, json: bool) -> anyhow::Result<()> {
    match registry.lookup(model) {
        Some(record) => {
            if json {
                println!("{}", serde_json::to_string_pretty(record)?);
                return Ok(());
            }

            println!("Model: {}", record.name());
            println!("Provider: {}", record.provider());
            if !record.description().is_empty() {
                println!("Description: {}", record.description());
            }
            if record.name() == registry.default_model_name() {
                println!("Default: yes");
            }

            println!();
            println!("Pricing:");
            if record.pricing().is_free() {
                println!("  Free / unpublished");
            } else {
                println!("  Input: ${}/1M tokens", record.input_price());
                println!("  Output: ${}/1M tokens", record.output_price());
            }
        },
        None => {
            eprintln!("Model not found: {model}");
            eprintln!("Try 'genai-models search {model}' to find similar models");
            std::process::exit(1);
        },
    }

    Ok(())
}
