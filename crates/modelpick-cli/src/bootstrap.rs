//! Composition helpers: logging and adapter construction.

use std::sync::Arc;

use anyhow::{Context, Result};
use modelpick_core::{FamilyVocabulary, ModelCatalogPort};
use modelpick_hf::{DefaultHfClient, HfClientConfig};
use tracing_subscriber::EnvFilter;

use crate::commands::SelectArgs;

/// Install the stderr subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Hub client configuration for a selection run.
pub fn hub_config(args: &SelectArgs) -> HfClientConfig {
    let config = HfClientConfig::new().with_optional_token(args.token.clone());
    match args.hub_url.as_deref().map(str::trim) {
        Some(endpoint) if !endpoint.is_empty() => config.with_endpoint(endpoint),
        _ => config,
    }
}

/// Build the catalog adapter behind the port.
pub fn build_catalog(args: &SelectArgs) -> Result<Arc<dyn ModelCatalogPort>> {
    let client = DefaultHfClient::new(&hub_config(args))
        .context("Failed to create HuggingFace client")?;
    Ok(Arc::new(client))
}

/// Default families plus any extras from the command line.
pub fn family_vocabulary(extra: &[String]) -> FamilyVocabulary {
    FamilyVocabulary::default().with_extra(extra)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Commands;
    use crate::parser::Cli;
    use clap::Parser;

    fn select_args(argv: &[&str]) -> SelectArgs {
        match Cli::parse_from(argv).command {
            Commands::Select(args) => args,
            Commands::Validate(_) => panic!("expected select"),
        }
    }

    #[test]
    fn test_hub_url_overrides_endpoint() {
        let args = select_args(&["modelpick", "select", "--hub-url", "https://hf-mirror.com/"]);
        let config = hub_config(&args);
        assert!(config.base_url().starts_with("https://hf-mirror.com"));
        assert!(config.base_url().ends_with("/api/models"));
    }

    #[test]
    fn test_blank_token_ignored() {
        let args = select_args(&["modelpick", "select", "--token", "  "]);
        assert!(!hub_config(&args).has_token());
    }

    #[test]
    fn test_extra_families_append() {
        let vocabulary = family_vocabulary(&["Gemma".to_string(), "llama".to_string()]);
        assert_eq!(vocabulary.iter().last(), Some("gemma"));
        assert_eq!(vocabulary.len(), FamilyVocabulary::default().len() + 1);
    }

    #[test]
    fn test_build_catalog_with_defaults() {
        let args = select_args(&["modelpick", "select", "--hub-url", "https://huggingface.co"]);
        tokio_test::assert_ok!(build_catalog(&args));
    }
}
