//! `modelpick validate`: offline dry run of the packaging workflow.
//!
//! Prints a six-step report to stdout. Missing tools are advisory; an
//! unreadable selection or a schema violation fails the command.

mod display;
pub mod source;

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use modelpick_core::WorkflowValidator;
use tracing::debug;

use crate::commands::ValidateArgs;
use crate::system::DefaultToolProbe;

/// Execute the validate command.
pub async fn execute(args: &ValidateArgs) -> Result<()> {
    let settings = args.settings();
    settings
        .validate()
        .context("Invalid validation settings")?;
    let validator = WorkflowValidator::new(Arc::new(DefaultToolProbe::new()), settings);

    display::print_banner("Workflow Validation (Dry Run)");

    display::print_step(1, "Checking prerequisites...");
    let prerequisites = validator.check_prerequisites().await;
    display::print_prerequisites(&prerequisites);

    let settings = validator.settings();
    match &args.input {
        Some(path) => {
            display::print_step(2, &format!("Reading selection from {}...", path.display()));
        }
        None => display::print_step(
            2,
            &format!(
                "Running model selection ({} models, max {}GB)...",
                settings.selection_limit, settings.selection_max_size_gb
            ),
        ),
    }
    let document = match source::load(args.input.as_deref(), settings).await {
        Ok(document) => document,
        Err(e) => {
            display::print_failure(&e.to_string());
            return Err(e).context("Could not obtain a model selection");
        }
    };
    if let Some(models) = document.as_array() {
        display::print_ok(&format!("Selected {} models", models.len()));
    }

    display::print_step(3, "Validating model data...");
    let report = match validator.validate(&document) {
        Ok(report) => report,
        Err(violation) => {
            display::print_violation(&violation);
            println!();
            display::print_failure("Model validation failed");
            bail!("Model validation failed: {violation}");
        }
    };
    for check in &report.schema.models {
        display::print_model_check(check);
    }
    println!();
    display::print_ok("All models are valid");
    debug!(warnings = report.schema.warnings.len(), "Schema warnings");

    display::print_step(4, "Workflow simulation for first model...");
    match &report.commands {
        Some(commands) => display::print_commands(commands),
        None => println!("No models selected; nothing to simulate"),
    }

    display::print_step(5, "Matrix build simulation...");
    display::print_matrix(&report.matrix);

    display::print_step(6, "Storage estimation...");
    display::print_storage(&report.storage);

    display::print_summary(report.schema.warnings.len(), prerequisites.all_available());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Commands;
    use crate::parser::Cli;
    use clap::Parser;
    use tempfile::TempDir;
    use tokio_test::{assert_err, assert_ok};

    fn validate_args(input: &std::path::Path) -> ValidateArgs {
        let argv = [
            "modelpick",
            "validate",
            "--registry",
            "ghcr.io/acme",
            "--input",
            input.to_str().unwrap(),
        ];
        match Cli::parse_from(argv).command {
            Commands::Validate(args) => args,
            Commands::Select(_) => panic!("expected validate"),
        }
    }

    #[tokio::test]
    async fn test_valid_artifact_passes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("models.json");
        std::fs::write(
            &path,
            r#"[{"id": "Qwen/Qwen2-0.5B", "family": "qwen2", "arch": "transformer",
                 "format": "safetensors", "param_size": "0.5B", "size_gb": 0.93,
                 "downloads": 10, "likes": 1}]"#,
        )
        .unwrap();

        assert_ok!(execute(&validate_args(&path)).await);
    }

    #[tokio::test]
    async fn test_missing_field_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("models.json");
        std::fs::write(&path, r#"[{"id": "org/a", "family": "llama"}]"#).unwrap();

        let err = execute(&validate_args(&path)).await.unwrap_err();
        assert!(err.to_string().contains("missing required field 'arch'"));
    }

    #[tokio::test]
    async fn test_unreadable_artifact_fails() {
        let dir = TempDir::new().unwrap();
        let result = execute(&validate_args(&dir.path().join("absent.json"))).await;
        assert_err!(result);
    }
}
