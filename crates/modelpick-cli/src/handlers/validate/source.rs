//! Where the validator gets its descriptor document from.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use modelpick_core::ValidatorSettings;
use serde_json::Value;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Failure to obtain a descriptor document.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to locate the modelpick executable: {0}")]
    CurrentExe(#[source] io::Error),

    #[error("Failed to run model selection: {0}")]
    Spawn(#[source] io::Error),

    #[error("Model selection exited with {status}: {stderr}")]
    SelectionFailed { status: ExitStatus, stderr: String },

    #[error("Invalid JSON output: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Read a descriptor document from a file written by `modelpick select`.
pub fn read_artifact(path: &Path) -> Result<Value, SourceError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

/// Run a fresh selection through this executable's own `select` subcommand.
pub async fn run_selection(settings: &ValidatorSettings) -> Result<Value, SourceError> {
    let program = std::env::current_exe().map_err(SourceError::CurrentExe)?;
    run_selection_with(&program, settings).await
}

/// Run `program select --limit N --max-size M` and parse its stdout.
pub async fn run_selection_with(
    program: &Path,
    settings: &ValidatorSettings,
) -> Result<Value, SourceError> {
    let limit = settings.selection_limit.to_string();
    let max_size = settings.selection_max_size_gb.to_string();
    debug!(program = %program.display(), %limit, %max_size, "Spawning selection");

    let output = Command::new(program)
        .args(["select", "--limit", &limit, "--max-size", &max_size])
        .output()
        .await
        .map_err(SourceError::Spawn)?;

    if !output.status.success() {
        return Err(SourceError::SelectionFailed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(serde_json::from_slice(&output.stdout)?)
}

/// Load the document from `input` when given, else run a fresh selection.
pub async fn load(input: Option<&Path>, settings: &ValidatorSettings) -> Result<Value, SourceError> {
    match input {
        Some(path) => read_artifact(path),
        None => run_selection(settings).await,
    }
}
