//! `modelpick select`: run the selection pipeline and emit JSON.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use modelpick_core::{CatalogDescriptor, CompatibilityEvaluator, TopModelSelector};
use tracing::info;

use crate::bootstrap;
use crate::commands::SelectArgs;

/// Execute the select command.
///
/// The JSON is rendered in full before anything is written, so a failed run
/// never leaves a partial artifact behind.
pub async fn execute(args: &SelectArgs) -> Result<()> {
    let params = args.selection_params();
    let catalog = bootstrap::build_catalog(args)?;
    let evaluator = CompatibilityEvaluator::new(bootstrap::family_vocabulary(&args.families));

    let outcome = TopModelSelector::new(catalog, evaluator)
        .select_top(&params)
        .await
        .context("Model selection failed")?;

    let json = render(&outcome.selected)?;
    write_output(&json, args.output.as_deref())?;

    if let Some(path) = &args.output {
        info!(
            "Wrote {} models to {}",
            outcome.selected.len(),
            path.display()
        );
    }
    Ok(())
}

/// Pretty-printed JSON array of descriptors.
pub fn render(descriptors: &[CatalogDescriptor]) -> Result<String> {
    serde_json::to_string_pretty(descriptors).context("Failed to serialize selection")
}

/// Write the artifact to `path`, or to stdout when no path is given.
pub fn write_output(json: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").context("Failed to write to stdout")?;
            stdout.flush().context("Failed to write to stdout")
        }
    }
}
