//! Active tool probing for the workflow validator.

mod commands;

use std::path::Path;

use async_trait::async_trait;
use modelpick_core::{PackagingToolLocation, ToolProbePort, ToolStatus};
use tracing::debug;

pub use commands::get_command_version;

/// Probes the local machine by running commands and searching `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultToolProbe;

impl DefaultToolProbe {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ToolProbePort for DefaultToolProbe {
    async fn probe_tool(&self, tool: &str) -> ToolStatus {
        get_command_version(tool, "--version")
            .await
            .map_or(ToolStatus::Missing, |version| ToolStatus::Available { version })
    }

    fn locate_packaging_tool(&self, name: &str, relative_path: &Path) -> PackagingToolLocation {
        if relative_path.exists() {
            return PackagingToolLocation::Relative(relative_path.to_path_buf());
        }
        match which::which(name) {
            Ok(path) => PackagingToolLocation::OnPath(path),
            Err(e) => {
                debug!(tool = %name, error = %e, "Packaging tool not on PATH");
                PackagingToolLocation::NotFound
            }
        }
    }
}
