//! Tool probe port for prerequisite detection.
//!
//! This port abstracts active probing (command execution, PATH lookup) from
//! the core domain. The implementation lives in `modelpick-cli`.
//!
//! # Design Notes
//!
//! - Core owns the trait and types (pure)
//! - The CLI owns the implementation (active probing via `tokio::process`)
//! - Probing never fails; absence is reported as a status

use std::path::Path;

use async_trait::async_trait;

use crate::utils::system::{PackagingToolLocation, ToolStatus};

/// Port for probing external tool binaries.
#[async_trait]
pub trait ToolProbePort: Send + Sync {
    /// Check whether `tool` runs with `--version`, returning its version line.
    async fn probe_tool(&self, tool: &str) -> ToolStatus;

    /// Locate the packaging tool.
    ///
    /// Checks `relative_path` first, then falls back to a PATH lookup of
    /// `name`.
    fn locate_packaging_tool(&self, name: &str, relative_path: &Path) -> PackagingToolLocation;
}
