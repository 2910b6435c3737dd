//! Tool availability types.

use std::path::PathBuf;

/// Availability of an external tool binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// Tool ran successfully; `version` is the first line it printed.
    Available { version: String },
    /// Tool is not installed or failed to run.
    Missing,
}

impl ToolStatus {
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }
}

/// A tool the downstream workflow expects to find.
#[derive(Debug, Clone)]
pub struct Prerequisite {
    /// Binary name (e.g., "jq", "git").
    pub name: String,
    /// What the workflow uses it for.
    pub description: String,
    pub status: ToolStatus,
}

impl Prerequisite {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            status: ToolStatus::Missing,
        }
    }

    /// Set the status of this prerequisite.
    #[must_use]
    pub fn with_status(mut self, status: ToolStatus) -> Self {
        self.status = status;
        self
    }
}

/// Where the packaging tool binary was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackagingToolLocation {
    /// Found at the relative path next to the working directory.
    Relative(PathBuf),
    /// Found through a PATH lookup.
    OnPath(PathBuf),
    /// Not found; it will need to be built.
    NotFound,
}

impl PackagingToolLocation {
    pub const fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }
}
