//! Selection and validation settings.
//!
//! Pure settings types with defaults and validation. The CLI fills them
//! from arguments and environment variables.

use std::path::PathBuf;

use crate::ports::SortKey;

/// Default number of descriptors to select.
pub const DEFAULT_LIMIT: u32 = 10;

/// Default size ceiling in GB.
pub const DEFAULT_MAX_SIZE_GB: f64 = 20.0;

/// Default task category filter.
pub const DEFAULT_TASK: &str = "text-generation";

/// Library filter applied to every listing.
pub const DEFAULT_LIBRARY: &str = "transformers";

/// Default registry prefix used in simulated build commands.
pub const DEFAULT_REGISTRY: &str = "ghcr.io/YOUR_ORG";

/// Smaller selection the validator runs when it has no artifact to read.
pub const VALIDATION_LIMIT: u32 = 3;
pub const VALIDATION_MAX_SIZE_GB: f64 = 5.0;

/// Parameters for one selection run.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionParams {
    /// Maximum number of descriptors to return.
    pub limit: u32,
    /// Size ceiling in GB; larger candidates are rejected.
    pub max_size_gb: f64,
    pub sort: SortKey,
    /// Task category filter; blank disables it.
    pub task: String,
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            max_size_gb: DEFAULT_MAX_SIZE_GB,
            sort: SortKey::Downloads,
            task: DEFAULT_TASK.to_string(),
        }
    }
}

impl SelectionParams {
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub const fn with_max_size_gb(mut self, max_size_gb: f64) -> Self {
        self.max_size_gb = max_size_gb;
        self
    }

    #[must_use]
    pub const fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    #[must_use]
    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = task.into();
        self
    }

    /// Validate the parameters.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.limit == 0 {
            return Err(SettingsError::InvalidLimit(self.limit));
        }
        if !self.max_size_gb.is_finite() || self.max_size_gb <= 0.0 {
            return Err(SettingsError::InvalidMaxSize(self.max_size_gb));
        }
        Ok(())
    }
}

/// Settings for the offline workflow validator.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorSettings {
    /// Registry prefix for simulated image references.
    pub registry: String,
    /// Limit passed to the selection subprocess.
    pub selection_limit: u32,
    /// Size ceiling passed to the selection subprocess.
    pub selection_max_size_gb: f64,
    /// Tools probed with `--version`, with what the workflow needs them for.
    pub prerequisites: Vec<(String, String)>,
    /// Packaging tool binary name.
    pub packaging_tool: String,
    /// Where a locally built packaging tool is expected.
    pub packaging_tool_path: PathBuf,
    /// Maximum concurrent builds in the simulated CI matrix.
    pub max_parallel_builds: usize,
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            registry: DEFAULT_REGISTRY.to_string(),
            selection_limit: VALIDATION_LIMIT,
            selection_max_size_gb: VALIDATION_MAX_SIZE_GB,
            prerequisites: vec![
                ("jq".to_string(), "Reads the selection JSON in CI".to_string()),
                ("git".to_string(), "Clones model repositories".to_string()),
            ],
            packaging_tool: "modctl".to_string(),
            packaging_tool_path: PathBuf::from("./modctl"),
            max_parallel_builds: 3,
        }
    }
}

impl ValidatorSettings {
    #[must_use]
    pub fn with_registry(mut self, registry: impl Into<String>) -> Self {
        self.registry = registry.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub const fn with_selection(mut self, limit: u32, max_size_gb: f64) -> Self {
        self.selection_limit = limit;
        self.selection_max_size_gb = max_size_gb;
        self
    }

    /// Selection parameters for the validator's own selection run.
    pub fn selection_params(&self) -> SelectionParams {
        SelectionParams::default()
            .with_limit(self.selection_limit)
            .with_max_size_gb(self.selection_max_size_gb)
    }

    /// Validate the settings.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.selection_params().validate()?;
        if self.registry.trim().is_empty() {
            return Err(SettingsError::EmptyRegistry);
        }
        if self.max_parallel_builds == 0 {
            return Err(SettingsError::InvalidParallelism);
        }
        Ok(())
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("Limit must be a positive integer, got {0}")]
    InvalidLimit(u32),

    #[error("Maximum size must be a positive number of GB, got {0}")]
    InvalidMaxSize(f64),

    #[error("Registry prefix must not be empty")]
    EmptyRegistry,

    #[error("Parallel build count must be at least 1")]
    InvalidParallelism,
}
