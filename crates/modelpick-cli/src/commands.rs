//! Subcommand definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use modelpick_core::SortKey;
use modelpick_core::settings::{
    DEFAULT_LIMIT, DEFAULT_MAX_SIZE_GB, DEFAULT_REGISTRY, DEFAULT_TASK, SelectionParams,
    VALIDATION_LIMIT, VALIDATION_MAX_SIZE_GB, ValidatorSettings,
};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Select the top packaging-compatible models and print them as JSON
    Select(SelectArgs),

    /// Dry-run the packaging workflow against a selection, offline
    Validate(ValidateArgs),
}

/// Ranking criterion for the candidate listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    #[default]
    Downloads,
    Likes,
    Trending,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Downloads => Self::Downloads,
            SortArg::Likes => Self::Likes,
            SortArg::Trending => Self::Trending,
        }
    }
}

#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Number of models to select
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,

    /// Maximum total weight size in GB
    #[arg(long = "max-size", default_value_t = DEFAULT_MAX_SIZE_GB)]
    pub max_size: f64,

    /// Sort candidates by this criterion (descending)
    #[arg(long = "sort-by", value_enum, default_value_t = SortArg::Downloads)]
    pub sort_by: SortArg,

    /// Pipeline tag to filter candidates by
    #[arg(long, default_value = DEFAULT_TASK)]
    pub task: String,

    /// Write the JSON here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// HuggingFace access token for gated repositories
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Hub endpoint, e.g. a mirror
    #[arg(long = "hub-url", env = "HF_ENDPOINT")]
    pub hub_url: Option<String>,

    /// Extra architecture families to recognise, lowest priority
    #[arg(
        long = "family",
        env = "MODELPICK_EXTRA_FAMILIES",
        value_delimiter = ','
    )]
    pub families: Vec<String>,
}

impl SelectArgs {
    pub fn selection_params(&self) -> SelectionParams {
        SelectionParams::default()
            .with_limit(self.limit)
            .with_max_size_gb(self.max_size)
            .with_sort(self.sort_by.into())
            .with_task(self.task.as_str())
    }
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Validate this selection file instead of running a fresh selection
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Limit for the fresh selection run
    #[arg(long, default_value_t = VALIDATION_LIMIT)]
    pub limit: u32,

    /// Size ceiling in GB for the fresh selection run
    #[arg(long = "max-size", default_value_t = VALIDATION_MAX_SIZE_GB)]
    pub max_size: f64,

    /// Registry prefix for simulated image references
    #[arg(long, env = "MODELPICK_REGISTRY", default_value = DEFAULT_REGISTRY)]
    pub registry: String,
}

impl ValidateArgs {
    pub fn settings(&self) -> ValidatorSettings {
        ValidatorSettings::default()
            .with_registry(self.registry.as_str())
            .with_selection(self.limit, self.max_size)
    }
}
