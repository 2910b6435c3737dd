//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Select packaging-compatible models from the HuggingFace Hub.
#[derive(Debug, Parser)]
#[command(name = "modelpick")]
#[command(about = "Select HuggingFace models that modctl can package, and dry-run the packaging workflow")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
