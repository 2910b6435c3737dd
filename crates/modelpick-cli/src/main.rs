//! CLI entry point - the composition root.
//!
//! Diagnostics go to stderr through `tracing`; stdout carries only the
//! selection JSON or the validation report.

use clap::Parser;

use modelpick_cli::{Cli, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (HF_TOKEN, RUST_LOG, ...)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    bootstrap::init_logging(cli.verbose);

    match cli.command {
        Commands::Select(args) => handlers::select::execute(&args).await,
        Commands::Validate(args) => handlers::validate::execute(&args).await,
    }
}
