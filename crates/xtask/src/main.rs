//! Development tasks for the eligibility workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod content;

use anyhow::Result;
use clap::Parser;
use commands::{Allowed, Check, Summary};
use tracing_subscriber::EnvFilter;

/// Development tasks for the eligibility workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Inspect eligibility content and query the engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Answer one eligibility query and explain a denial
    Check(Check),

    /// List the subjects allowed to use a resource
    Allowed(Allowed),

    /// Load the content directory and report what was loaded or skipped
    Summary(Summary),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for ELIGIBILITY_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check(cmd) => cmd.execute(),
        Command::Allowed(cmd) => cmd.execute(),
        Command::Summary(cmd) => cmd.execute(),
    }
}
