//! Command-line host for the build planner.
//!
//! Loads content from a data directory, replays builds through the planner
//! core and prints derived stats, ability damage and data-quality reports.

mod commands;
mod config;
mod dirs;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Abilities, Stats, Validate};
use config::CliConfig;

/// Character build planner
#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Plan character builds and inspect derived stats", long_about = None)]
#[command(version)]
struct Cli {
    /// Content directory (overrides PLANNER_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Planner config TOML (overrides PLANNER_CONFIG)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Print the derived stats of a build
    Stats(Stats),

    /// Check content for data-quality issues
    Validate(Validate),

    /// Print per-ability damage at each upgrade level
    Abilities(Abilities),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for PLANNER_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env().with_overrides(cli.data_dir, cli.config);

    match cli.command {
        Command::Stats(cmd) => cmd.execute(&config),
        Command::Validate(cmd) => cmd.execute(&config),
        Command::Abilities(cmd) => cmd.execute(&config),
    }
}
