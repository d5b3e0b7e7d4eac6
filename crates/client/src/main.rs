//! Card cost calculator binary.
//!
//! ```bash
//! # Interactive terminal calculator
//! cargo run -p card-pricer
//!
//! # One-shot quote, optionally as JSON
//! cargo run -p card-pricer -- quote --ovr 90 --base-stats 532 --upgrade-level 2 --json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use card_pricer::commands::{QuoteArgs, TuiArgs};
use clap::Parser;
use client_frontend_cli::CliConfig;

/// Card cost calculator
#[derive(Parser)]
#[command(name = "card-pricer")]
#[command(about = "Price a card from its overall rating, base stats and upgrade level", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory containing card_pricing.json and upgrade_pricing.json
    /// (overrides PRICER_DATA_DIR; embedded tables when neither is set)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Parser)]
enum Command {
    /// Open the interactive calculator (default)
    Tui(TuiArgs),

    /// Price a single card and print the result
    Quote(QuoteArgs),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for PRICER_* variables)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = CliConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }

    match cli.command.unwrap_or_else(|| Command::Tui(TuiArgs::default())) {
        Command::Tui(cmd) => cmd.execute(config),
        Command::Quote(cmd) => cmd.execute(config),
    }
}
