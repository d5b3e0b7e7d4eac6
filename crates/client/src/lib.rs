//! Composition root for the card cost calculator.
//!
//! Picks the table source (a data directory or the embedded defaults),
//! then hands the loaded tables to either the terminal UI or the one-shot
//! `quote` command.

pub mod commands;

use anyhow::{Context, Result};
use client_frontend_cli::CliConfig;
use pricing_content::{ContentFactory, EmbeddedContent, TableBundle};

/// Load the pricing tables selected by `config`.
pub fn load_bundle(config: &CliConfig) -> Result<TableBundle> {
    match &config.data_dir {
        Some(dir) => {
            tracing::info!("Loading pricing tables from {}", dir.display());
            ContentFactory::new(dir)
                .load_bundle()
                .with_context(|| format!("Failed to load pricing tables from {}", dir.display()))
        }
        None => {
            tracing::debug!("Using embedded pricing tables");
            EmbeddedContent::bundle().context("Embedded pricing tables are invalid")
        }
    }
}
