//! Interactive terminal calculator.

use anyhow::Result;
use clap::Parser;
use client_frontend_cli::{CliApp, CliConfig, TracingObserver, logging};

use pricing_core::RatingTier;

use crate::load_bundle;

/// Open the interactive calculator (default)
#[derive(Parser, Debug, Default)]
pub struct TuiArgs {
    /// Initial overall rating (clamped to 70..=99)
    #[arg(long, allow_negative_numbers = true)]
    pub ovr: Option<i64>,
}

impl TuiArgs {
    pub fn execute(self, mut config: CliConfig) -> Result<()> {
        // Logs go to a file; stderr belongs to the alternate screen.
        let _log_guard = logging::setup_logging(&config.log_dir())?;

        if let Some(ovr) = self.ovr {
            config.pricing.default_rating_tier = RatingTier::clamped(ovr).get();
        }

        tracing::info!(
            data_dir = ?config.data_dir,
            initial_tier = config.initial_tier().get(),
            "Starting card pricer"
        );

        let bundle = load_bundle(&config)?;
        let calculator = bundle.calculator(config.formatter());

        CliApp::new(config, calculator, Box::new(TracingObserver)).run()
    }
}
