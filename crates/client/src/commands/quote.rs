//! One-shot pricing from the command line.

use anyhow::{Context, Result};
use clap::Parser;
use client_frontend_cli::{CliConfig, logging, presentation::render_plain};
use pricing_content::TableBundle;
use pricing_core::{CostResult, QuoteInput, QuoteView, RatingTier, UpgradeLevel};
use serde::Serialize;

use crate::load_bundle;

/// Price a single card and print the result
#[derive(Parser, Debug)]
pub struct QuoteArgs {
    /// Overall rating (clamped to 70..=99, default from PRICER_DEFAULT_OVR)
    #[arg(long, allow_negative_numbers = true)]
    pub ovr: Option<i64>,

    /// Total base stats, exactly as it would be typed
    #[arg(long, allow_hyphen_values = true)]
    pub base_stats: String,

    /// Upgrade level (clamped to 0..=5)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub upgrade_level: i64,

    /// Print JSON instead of plain lines
    #[arg(long)]
    pub json: bool,
}

/// JSON shape of a priced quote.
#[derive(Debug, Serialize)]
struct QuoteReport<'a> {
    rating_tier: RatingTier,
    base_stats_text: &'a str,
    upgrade_level: UpgradeLevel,
    cost: &'a CostResult,
    #[serde(flatten)]
    view: &'a QuoteView,
}

impl QuoteArgs {
    pub fn execute(self, config: CliConfig) -> Result<()> {
        logging::setup_stderr_logging()?;

        let bundle = load_bundle(&config)?;
        let output = self.render(&config, &bundle)?;
        print!("{output}");
        Ok(())
    }

    /// Price the arguments against `bundle` and render the output text.
    pub fn render(&self, config: &CliConfig, bundle: &TableBundle) -> Result<String> {
        let rating_tier = self
            .ovr
            .map_or_else(|| config.initial_tier(), RatingTier::clamped);
        let upgrade_level = UpgradeLevel::clamped(self.upgrade_level);

        let calculator = bundle.calculator(config.formatter());
        let quote = calculator.quote(QuoteInput::new(rating_tier, &self.base_stats, upgrade_level));

        tracing::debug!(
            tier = rating_tier.get(),
            level = upgrade_level.get(),
            valid = quote.is_valid(),
            total = quote.cost.total_cost,
            "Quote computed"
        );

        if !self.json {
            return Ok(render_plain(&quote.view));
        }

        let report = QuoteReport {
            rating_tier,
            base_stats_text: &self.base_stats,
            upgrade_level,
            cost: &quote.cost,
            view: &quote.view,
        };
        let mut json =
            serde_json::to_string_pretty(&report).context("Failed to serialize quote")?;
        json.push('\n');
        Ok(json)
    }
}
