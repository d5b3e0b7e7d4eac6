//! CLI configuration from environment variables.
use std::env;
use std::path::PathBuf;

use pricing_core::{CostFormatter, PricingConfig, RatingTier};

use crate::logging;

/// Configuration for the terminal calculator.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Directory holding `card_pricing.json` and `upgrade_pricing.json`.
    /// Embedded tables are used when unset.
    pub data_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub pricing: PricingConfig,
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PRICER_DATA_DIR` - Directory with pricing JSON files (default: embedded data)
    /// - `PRICER_LOG_DIR` - Log file directory (default: platform cache dir)
    /// - `PRICER_DEFAULT_OVR` - Initial rating tier, clamped to 70..=99 (default: 90)
    /// - `PRICER_FALLBACK_TEXT` - Text shown for unavailable costs (default: "n/a")
    /// - `PRICER_CURRENCY_SUFFIX` - Text appended to costs (default: " credits")
    /// - `PRICER_TICK_MS` - Input poll interval in milliseconds (default: 250)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.data_dir = lookup("PRICER_DATA_DIR").map(PathBuf::from);
        config.log_dir = lookup("PRICER_LOG_DIR").map(PathBuf::from);

        if let Some(tier) = parse::<i64>(&lookup, "PRICER_DEFAULT_OVR") {
            config.pricing.default_rating_tier = RatingTier::clamped(tier).get();
        }

        if let Some(fallback) = lookup("PRICER_FALLBACK_TEXT") {
            config.pricing.fallback = fallback;
        }

        if let Some(suffix) = lookup("PRICER_CURRENCY_SUFFIX") {
            config.pricing.suffix = suffix;
        }

        if let Some(tick) = parse::<u64>(&lookup, "PRICER_TICK_MS") {
            config.ui.tick_ms = tick.max(10);
        }

        config
    }

    pub fn initial_tier(&self) -> RatingTier {
        RatingTier::clamped(self.pricing.default_rating_tier as i64)
    }

    pub fn formatter(&self) -> CostFormatter {
        CostFormatter::from_config(&self.pricing)
    }

    /// Configured log directory, or the platform default.
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(logging::default_log_dir)
    }
}

/// UI timing configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// How long to wait for input before redrawing.
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_ms: 250 }
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config_from(&[]);
        assert!(config.data_dir.is_none());
        assert_eq!(config.initial_tier(), RatingTier::DEFAULT);
        assert_eq!(config.ui.tick_ms, 250);
        assert_eq!(config.formatter().format(0), "n/a");
    }

    #[test]
    fn default_tier_is_clamped() {
        assert_eq!(config_from(&[("PRICER_DEFAULT_OVR", "12")]).initial_tier().get(), 70);
        assert_eq!(config_from(&[("PRICER_DEFAULT_OVR", "120")]).initial_tier().get(), 99);
        assert_eq!(config_from(&[("PRICER_DEFAULT_OVR", "x")]).initial_tier(), RatingTier::DEFAULT);
    }

    #[test]
    fn formatter_overrides_apply() {
        let config = config_from(&[
            ("PRICER_FALLBACK_TEXT", "--"),
            ("PRICER_CURRENCY_SUFFIX", " cr"),
        ]);
        assert_eq!(config.formatter().format(1_500), "1,500 cr");
        assert_eq!(config.formatter().format(0), "--");
    }

    #[test]
    fn paths_and_tick_are_read() {
        let config = config_from(&[
            ("PRICER_DATA_DIR", "/srv/pricing"),
            ("PRICER_LOG_DIR", "/var/log/pricer"),
            ("PRICER_TICK_MS", "1"),
        ]);
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/pricing")));
        assert_eq!(config.log_dir(), PathBuf::from("/var/log/pricer"));
        assert_eq!(config.ui.tick_ms, 10);
    }
}
