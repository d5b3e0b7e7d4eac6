//! End-to-end pricing pipeline: validate, resolve, format.
//!
//! The whole pipeline re-runs on every input change. It is cheap and pure,
//! so identical inputs always give an identical [`Quote`].

use crate::format::CostFormatter;
use crate::resolve::{CostResolver, CostResult};
use crate::tables::{PriceOracle, UpgradeOracle};
use crate::tier::{RatingTier, UpgradeLevel};
use crate::validate::{ValidationResult, validate};

/// Raw form state handed over by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuoteInput<'a> {
    pub rating_tier: RatingTier,
    pub base_stats_text: &'a str,
    pub upgrade_level: UpgradeLevel,
}

impl<'a> QuoteInput<'a> {
    pub const fn new(
        rating_tier: RatingTier,
        base_stats_text: &'a str,
        upgrade_level: UpgradeLevel,
    ) -> Self {
        Self {
            rating_tier,
            base_stats_text,
            upgrade_level,
        }
    }
}

/// Display strings consumed by the presentation layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuoteView {
    /// Hard validation message, empty when input is valid.
    pub validation_error: String,
    /// Soft advisory message, empty when none applies.
    pub validation_advisory: String,
    pub formatted_base_cost: String,
    pub formatted_upgrade_cost: String,
    /// Fallback text whenever the base cost is unavailable.
    pub formatted_total_cost: String,
    /// True when the upgrade level control should be enabled.
    pub upgrade_enabled: bool,
}

/// Full pipeline output for one input snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quote {
    pub validation: ValidationResult,
    pub cost: CostResult,
    pub view: QuoteView,
}

impl Quote {
    /// True if validation fully succeeded (an advisory may still apply).
    pub fn is_valid(&self) -> bool {
        self.validation.is_ok()
    }
}

/// Pricing pipeline bound to a pair of tables and a formatter.
#[derive(Clone, Debug)]
pub struct Calculator<P, U> {
    resolver: CostResolver<P, U>,
    formatter: CostFormatter,
}

impl<P, U> Calculator<P, U>
where
    P: PriceOracle,
    U: UpgradeOracle,
{
    pub fn new(prices: P, upgrades: U, formatter: CostFormatter) -> Self {
        Self {
            resolver: CostResolver::new(prices, upgrades),
            formatter,
        }
    }

    pub fn quote(&self, input: QuoteInput<'_>) -> Quote {
        let validation = validate(input.base_stats_text);
        let cost = self
            .resolver
            .resolve(input.rating_tier, input.upgrade_level, &validation);
        let view = self.render(&validation, &cost);

        Quote {
            validation,
            cost,
            view,
        }
    }

    fn render(&self, validation: &ValidationResult, cost: &CostResult) -> QuoteView {
        let (validation_error, validation_advisory, upgrade_enabled) = match validation {
            Ok(stats) => (
                String::new(),
                stats.advisory().map(|a| a.to_string()).unwrap_or_default(),
                stats.upgrade_eligible(),
            ),
            Err(err) => (err.help_text().to_string(), String::new(), false),
        };

        let formatted_total_cost = if cost.base_cost.is_available() {
            self.formatter.format(cost.total_cost)
        } else {
            self.formatter.fallback().to_string()
        };

        QuoteView {
            validation_error,
            validation_advisory,
            formatted_base_cost: self.formatter.format_base(cost.base_cost),
            formatted_upgrade_cost: self.formatter.format(cost.upgrade_cost),
            formatted_total_cost,
            upgrade_enabled,
        }
    }

    pub fn resolver(&self) -> &CostResolver<P, U> {
        &self.resolver
    }

    pub fn formatter(&self) -> &CostFormatter {
        &self.formatter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::BaseCost;
    use crate::tables::{PriceEntry, PriceTable, UpgradeEntry, UpgradeTable};
    use crate::validate::{BASE_STATS_HELP, UPGRADE_LOCKED_HELP, ValidationError};

    fn calculator() -> Calculator<PriceTable, UpgradeTable> {
        let prices = PriceTable::from_entries([
            PriceEntry::new(90, 251, 399, 9_000),
            PriceEntry::new(90, 400, 594, 14_000),
        ])
        .unwrap();
        let upgrades = UpgradeTable::from_entries([UpgradeEntry::new(500, 1_250)]);
        Calculator::new(prices, upgrades, CostFormatter::default())
    }

    fn input(tier: u8, text: &str, level: u8) -> QuoteInput<'_> {
        QuoteInput::new(
            RatingTier::clamped(tier as i64),
            text,
            UpgradeLevel::clamped(level as i64),
        )
    }

    #[test]
    fn valid_upgrade_quote_renders_all_lines() {
        let quote = calculator().quote(input(90, "500", 2));
        assert!(quote.is_valid());
        assert_eq!(quote.view.validation_error, "");
        assert_eq!(quote.view.validation_advisory, "");
        assert_eq!(quote.view.formatted_base_cost, "14,000 credits");
        assert_eq!(quote.view.formatted_upgrade_cost, "2,500 credits");
        assert_eq!(quote.view.formatted_total_cost, "16,500 credits");
        assert!(quote.view.upgrade_enabled);
    }

    #[test]
    fn invalid_input_shows_error_and_fallbacks() {
        let quote = calculator().quote(input(90, "200", 0));
        assert_eq!(
            quote.validation,
            Err(ValidationError::OutOfRange { value: 200 })
        );
        assert_eq!(quote.view.validation_error, BASE_STATS_HELP);
        assert_eq!(quote.view.formatted_base_cost, "n/a");
        assert_eq!(quote.view.formatted_total_cost, "n/a");
        assert_eq!(quote.cost.total_cost, 0);
        assert!(!quote.view.upgrade_enabled);
    }

    #[test]
    fn low_stats_show_advisory_but_price() {
        let quote = calculator().quote(input(90, "350", 4));
        assert_eq!(quote.view.validation_error, "");
        assert_eq!(quote.view.validation_advisory, UPGRADE_LOCKED_HELP);
        assert_eq!(quote.view.formatted_base_cost, "9,000 credits");
        assert_eq!(quote.view.formatted_upgrade_cost, "n/a");
        assert!(!quote.view.upgrade_enabled);
    }

    #[test]
    fn absent_tier_suppresses_total_display() {
        let quote = calculator().quote(input(75, "500", 1));
        assert_eq!(quote.cost.base_cost, BaseCost::Unavailable);
        assert_eq!(quote.cost.total_cost, 1_250);
        assert_eq!(quote.view.formatted_base_cost, "n/a");
        assert_eq!(quote.view.formatted_total_cost, "n/a");
    }

    #[test]
    fn tier_below_range_is_clamped_before_pricing() {
        let quote = calculator().quote(input(65, "500", 0));
        assert_eq!(quote.cost.base_cost, BaseCost::Unavailable);
        let at_min = calculator().quote(input(70, "500", 0));
        assert_eq!(quote, at_min);
    }

    #[test]
    fn repeated_quotes_are_identical() {
        let calculator = calculator();
        let first = calculator.quote(input(90, "500", 3));
        let second = calculator.quote(input(90, "500", 3));
        assert_eq!(first, second);
    }
}
