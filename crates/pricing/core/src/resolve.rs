//! Cost resolution: validated input plus tables in, priced result out.
//!
//! The base-cost and upgrade lookups are independent; neither reads the
//! other's result, so their order does not matter.

use crate::tables::{PriceOracle, UpgradeOracle};
use crate::tier::{RatingTier, UpgradeLevel};
use crate::validate::ValidationResult;

/// Base cost lookup outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", tag = "status", content = "value"))]
pub enum BaseCost {
    Available(u64),
    /// No price data covers the (tier, base stats) pair, or input was invalid.
    Unavailable,
}

impl BaseCost {
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Numeric value, counting an unavailable cost as zero.
    pub const fn value_or_zero(&self) -> u64 {
        match self {
            Self::Available(value) => *value,
            Self::Unavailable => 0,
        }
    }
}

impl From<Option<u64>> for BaseCost {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Self::Unavailable, Self::Available)
    }
}

/// Priced result for one set of inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CostResult {
    pub base_cost: BaseCost,
    pub upgrade_cost: u64,
    /// Base cost (zero when unavailable) plus upgrade cost.
    pub total_cost: u64,
}

impl CostResult {
    /// Result for input that failed hard validation.
    pub const UNAVAILABLE: Self = Self {
        base_cost: BaseCost::Unavailable,
        upgrade_cost: 0,
        total_cost: 0,
    };
}

/// Combines the price and upgrade oracles into a total cost.
#[derive(Clone, Debug)]
pub struct CostResolver<P, U> {
    prices: P,
    upgrades: U,
}

impl<P, U> CostResolver<P, U>
where
    P: PriceOracle,
    U: UpgradeOracle,
{
    pub fn new(prices: P, upgrades: U) -> Self {
        Self { prices, upgrades }
    }

    /// Resolves the cost for the given inputs.
    ///
    /// Base stats are taken from `validation`; a hard validation error yields
    /// [`CostResult::UNAVAILABLE`]. Upgrade cost is zero unless the value is
    /// upgrade-eligible and has an upgrade entry.
    pub fn resolve(
        &self,
        tier: RatingTier,
        level: UpgradeLevel,
        validation: &ValidationResult,
    ) -> CostResult {
        let Ok(stats) = validation else {
            return CostResult::UNAVAILABLE;
        };

        let base_cost = BaseCost::from(self.prices.base_cost(tier, stats.value()));

        let upgrade_cost = if stats.upgrade_eligible() {
            self.upgrades
                .per_level_cost(stats.value())
                .map_or(0, |per_level| per_level.saturating_mul(level.get() as u64))
        } else {
            0
        };

        CostResult {
            base_cost,
            upgrade_cost,
            total_cost: base_cost.value_or_zero().saturating_add(upgrade_cost),
        }
    }

    pub fn prices(&self) -> &P {
        &self.prices
    }

    pub fn upgrades(&self) -> &U {
        &self.upgrades
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{PriceEntry, PriceTable, UpgradeEntry, UpgradeTable};
    use crate::validate::validate;

    fn resolver() -> CostResolver<PriceTable, UpgradeTable> {
        let prices = PriceTable::from_entries([
            PriceEntry::new(90, 251, 399, 9_000),
            PriceEntry::new(90, 400, 519, 14_000),
            PriceEntry::new(90, 520, 594, 21_500),
        ])
        .unwrap();
        let upgrades = UpgradeTable::from_entries([
            UpgradeEntry::new(532, 2_000),
            UpgradeEntry::new(300, 700),
        ]);
        CostResolver::new(prices, upgrades)
    }

    fn tier(value: u8) -> RatingTier {
        RatingTier::new(value).unwrap()
    }

    fn level(value: u8) -> UpgradeLevel {
        UpgradeLevel::new(value).unwrap()
    }

    #[test]
    fn scenario_tier_90_stats_532_no_upgrade() {
        let result = resolver().resolve(tier(90), level(0), &validate("532"));
        assert_eq!(result.base_cost, BaseCost::Available(21_500));
        assert_eq!(result.upgrade_cost, 0);
        assert_eq!(result.total_cost, 21_500);
    }

    #[test]
    fn upgrade_adds_per_level_cost() {
        let result = resolver().resolve(tier(90), level(3), &validate("532"));
        assert_eq!(result.upgrade_cost, 6_000);
        assert_eq!(result.total_cost, 27_500);
    }

    #[test]
    fn hard_error_is_unavailable() {
        let result = resolver().resolve(tier(90), level(5), &validate("200"));
        assert_eq!(result, CostResult::UNAVAILABLE);
    }

    #[test]
    fn missing_upgrade_entry_is_silent_zero() {
        let result = resolver().resolve(tier(90), level(3), &validate("450"));
        assert_eq!(result.base_cost, BaseCost::Available(14_000));
        assert_eq!(result.upgrade_cost, 0);
        assert_eq!(result.total_cost, 14_000);
    }

    #[test]
    fn ineligible_stats_ignore_upgrade_level() {
        // 300 has an upgrade entry but sits below the unlock threshold.
        let result = resolver().resolve(tier(90), level(5), &validate("300"));
        assert_eq!(result.base_cost, BaseCost::Available(9_000));
        assert_eq!(result.upgrade_cost, 0);
    }

    #[test]
    fn absent_tier_keeps_upgrade_in_total() {
        let result = resolver().resolve(tier(70), level(2), &validate("532"));
        assert_eq!(result.base_cost, BaseCost::Unavailable);
        assert_eq!(result.upgrade_cost, 4_000);
        assert_eq!(result.total_cost, 4_000);
    }

    #[test]
    fn base_cost_from_option() {
        assert_eq!(BaseCost::from(Some(5)), BaseCost::Available(5));
        assert_eq!(BaseCost::from(None), BaseCost::Unavailable);
        assert!(!BaseCost::Unavailable.is_available());
        assert_eq!(BaseCost::Unavailable.value_or_zero(), 0);
    }
}
