//! Loaded-once, read-only pair of pricing tables.

use std::sync::Arc;

use pricing_core::{Calculator, CostFormatter, PriceTable, PricingConfig, UpgradeTable};

/// Price and upgrade tables shared by every consumer for the process lifetime.
#[derive(Clone, Debug)]
pub struct TableBundle {
    pub prices: Arc<PriceTable>,
    pub upgrades: Arc<UpgradeTable>,
}

impl TableBundle {
    /// Wraps both tables and logs any coverage defect in the price table.
    pub fn new(prices: PriceTable, upgrades: UpgradeTable) -> Self {
        let issues = prices.audit(PricingConfig::MIN_BASE_STATS, PricingConfig::MAX_BASE_STATS);
        for issue in &issues {
            tracing::warn!("Price table coverage: {}", issue);
        }

        tracing::info!(
            price_bands = prices.len(),
            upgrade_entries = upgrades.len(),
            coverage_issues = issues.len(),
            "Pricing tables ready"
        );

        Self {
            prices: Arc::new(prices),
            upgrades: Arc::new(upgrades),
        }
    }

    /// Builds a calculator sharing these tables.
    pub fn calculator(&self, formatter: CostFormatter) -> Calculator<Arc<PriceTable>, Arc<UpgradeTable>> {
        Calculator::new(Arc::clone(&self.prices), Arc::clone(&self.upgrades), formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricing_core::{PriceEntry, QuoteInput, RatingTier, UpgradeEntry, UpgradeLevel};

    #[test]
    fn bundle_calculator_shares_tables() {
        let prices = PriceTable::from_entries([PriceEntry::new(90, 251, 594, 5_000)]).unwrap();
        let upgrades = UpgradeTable::from_entries([UpgradeEntry::new(500, 100)]);
        let bundle = TableBundle::new(prices, upgrades);

        let calculator = bundle.calculator(CostFormatter::default());
        let quote = calculator.quote(QuoteInput::new(
            RatingTier::DEFAULT,
            "500",
            UpgradeLevel::MAX,
        ));
        assert_eq!(quote.view.formatted_total_cost, "5,500 credits");
        assert_eq!(Arc::strong_count(&bundle.prices), 2);
    }
}
