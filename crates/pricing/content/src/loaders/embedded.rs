//! Default pricing data compiled into the binary.

use pricing_core::{PriceTable, UpgradeTable};

use crate::bundle::TableBundle;
use crate::loaders::{LoadResult, PriceTableLoader, UpgradeTableLoader};

/// Built-in tables used when no data directory is configured.
pub struct EmbeddedContent;

impl EmbeddedContent {
    pub const CARD_PRICING_JSON: &'static str = include_str!("../../data/card_pricing.json");
    pub const UPGRADE_PRICING_JSON: &'static str = include_str!("../../data/upgrade_pricing.json");

    pub fn price_table() -> LoadResult<PriceTable> {
        PriceTableLoader::from_json(Self::CARD_PRICING_JSON)
            .map_err(|e| anyhow::anyhow!("Failed to parse embedded card_pricing.json: {:#}", e))
    }

    pub fn upgrade_table() -> LoadResult<UpgradeTable> {
        UpgradeTableLoader::from_json(Self::UPGRADE_PRICING_JSON)
            .map_err(|e| anyhow::anyhow!("Failed to parse embedded upgrade_pricing.json: {:#}", e))
    }

    /// Loads both embedded tables into an audited bundle.
    pub fn bundle() -> LoadResult<TableBundle> {
        tracing::info!("Loading embedded pricing tables");
        Ok(TableBundle::new(Self::price_table()?, Self::upgrade_table()?))
    }
}
