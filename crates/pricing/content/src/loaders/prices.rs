//! Card price table loader.
//!
//! JSON format:
//! ```json
//! [{ "ovr": 90, "prices": [{ "minInclusive": 251, "maxInclusive": 349, "cost": "9,650" }] }]
//! ```

use std::path::Path;

use anyhow::Context;
use pricing_core::{PriceEntry, PriceTable};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One priced band as stored in JSON; `cost` keeps its grouping commas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceBandJson {
    min_inclusive: u16,
    max_inclusive: u16,
    cost: String,
}

/// All bands of one rating tier as stored in JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TierPricesJson {
    ovr: u8,
    prices: Vec<PriceBandJson>,
}

/// Loader for the card price table.
pub struct PriceTableLoader;

impl PriceTableLoader {
    /// Load the price table from a JSON file.
    pub fn load(path: &Path) -> LoadResult<PriceTable> {
        let content = read_file(path)?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to load card pricing from {}", path.display()))
    }

    /// Parse the price table from a JSON string.
    ///
    /// Band order within a tier is preserved, so lookups keep first-match
    /// semantics even when the data overlaps.
    pub fn from_json(json: &str) -> LoadResult<PriceTable> {
        let tiers: Vec<TierPricesJson> = serde_json::from_str(json)
            .map_err(|e| anyhow::anyhow!("Failed to parse card pricing JSON: {}", e))?;

        let mut table = PriceTable::new();
        for tier in tiers {
            for band in tier.prices {
                let cost = parse_grouped_cost(&band.cost).with_context(|| {
                    format!(
                        "Invalid cost for tier {} band {}..={}",
                        tier.ovr, band.min_inclusive, band.max_inclusive
                    )
                })?;
                table.insert(PriceEntry::new(
                    tier.ovr,
                    band.min_inclusive,
                    band.max_inclusive,
                    cost,
                ))?;
            }
        }

        tracing::debug!(
            tiers = table.tiers().count(),
            bands = table.len(),
            "Parsed card pricing"
        );
        Ok(table)
    }
}

/// Parses a cost string with grouping commas (`"12,500"` -> `12500`).
pub fn parse_grouped_cost(raw: &str) -> LoadResult<u64> {
    let digits: String = raw.trim().chars().filter(|&c| c != ',').collect();
    digits
        .parse::<u64>()
        .map_err(|e| anyhow::anyhow!("'{}' is not a cost: {}", raw, e))
}
