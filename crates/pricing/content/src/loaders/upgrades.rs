//! Upgrade table loader.
//!
//! JSON format, keyed by the base-stats value as a string:
//! ```json
//! [{ "baseStat": "532", "cost": 7300 }]
//! ```

use std::path::Path;

use anyhow::Context;
use pricing_core::{UpgradeEntry, UpgradeTable};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpgradeEntryJson {
    base_stat: String,
    cost: u64,
}

/// Loader for the per-level upgrade table.
pub struct UpgradeTableLoader;

impl UpgradeTableLoader {
    /// Load the upgrade table from a JSON file.
    pub fn load(path: &Path) -> LoadResult<UpgradeTable> {
        let content = read_file(path)?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to load upgrade pricing from {}", path.display()))
    }

    /// Parse the upgrade table from a JSON string.
    ///
    /// Keys are stored as strings in the data file and parsed to integers
    /// here, so lookups match on the numeric base-stats value.
    pub fn from_json(json: &str) -> LoadResult<UpgradeTable> {
        let raw: Vec<UpgradeEntryJson> = serde_json::from_str(json)
            .map_err(|e| anyhow::anyhow!("Failed to parse upgrade pricing JSON: {}", e))?;

        let entries = raw
            .into_iter()
            .map(|entry| {
                let base_stats = entry.base_stat.trim().parse::<u16>().map_err(|e| {
                    anyhow::anyhow!("Invalid baseStat '{}': {}", entry.base_stat, e)
                })?;
                Ok(UpgradeEntry::new(base_stats, entry.cost))
            })
            .collect::<LoadResult<Vec<_>>>()?;

        let table = UpgradeTable::from_entries(entries);
        tracing::debug!(entries = table.len(), "Parsed upgrade pricing");
        Ok(table)
    }
}
