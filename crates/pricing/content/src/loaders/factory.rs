//! Content factory for loading pricing tables from a data directory.

use std::path::{Path, PathBuf};

use pricing_core::{PriceTable, UpgradeTable};

use crate::bundle::TableBundle;
use crate::loaders::{LoadResult, PriceTableLoader, UpgradeTableLoader};

/// Content factory that loads pricing tables from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── card_pricing.json
/// └── upgrade_pricing.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CARD_PRICING_FILE: &'static str = "card_pricing.json";
    pub const UPGRADE_PRICING_FILE: &'static str = "upgrade_pricing.json";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the card price table from `card_pricing.json`.
    pub fn load_prices(&self) -> LoadResult<PriceTable> {
        PriceTableLoader::load(&self.data_dir.join(Self::CARD_PRICING_FILE))
    }

    /// Load the upgrade table from `upgrade_pricing.json`.
    pub fn load_upgrades(&self) -> LoadResult<UpgradeTable> {
        UpgradeTableLoader::load(&self.data_dir.join(Self::UPGRADE_PRICING_FILE))
    }

    /// Load both tables into an audited bundle.
    pub fn load_bundle(&self) -> LoadResult<TableBundle> {
        tracing::info!("Loading pricing tables from {}", self.data_dir.display());
        Ok(TableBundle::new(self.load_prices()?, self.load_upgrades()?))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
