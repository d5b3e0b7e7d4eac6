//! Content loaders for reading pricing data from files.
//!
//! Every loader accepts either a path or an in-memory JSON string, so the
//! embedded defaults and on-disk overrides share one parser.

pub mod embedded;
pub mod factory;
pub mod prices;
pub mod upgrades;

pub use embedded::EmbeddedContent;
pub use factory::ContentFactory;
pub use prices::{PriceTableLoader, parse_grouped_cost};
pub use upgrades::UpgradeTableLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
