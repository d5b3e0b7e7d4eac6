//! Static pricing data and loaders.
//!
//! This crate houses the card price and upgrade tables and the loaders that
//! turn their JSON files into `pricing-core` tables:
//! - Card pricing by rating tier and base-stats band (`card_pricing.json`)
//! - Per-level upgrade increments by exact base stats (`upgrade_pricing.json`)
//!
//! Tables are loaded once at startup, audited for coverage, and shared
//! read-only through a [`TableBundle`].

pub mod bundle;
pub mod loaders;

pub use bundle::TableBundle;
pub use loaders::{
    ContentFactory, EmbeddedContent, LoadResult, PriceTableLoader, UpgradeTableLoader,
    parse_grouped_cost,
};
