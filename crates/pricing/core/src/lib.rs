//! Deterministic card pricing rules shared by every front-end.
//!
//! `pricing-core` turns raw form input into a priced quote:
//! validation of the base-stats text, a two-stage lookup against the
//! price and upgrade tables, and grouped-digit formatting of the result.
//! Every function here is pure; tables are injected through the
//! [`PriceOracle`] and [`UpgradeOracle`] traits and never mutated.
pub mod config;
pub mod error;
pub mod format;
pub mod quote;
pub mod resolve;
pub mod tables;
pub mod tier;
pub mod validate;

pub use config::PricingConfig;
pub use error::{ErrorSeverity, PricingError};
pub use format::{CostFormatter, format_cost, group_digits};
pub use quote::{Calculator, Quote, QuoteInput, QuoteView};
pub use resolve::{BaseCost, CostResolver, CostResult};
pub use tables::{
    PriceBand, PriceEntry, PriceOracle, PriceTable, TableError, TableIssue, UpgradeEntry,
    UpgradeOracle, UpgradeTable,
};
pub use tier::{RatingTier, UpgradeLevel};
pub use validate::{
    Advisory, BASE_STATS_HELP, UPGRADE_LOCKED_HELP, ValidBaseStats, ValidationError,
    ValidationResult, validate,
};
