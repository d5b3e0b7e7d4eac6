//! Static price and upgrade tables and the oracle traits that expose them.
//!
//! Tables are built once from external data and never mutated. The
//! resolver only sees them through [`PriceOracle`] and [`UpgradeOracle`],
//! so alternative sources (fixtures, snapshots) can be swapped in freely.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{ErrorSeverity, PricingError};
use crate::tier::RatingTier;

/// Oracle providing base card cost for a (tier, base stats) pair.
pub trait PriceOracle: Send + Sync {
    /// Returns the base cost, or `None` when no price data covers the pair.
    fn base_cost(&self, tier: RatingTier, base_stats: u16) -> Option<u64>;
}

/// Oracle providing the per-level upgrade increment for a base-stats value.
pub trait UpgradeOracle: Send + Sync {
    /// Returns the per-level cost, or `None` when the value has no entry.
    fn per_level_cost(&self, base_stats: u16) -> Option<u64>;
}

impl<T: PriceOracle + ?Sized> PriceOracle for &T {
    fn base_cost(&self, tier: RatingTier, base_stats: u16) -> Option<u64> {
        (**self).base_cost(tier, base_stats)
    }
}

impl<T: PriceOracle + ?Sized> PriceOracle for Arc<T> {
    fn base_cost(&self, tier: RatingTier, base_stats: u16) -> Option<u64> {
        (**self).base_cost(tier, base_stats)
    }
}

impl<T: UpgradeOracle + ?Sized> UpgradeOracle for &T {
    fn per_level_cost(&self, base_stats: u16) -> Option<u64> {
        (**self).per_level_cost(base_stats)
    }
}

impl<T: UpgradeOracle + ?Sized> UpgradeOracle for Arc<T> {
    fn per_level_cost(&self, base_stats: u16) -> Option<u64> {
        (**self).per_level_cost(base_stats)
    }
}

/// One row of the price table: `(tier, min, max) -> cost`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceEntry {
    pub rating_tier: u8,
    pub min_inclusive: u16,
    pub max_inclusive: u16,
    pub base_cost: u64,
}

impl PriceEntry {
    pub const fn new(rating_tier: u8, min_inclusive: u16, max_inclusive: u16, base_cost: u64) -> Self {
        Self {
            rating_tier,
            min_inclusive,
            max_inclusive,
            base_cost,
        }
    }
}

/// Base-stats range priced at a single cost within one tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceBand {
    pub min_inclusive: u16,
    pub max_inclusive: u16,
    pub base_cost: u64,
}

impl PriceBand {
    pub const fn contains(&self, base_stats: u16) -> bool {
        base_stats >= self.min_inclusive && base_stats <= self.max_inclusive
    }
}

/// One row of the upgrade table, keyed by an exact base-stats value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeEntry {
    pub base_stats: u16,
    pub per_level_cost: u64,
}

impl UpgradeEntry {
    pub const fn new(base_stats: u16, per_level_cost: u64) -> Self {
        Self {
            base_stats,
            per_level_cost,
        }
    }
}

/// Errors raised while building a table from raw entries.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("tier {tier} has inverted band {min}..={max}")]
    InvertedBand { tier: u8, min: u16, max: u16 },
}

impl PricingError for TableError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvertedBand { .. } => "TABLE_INVERTED_BAND",
        }
    }
}

/// Coverage defect found by [`PriceTable::audit`].
///
/// Bands of one tier should partition the priced domain. Defects are
/// reported, not rejected: lookup still takes the first matching band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableIssue {
    /// Values in `from..=to` have no band for this tier.
    Gap { tier: u8, from: u16, to: u16 },
    /// Values in `from..=to` are covered by more than one band.
    Overlap { tier: u8, from: u16, to: u16 },
}

impl core::fmt::Display for TableIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Gap { tier, from, to } => write!(f, "tier {tier}: no price for {from}..={to}"),
            Self::Overlap { tier, from, to } => {
                write!(f, "tier {tier}: overlapping prices for {from}..={to}")
            }
        }
    }
}

/// Price table keyed by tier, with bands kept in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PriceTable {
    tiers: BTreeMap<u8, Vec<PriceBand>>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from entries, preserving their order within each tier.
    pub fn from_entries(entries: impl IntoIterator<Item = PriceEntry>) -> Result<Self, TableError> {
        let mut table = Self::new();
        for entry in entries {
            table.insert(entry)?;
        }
        Ok(table)
    }

    /// Appends an entry after any existing bands of the same tier.
    pub fn insert(&mut self, entry: PriceEntry) -> Result<(), TableError> {
        if entry.min_inclusive > entry.max_inclusive {
            return Err(TableError::InvertedBand {
                tier: entry.rating_tier,
                min: entry.min_inclusive,
                max: entry.max_inclusive,
            });
        }

        self.tiers.entry(entry.rating_tier).or_default().push(PriceBand {
            min_inclusive: entry.min_inclusive,
            max_inclusive: entry.max_inclusive,
            base_cost: entry.base_cost,
        });
        Ok(())
    }

    /// First band of `tier` containing `base_stats`, if any.
    pub fn lookup(&self, tier: u8, base_stats: u16) -> Option<&PriceBand> {
        self.tiers
            .get(&tier)?
            .iter()
            .find(|band| band.contains(base_stats))
    }

    pub fn bands(&self, tier: u8) -> Option<&[PriceBand]> {
        self.tiers.get(&tier).map(Vec::as_slice)
    }

    pub fn tiers(&self) -> impl Iterator<Item = u8> + '_ {
        self.tiers.keys().copied()
    }

    /// Total number of bands across all tiers.
    pub fn len(&self) -> usize {
        self.tiers.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.values().all(Vec::is_empty)
    }

    /// Reports gaps and overlaps of every tier against the domain `min..=max`.
    pub fn audit(&self, min: u16, max: u16) -> Vec<TableIssue> {
        let mut issues = Vec::new();
        for (&tier, bands) in &self.tiers {
            audit_tier(tier, bands, min, max, &mut issues);
        }
        issues
    }
}

fn audit_tier(tier: u8, bands: &[PriceBand], min: u16, max: u16, issues: &mut Vec<TableIssue>) {
    let mut sorted = bands.to_vec();
    sorted.sort_by_key(|band| (band.min_inclusive, band.max_inclusive));

    let domain_max = max as u32;
    // first value not yet covered by any band
    let mut next = min as u32;
    let mut covered_to: Option<u32> = None;

    for band in sorted {
        let lo = band.min_inclusive as u32;
        let hi = band.max_inclusive as u32;

        if let Some(prev) = covered_to.filter(|&prev| lo <= prev) {
            issues.push(TableIssue::Overlap {
                tier,
                from: lo as u16,
                to: hi.min(prev) as u16,
            });
        }

        if lo > next && next <= domain_max {
            issues.push(TableIssue::Gap {
                tier,
                from: next as u16,
                to: (lo - 1).min(domain_max) as u16,
            });
        }

        next = next.max(hi + 1);
        covered_to = Some(covered_to.map_or(hi, |prev| prev.max(hi)));
    }

    if next <= domain_max {
        issues.push(TableIssue::Gap {
            tier,
            from: next as u16,
            to: max,
        });
    }
}

impl PriceOracle for PriceTable {
    fn base_cost(&self, tier: RatingTier, base_stats: u16) -> Option<u64> {
        self.lookup(tier.get(), base_stats).map(|band| band.base_cost)
    }
}

/// Sparse upgrade table keyed by exact base-stats value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpgradeTable {
    entries: BTreeMap<u16, u64>,
}

impl UpgradeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from entries; on duplicate keys the first entry wins.
    pub fn from_entries(entries: impl IntoIterator<Item = UpgradeEntry>) -> Self {
        let mut table = Self::new();
        for entry in entries {
            table
                .entries
                .entry(entry.base_stats)
                .or_insert(entry.per_level_cost);
        }
        table
    }

    pub fn get(&self, base_stats: u16) -> Option<u64> {
        self.entries.get(&base_stats).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl UpgradeOracle for UpgradeTable {
    fn per_level_cost(&self, base_stats: u16) -> Option<u64> {
        self.get(base_stats)
    }
}
