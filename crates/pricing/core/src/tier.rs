//! Range-bound selector values: rating tier and upgrade level.
//!
//! Both are chosen with a bounded control, so out-of-range values are
//! clamped on commit instead of being rejected.

use crate::config::PricingConfig;

/// Card rating (OVR), always inside `[70, 99]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RatingTier(u8);

impl RatingTier {
    pub const MIN: Self = Self(PricingConfig::MIN_RATING_TIER);
    pub const MAX: Self = Self(PricingConfig::MAX_RATING_TIER);
    pub const DEFAULT: Self = Self(PricingConfig::DEFAULT_RATING_TIER);

    /// Returns the tier if `value` lies inside the supported range.
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Clamps an arbitrary committed value into the supported range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8)
    }

    /// Moves the tier by `delta` steps, saturating at both ends.
    pub fn offset(self, delta: i16) -> Self {
        Self::clamped(self.0 as i64 + delta as i64)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for RatingTier {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl core::fmt::Display for RatingTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of purchased upgrade levels, always inside `[0, 5]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UpgradeLevel(u8);

impl UpgradeLevel {
    pub const NONE: Self = Self(0);
    pub const MAX: Self = Self(PricingConfig::MAX_UPGRADE_LEVEL);

    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, Self::MAX.0 as i64) as u8)
    }

    pub fn offset(self, delta: i16) -> Self {
        Self::clamped(self.0 as i64 + delta as i64)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl core::fmt::Display for UpgradeLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
