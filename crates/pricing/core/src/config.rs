use crate::format::{DEFAULT_FALLBACK, DEFAULT_SUFFIX};

/// Pricing constants and tunable display parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingConfig {
    /// Rating tier the calculator starts on.
    pub default_rating_tier: u8,
    /// Text rendered in place of a cost that is zero or unavailable.
    pub fallback: String,
    /// Text appended to every formatted cost.
    pub suffix: String,
}

impl PricingConfig {
    // ===== domain bounds =====
    pub const MIN_RATING_TIER: u8 = 70;
    pub const MAX_RATING_TIER: u8 = 99;
    pub const MIN_BASE_STATS: u16 = 251;
    pub const MAX_BASE_STATS: u16 = 594;
    /// Lowest base-stats total that can carry upgrade pricing.
    pub const UPGRADE_UNLOCK_BASE_STATS: u16 = 400;
    pub const MAX_UPGRADE_LEVEL: u8 = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_RATING_TIER: u8 = 90;

    pub fn new() -> Self {
        Self {
            default_rating_tier: Self::DEFAULT_RATING_TIER,
            fallback: DEFAULT_FALLBACK.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_default_rating_tier(mut self, tier: u8) -> Self {
        self.default_rating_tier = tier;
        self
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::new()
    }
}
