//! Cost rendering with grouped digits.

use crate::config::PricingConfig;
use crate::resolve::BaseCost;

pub const DEFAULT_FALLBACK: &str = "n/a";
pub const DEFAULT_SUFFIX: &str = " credits";

/// Inserts a comma every three digits from the right (`12500` -> `"12,500"`).
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let lead = digits.len() % 3;

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a cost, or returns `fallback` verbatim when the cost is zero.
///
/// A computed cost of exactly zero renders the same as "no data".
pub fn format_cost(value: u64, fallback: &str, suffix: &str) -> String {
    if value == 0 {
        return fallback.to_string();
    }
    format!("{}{}", group_digits(value), suffix)
}

/// Formatter carrying the configured fallback and suffix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostFormatter {
    fallback: String,
    suffix: String,
}

impl CostFormatter {
    pub fn new(fallback: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
            suffix: suffix.into(),
        }
    }

    pub fn from_config(config: &PricingConfig) -> Self {
        Self::new(config.fallback.clone(), config.suffix.clone())
    }

    pub fn format(&self, value: u64) -> String {
        format_cost(value, &self.fallback, &self.suffix)
    }

    pub fn format_base(&self, cost: BaseCost) -> String {
        match cost {
            BaseCost::Available(value) => self.format(value),
            BaseCost::Unavailable => self.fallback.clone(),
        }
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for CostFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK, DEFAULT_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_renders_fallback_without_suffix() {
        assert_eq!(format_cost(0, DEFAULT_FALLBACK, DEFAULT_SUFFIX), "n/a");
        assert_eq!(format_cost(0, "-", " cr"), "-");
    }

    #[test]
    fn small_values_have_no_separator() {
        assert_eq!(format_cost(12, DEFAULT_FALLBACK, DEFAULT_SUFFIX), "12 credits");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(7), "7");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_cost(1000, DEFAULT_FALLBACK, DEFAULT_SUFFIX), "1,000 credits");
        assert_eq!(group_digits(12_500), "12,500");
        assert_eq!(group_digits(123_456), "123,456");
        assert_eq!(group_digits(1_234_567), "1,234,567");
        assert_eq!(group_digits(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn formatter_handles_unavailable_base() {
        let formatter = CostFormatter::default();
        assert_eq!(formatter.format_base(BaseCost::Unavailable), "n/a");
        assert_eq!(formatter.format_base(BaseCost::Available(45_000)), "45,000 credits");
    }

    #[test]
    fn formatter_uses_config() {
        let config = PricingConfig::new().with_fallback("--").with_suffix(" cr");
        let formatter = CostFormatter::from_config(&config);
        assert_eq!(formatter.format(2_000), "2,000 cr");
        assert_eq!(formatter.format(0), "--");
        assert_eq!(formatter.fallback(), "--");
    }
}
