//! Common error infrastructure for pricing-core.
//!
//! Domain-specific errors (`ValidationError`, `TableError`) live next to the
//! code that produces them. This module only provides the shared severity
//! classification and the trait tying them together.
//!
//! Nothing in the calculator pipeline is fatal: hard validation failures
//! block the cost display, advisories only disable upgrade pricing. The
//! `Fatal` class is reserved for malformed table data at load time.

/// Severity level of an error, used to decide how the front-end reacts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Informational; pricing proceeds with reduced features.
    ///
    /// Example: base stats too low to unlock upgrades.
    Advisory,

    /// Invalid user input; the cost is reported as unavailable.
    ///
    /// Examples: non-integer text, base stats outside the priced domain.
    Validation,

    /// Static data is unusable and the calculator cannot be built.
    ///
    /// Example: a price band whose lower bound exceeds its upper bound.
    Fatal,
}

impl ErrorSeverity {
    /// Returns true if an error of this severity suppresses the base cost.
    pub const fn blocks_pricing(&self) -> bool {
        matches!(self, Self::Validation | Self::Fatal)
    }
}

/// Common trait for all pricing-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity by effect on pricing, not by how rare the error is
pub trait PricingError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_advisories_let_pricing_through() {
        assert!(!ErrorSeverity::Advisory.blocks_pricing());
        assert!(ErrorSeverity::Validation.blocks_pricing());
        assert!(ErrorSeverity::Fatal.blocks_pricing());
    }

    #[test]
    fn severity_renders_snake_case() {
        assert_eq!(ErrorSeverity::Validation.to_string(), "validation");
        assert_eq!(ErrorSeverity::Advisory.as_ref(), "advisory");
    }
}
