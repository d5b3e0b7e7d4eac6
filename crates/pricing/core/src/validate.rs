//! Base-stats text validation.
//!
//! Raw text from the input field is parsed into an integer and checked
//! against the priced domain `[251, 594]`. A valid value below the upgrade
//! threshold still prices normally but carries an [`Advisory`].

use core::num::IntErrorKind;

use crate::config::PricingConfig;
use crate::error::{ErrorSeverity, PricingError};

/// Help text shown for every hard validation failure.
pub const BASE_STATS_HELP: &str = "Should be an integer between 251 and 594 (both inclusive)";

/// Help text shown when base stats are valid but too low for upgrades.
pub const UPGRADE_LOCKED_HELP: &str = "Needs to be higher than 399 to unlock upgrade level";

/// Hard validation failure. Blocks the cost display entirely.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Text is not an integer (fractional, exponent, empty, or not a number).
    #[error("base stats must be a whole number")]
    InvalidFormat,

    /// Integer lies outside `[251, 594]`.
    #[error("base stats {value} outside 251..=594")]
    OutOfRange { value: i64 },
}

impl ValidationError {
    /// User-facing helper text for the input field.
    pub const fn help_text(&self) -> &'static str {
        BASE_STATS_HELP
    }
}

impl PricingError for ValidationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "VALIDATION_INVALID_FORMAT",
            Self::OutOfRange { .. } => "VALIDATION_OUT_OF_RANGE",
        }
    }
}

/// Non-fatal notice attached to a valid value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Advisory {
    /// Value is valid for base pricing but below the upgrade threshold.
    #[error("{}", UPGRADE_LOCKED_HELP)]
    UpgradeLocked,
}

impl PricingError for Advisory {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Advisory
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UpgradeLocked => "ADVISORY_UPGRADE_LOCKED",
        }
    }
}

/// Base-stats total that passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidBaseStats {
    value: u16,
    upgrade_eligible: bool,
}

impl ValidBaseStats {
    /// Builds a validated value from an integer already known to be in range.
    fn from_in_range(value: u16) -> Self {
        Self {
            value,
            upgrade_eligible: (PricingConfig::UPGRADE_UNLOCK_BASE_STATS
                ..=PricingConfig::MAX_BASE_STATS)
                .contains(&value),
        }
    }

    pub const fn value(&self) -> u16 {
        self.value
    }

    /// True if upgrade pricing applies to this value.
    pub const fn upgrade_eligible(&self) -> bool {
        self.upgrade_eligible
    }

    /// Advisory for values that price normally but cannot be upgraded.
    pub const fn advisory(&self) -> Option<Advisory> {
        if self.upgrade_eligible {
            None
        } else {
            Some(Advisory::UpgradeLocked)
        }
    }
}

pub type ValidationResult = Result<ValidBaseStats, ValidationError>;

/// Validates raw base-stats text.
///
/// Accepts surrounding whitespace, an optional sign, and a fractional part
/// made only of zeros (`"532.0"`). Exponents, hex, `NaN`, and empty text are
/// rejected as [`ValidationError::InvalidFormat`].
pub fn validate(raw: &str) -> ValidationResult {
    let value = parse_integer(raw)?;

    let min = PricingConfig::MIN_BASE_STATS as i64;
    let max = PricingConfig::MAX_BASE_STATS as i64;
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfRange { value });
    }

    // Bounds checked above, so the cast cannot truncate.
    Ok(ValidBaseStats::from_in_range(value as u16))
}

fn parse_integer(raw: &str) -> Result<i64, ValidationError> {
    let text = raw.trim();
    let (integral, fraction) = match text.split_once('.') {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (text, None),
    };

    if fraction.is_some_and(|f| !f.bytes().all(|b| b == b'0')) {
        return Err(ValidationError::InvalidFormat);
    }

    let digits = integral.strip_prefix(['+', '-']).unwrap_or(integral);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat);
    }

    integral.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => ValidationError::OutOfRange { value: i64::MAX },
        IntErrorKind::NegOverflow => ValidationError::OutOfRange { value: i64::MIN },
        _ => ValidationError::InvalidFormat,
    })
}
