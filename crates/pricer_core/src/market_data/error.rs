//! Market data error types.
//!
//! Structured errors for discount curve construction, queries and shifts.

use crate::types::{InterpolationError, PricingError};
use thiserror::Error;

/// Market data operation errors.
///
/// # Variants
///
/// - `InsufficientData`: Fewer than two knots
/// - `LengthMismatch`: Keys and discount factors differ in length
/// - `InvalidKey`: Negative or non-finite knot key
/// - `NonIncreasingKeys`: Knot keys not strictly increasing
/// - `InvalidDiscountFactor`: Non-positive or non-finite discount factor
/// - `InvalidMaturity`: Query time negative, non-finite, or zero where a rate is requested
/// - `InvalidShift`: Parallel shift is not finite
/// - `Interpolation`: Wrapped interpolation error
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidMaturity { t: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Insufficient knots for construction.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of knots provided
        got: usize,
        /// Minimum number of knots required
        need: usize,
    },

    /// Keys and discount factors differ in length.
    #[error("Length mismatch: {keys} keys, {values} discount factors")]
    LengthMismatch {
        /// Number of keys
        keys: usize,
        /// Number of discount factors
        values: usize,
    },

    /// Negative or non-finite key.
    #[error("Invalid key at index {index}: {key}")]
    InvalidKey {
        /// Knot index
        index: usize,
        /// Offending key
        key: f64,
    },

    /// Keys not strictly increasing.
    #[error("Keys must be strictly increasing: violation at index {index}")]
    NonIncreasingKeys {
        /// Index of the first key not greater than its predecessor
        index: usize,
    },

    /// Non-positive or non-finite discount factor.
    #[error("Invalid discount factor at index {index}: {df}")]
    InvalidDiscountFactor {
        /// Knot index
        index: usize,
        /// Offending discount factor
        df: f64,
    },

    /// Invalid maturity.
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The invalid maturity value
        t: f64,
    },

    /// Parallel shift is not finite.
    #[error("Invalid shift: {shift_bp} bp")]
    InvalidShift {
        /// The shift in basis points
        shift_bp: f64,
    },

    /// Interpolation error.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::InvalidMaturity { .. } => {
                PricingError::InvalidMarketInput(err.to_string())
            }
            MarketDataError::InvalidShift { .. } => PricingError::InvalidScenario(err.to_string()),
            _ => PricingError::InvalidCurve(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_maturity_display() {
        let err = MarketDataError::InvalidMaturity { t: -1.5 };
        assert_eq!(format!("{}", err), "Invalid maturity: t = -1.5");
    }

    #[test]
    fn test_insufficient_data_display() {
        let err = MarketDataError::InsufficientData { got: 1, need: 2 };
        assert_eq!(format!("{}", err), "Insufficient data: got 1, need 2");
    }

    #[test]
    fn test_invalid_discount_factor_display() {
        let err = MarketDataError::InvalidDiscountFactor { index: 2, df: -0.5 };
        assert_eq!(
            format!("{}", err),
            "Invalid discount factor at index 2: -0.5"
        );
    }

    #[test]
    fn test_from_interpolation_error() {
        let interp_err = InterpolationError::InsufficientData { got: 1, need: 2 };
        let err: MarketDataError = interp_err.into();
        assert!(matches!(err, MarketDataError::Interpolation(_)));
    }

    #[test]
    fn test_conversion_to_pricing_error_kinds() {
        let curve: PricingError = MarketDataError::NonIncreasingKeys { index: 1 }.into();
        assert!(matches!(curve, PricingError::InvalidCurve(_)));

        let maturity: PricingError = MarketDataError::InvalidMaturity { t: -1.0 }.into();
        assert!(matches!(maturity, PricingError::InvalidMarketInput(_)));

        let shift: PricingError = MarketDataError::InvalidShift {
            shift_bp: f64::NAN,
        }
        .into();
        assert!(matches!(shift, PricingError::InvalidScenario(_)));
    }
}
