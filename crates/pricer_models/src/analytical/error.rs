//! Error types for analytical pricing operations.

use pricer_core::market_data::MarketDataError;
use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Raised per pricing call when market inputs make the Black formula
/// degenerate. All variants except `Curve` and `NumericalInstability` map to
/// [`PricingError::InvalidMarketInput`].
///
/// # Variants
/// - `InvalidVolatility`: Non-positive or non-finite volatility
/// - `InvalidExpiry`: Non-positive or non-finite time to expiry
/// - `InvalidForward`: Non-positive or non-finite forward rate
/// - `InvalidStrike`: Non-positive or non-finite strike
/// - `Curve`: Discount factor lookup failed
/// - `NumericalInstability`: Result is not finite
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid time to expiry.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid forward rate.
    #[error("Invalid forward: F = {forward}")]
    InvalidForward {
        /// The invalid forward value
        forward: f64,
    },

    /// Invalid strike.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Discount factor lookup failed.
    #[error("Curve error: {0}")]
    Curve(#[from] MarketDataError),

    /// Numerical instability during computation.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::Curve(inner) => inner.into(),
            AnalyticalError::NumericalInstability { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
            _ => PricingError::InvalidMarketInput(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: 0.0 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = 0");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = AnalyticalError::InvalidExpiry { expiry: -0.5 };
        assert_eq!(format!("{}", err), "Invalid expiry: T = -0.5");
    }

    #[test]
    fn test_market_input_conversion() {
        let errors = [
            AnalyticalError::InvalidVolatility { volatility: 0.0 },
            AnalyticalError::InvalidExpiry { expiry: 0.0 },
            AnalyticalError::InvalidForward { forward: -0.01 },
            AnalyticalError::InvalidStrike { strike: 0.0 },
        ];

        for err in errors {
            let pricing: PricingError = err.into();
            assert!(matches!(pricing, PricingError::InvalidMarketInput(_)));
        }
    }

    #[test]
    fn test_curve_error_keeps_curve_kind() {
        let err: AnalyticalError = MarketDataError::InsufficientData { got: 1, need: 2 }.into();
        let pricing: PricingError = err.into();
        assert!(matches!(pricing, PricingError::InvalidCurve(_)));
    }

    #[test]
    fn test_numerical_instability_conversion() {
        let err = AnalyticalError::NumericalInstability {
            message: "price is NaN".to_string(),
        };
        let pricing: PricingError = err.into();
        assert!(matches!(pricing, PricingError::NumericalInstability(_)));
    }
}
