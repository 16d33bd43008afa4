//! Instrument error types.
//!
//! Structured errors for instrument construction. Every variant maps to
//! [`PricingError::InvalidInstrument`].

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidFrequency`: Zero payments per year
/// - `InvalidTenor`: Non-positive tenor, or tenor not a whole number of periods
/// - `InvalidCoupon`: Negative or non-finite coupon rate
/// - `InvalidFaceValue`: Non-positive face value
/// - `InvalidForward`: Non-positive forward rate
/// - `InvalidStrike`: Non-positive strike
/// - `InvalidAccrual`: Non-positive accrual fraction
/// - `InvalidParameter`: General parameter validation failure
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -0.01 };
/// assert!(format!("{}", err).contains("-0.01"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Zero payments per year.
    #[error("Invalid frequency: {frequency} payments per year")]
    InvalidFrequency {
        /// The invalid frequency
        frequency: u32,
    },

    /// Tenor is non-positive or not a whole number of coupon periods.
    #[error("Invalid tenor: {tenor} years at {frequency} payments per year")]
    InvalidTenor {
        /// Tenor in years
        tenor: f64,
        /// Payments per year
        frequency: u32,
    },

    /// Negative or non-finite coupon rate.
    #[error("Invalid coupon rate: c = {coupon}")]
    InvalidCoupon {
        /// The invalid coupon rate
        coupon: f64,
    },

    /// Non-positive face value.
    #[error("Invalid face value: {face_value}")]
    InvalidFaceValue {
        /// The invalid face value
        face_value: f64,
    },

    /// Non-positive forward rate.
    #[error("Invalid forward: F = {forward}")]
    InvalidForward {
        /// The invalid forward value
        forward: f64,
    },

    /// Non-positive strike.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Non-positive accrual fraction.
    #[error("Invalid accrual: tau = {accrual}")]
    InvalidAccrual {
        /// The invalid accrual value
        accrual: f64,
    },

    /// Invalid parameter (general validation failure).
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the parameter error
        message: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInstrument(err.to_string())
    }
}
