//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors surfaced by curve, instrument, pricing and scenario operations
//! - `InterpolationError`: Errors from interpolation operations

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// Every layer of the workspace reports failures through its own error type
/// and converts into `PricingError` at the boundary, so callers only need to
/// match on these four kinds (plus numerical failures).
///
/// # Variants
/// - `InvalidCurve`: Curve construction or transformation was rejected
/// - `InvalidInstrument`: Instrument parameters are inconsistent
/// - `InvalidMarketInput`: Market inputs make a pricing formula degenerate
/// - `InvalidScenario`: Scenario definition cannot be applied
/// - `NumericalInstability`: Computation produced a non-finite value
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidCurve("need at least 2 knots".to_string());
/// assert_eq!(format!("{}", err), "Invalid curve: need at least 2 knots");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Curve data violates ordering, positivity or size requirements
    InvalidCurve(String),

    /// Instrument definition is inconsistent
    InvalidInstrument(String),

    /// Market input (volatility, expiry, forward, strike, maturity) is degenerate
    InvalidMarketInput(String),

    /// Scenario cannot be applied to the base curve
    InvalidScenario(String),

    /// Numerical instability during computation
    NumericalInstability(String),
}

impl PricingError {
    /// Short, stable name of the error kind.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::PricingError;
    ///
    /// let err = PricingError::InvalidScenario("NaN shift".to_string());
    /// assert_eq!(err.kind(), "InvalidScenario");
    /// ```
    pub fn kind(&self) -> &'static str {
        match self {
            PricingError::InvalidCurve(_) => "InvalidCurve",
            PricingError::InvalidInstrument(_) => "InvalidInstrument",
            PricingError::InvalidMarketInput(_) => "InvalidMarketInput",
            PricingError::InvalidScenario(_) => "InvalidScenario",
            PricingError::NumericalInstability(_) => "NumericalInstability",
        }
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidCurve(msg) => write!(f, "Invalid curve: {}", msg),
            PricingError::InvalidInstrument(msg) => write!(f, "Invalid instrument: {}", msg),
            PricingError::InvalidMarketInput(msg) => {
                write!(f, "Invalid market input: {}", msg)
            }
            PricingError::InvalidScenario(msg) => write!(f, "Invalid scenario: {}", msg),
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Interpolation-related errors.
///
/// # Variants
/// - `OutOfBounds`: Query point outside valid interpolation domain
/// - `InsufficientData`: Not enough data points for interpolation
/// - `NonMonotonicData`: Abscissae are not strictly increasing
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use pricer_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Data is not strictly increasing when it is required to be.
    #[error("Data is not monotonic at index {index}")]
    NonMonotonicData {
        /// Index where monotonicity violation was detected
        index: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<InterpolationError> for PricingError {
    fn from(err: InterpolationError) -> Self {
        PricingError::InvalidCurve(err.to_string())
    }
}
