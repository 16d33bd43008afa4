//! Core numeric and time types.
//!
//! This module provides:
//! - `time`: Curve key units (years or days) and the Actual/365 conversion
//! - `error`: Structured error types for pricing and interpolation operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`KeyUnit`], [`DAYS_PER_YEAR`] from `time`
//! - [`PricingError`], [`InterpolationError`] from `error`

pub mod error;
pub mod time;

pub use error::{InterpolationError, PricingError};
pub use time::{KeyUnit, DAYS_PER_YEAR};
