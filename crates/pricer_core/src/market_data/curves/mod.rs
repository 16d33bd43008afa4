//! Discount curve abstractions.
//!
//! This module provides:
//! - [`YieldCurve`]: Generic trait for discount factor and rate calculations
//! - [`DiscountCurve`]: Knot-based curve with log-linear or step lookup and parallel bumps
//! - [`CurveInterpolation`]: Interpolation policy selection

mod discount;
mod traits;

pub use discount::{CurveInterpolation, DiscountCurve, BASIS_POINT};
pub use traits::YieldCurve;
