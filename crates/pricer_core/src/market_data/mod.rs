//! Market data structures for rates pricing.
//!
//! # Architecture
//!
//! All structures are generic over `T: Float` so the same curve serves `f64`
//! production runs and `f32` precision checks.
//!
//! # Components
//!
//! - [`curves`]: Yield curve trait and the knot-based [`DiscountCurve`]
//! - [`error`]: Market data error types ([`MarketDataError`])
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::{CurveInterpolation, DiscountCurve, YieldCurve};
//! use pricer_core::types::KeyUnit;
//!
//! let curve = DiscountCurve::new(
//!     &[0.5_f64, 1.0, 2.0],
//!     &[0.985, 0.968, 0.932],
//!     KeyUnit::Years,
//!     CurveInterpolation::LogLinear,
//! )
//! .unwrap();
//!
//! let df = curve.discount_factor(1.5).unwrap();
//! assert!(df < 0.968 && df > 0.932);
//! ```

pub mod curves;
pub mod error;

pub use curves::{CurveInterpolation, DiscountCurve, YieldCurve, BASIS_POINT};
pub use error::MarketDataError;
