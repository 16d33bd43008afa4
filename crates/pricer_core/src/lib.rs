//! # pricer_core: Numeric Foundation for Rates Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Error types: `PricingError`, `InterpolationError` (`types::error`)
//! - Curve key units: `KeyUnit` (`types::time`)
//! - The generic `Float` trait (`traits`)
//! - One-dimensional interpolators (`math::interpolators`)
//! - The `YieldCurve` trait and `DiscountCurve` (`market_data`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::{CurveInterpolation, DiscountCurve, YieldCurve};
//! use pricer_core::types::KeyUnit;
//!
//! let curve = DiscountCurve::new(
//!     &[0.0_f64, 365.0, 1825.0, 3650.0],
//!     &[1.0, 0.98, 0.90, 0.82],
//!     KeyUnit::Days,
//!     CurveInterpolation::Step,
//! )
//! .unwrap();
//!
//! // Parallel +25bp shock
//! let shocked = curve.bumped(25.0).unwrap();
//! assert!(shocked.discount_factor(5.0).unwrap() < curve.discount_factor(5.0).unwrap());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `KeyUnit`, `CurveInterpolation` and `InterpolationError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod traits;
pub mod types;
