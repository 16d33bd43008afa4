//! Numerical building blocks.
//!
//! - [`interpolators`]: One-dimensional interpolation used by discount curves

pub mod interpolators;
