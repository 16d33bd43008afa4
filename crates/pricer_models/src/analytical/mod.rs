//! Closed-form pricing for interest rate options.
//!
//! - [`Black76Caplet`]: Black (1976) caplet price, delta and vega
//! - [`norm_cdf`] / [`norm_pdf`]: standard normal distribution helpers
//!
//! All formulas are generic over `T: Float` and validate their inputs instead
//! of propagating NaN.

pub mod black;
pub mod distributions;
pub mod error;

pub use black::{Black76Caplet, CapletGreeks, CapletValuation};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
