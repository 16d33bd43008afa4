//! Financial instrument definitions.
//!
//! # Architecture
//!
//! Uses enum dispatch (NOT trait objects):
//! - [`Instrument<T>`] wraps every instrument type and implements [`Valuable`]
//! - All types generic over `T: Float`
//!
//! # Instrument Types
//!
//! - [`Bond`]: Fixed-coupon bullet bond with a generated cashflow schedule
//! - [`Caplet`]: Single-period caplet priced with the Black model
//!
//! # Examples
//!
//! ```
//! use pricer_core::market_data::{CurveInterpolation, DiscountCurve};
//! use pricer_core::types::KeyUnit;
//! use pricer_models::instruments::{Bond, Caplet, Instrument, Valuable};
//!
//! let curve = DiscountCurve::new(
//!     &[0.0_f64, 365.0, 1825.0, 3650.0],
//!     &[1.0, 0.98, 0.90, 0.82],
//!     KeyUnit::Days,
//!     CurveInterpolation::Step,
//! )
//! .unwrap();
//!
//! let portfolio: Vec<Instrument<f64>> = vec![
//!     Bond::new(0.03, 5.0, 2).unwrap().into(),
//!     Caplet::new(2.0, 0.037, 0.04, 0.25, 0.5).unwrap().into(),
//! ];
//!
//! let total: f64 = portfolio.iter().map(|i| i.npv(&curve).unwrap()).sum();
//! assert!(total > 103.74);
//! ```

mod bond;
mod caplet;
mod error;
mod traits;

pub use bond::{Bond, DEFAULT_FACE_VALUE, MAX_PERIODS};
pub use caplet::Caplet;
pub use error::InstrumentError;
pub use traits::{Cashflow, Valuable};

use num_traits::Float;
use pricer_core::market_data::YieldCurve;
use pricer_core::types::PricingError;

/// Closed set of valuable instruments.
///
/// The risk engine only ever calls [`Valuable`] methods on this enum; it
/// never inspects the variant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Instrument<T: Float> {
    /// Fixed-coupon bond
    Bond(Bond<T>),
    /// Black-model caplet
    Caplet(Caplet<T>),
}

impl<T: Float> Instrument<T> {
    /// Final payment time (bond) or fixing time (caplet) in years.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::{Bond, Instrument};
    ///
    /// let bond: Instrument<f64> = Bond::new(0.04, 10.0, 2).unwrap().into();
    /// assert_eq!(bond.maturity(), 10.0);
    /// ```
    #[inline]
    pub fn maturity(&self) -> T {
        match self {
            Instrument::Bond(bond) => bond.maturity(),
            Instrument::Caplet(caplet) => caplet.expiry(),
        }
    }

    /// Returns the bond if this is a bond.
    #[inline]
    pub fn as_bond(&self) -> Option<&Bond<T>> {
        match self {
            Instrument::Bond(bond) => Some(bond),
            _ => None,
        }
    }

    /// Returns the caplet if this is a caplet.
    #[inline]
    pub fn as_caplet(&self) -> Option<&Caplet<T>> {
        match self {
            Instrument::Caplet(caplet) => Some(caplet),
            _ => None,
        }
    }
}

impl<T: Float> Valuable<T> for Instrument<T> {
    #[inline]
    fn cashflows(&self) -> Vec<Cashflow<T>> {
        match self {
            Instrument::Bond(bond) => bond.cashflows(),
            Instrument::Caplet(caplet) => caplet.cashflows(),
        }
    }

    #[inline]
    fn npv<C: YieldCurve<T>>(&self, curve: &C) -> Result<T, PricingError> {
        match self {
            Instrument::Bond(bond) => bond.npv(curve),
            Instrument::Caplet(caplet) => caplet.npv(curve),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Instrument::Bond(bond) => bond.type_name(),
            Instrument::Caplet(caplet) => caplet.type_name(),
        }
    }
}

impl<T: Float> From<Bond<T>> for Instrument<T> {
    fn from(bond: Bond<T>) -> Self {
        Instrument::Bond(bond)
    }
}

impl<T: Float> From<Caplet<T>> for Instrument<T> {
    fn from(caplet: Caplet<T>) -> Self {
        Instrument::Caplet(caplet)
    }
}
