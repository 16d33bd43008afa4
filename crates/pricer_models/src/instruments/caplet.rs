//! Single-period interest rate caplet.

use num_traits::Float;
use pricer_core::market_data::YieldCurve;
use pricer_core::types::PricingError;

use super::error::InstrumentError;
use super::traits::{Cashflow, Valuable};
use crate::analytical::Black76Caplet;

/// Caplet on a forward rate, valued with the Black model.
///
/// Forward, strike and accrual are checked at construction. Expiry and
/// volatility are market inputs and are checked on every pricing call, so a
/// caplet with zero volatility can be built but not priced.
///
/// A caplet has no deterministic cashflow schedule; [`Valuable::cashflows`]
/// returns an empty vector and [`Valuable::npv`] is the Black price.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::Caplet;
///
/// let caplet = Caplet::new(2.0_f64, 0.037, 0.04, 0.25, 0.5).unwrap();
/// assert_eq!(caplet.strike(), 0.04);
///
/// assert!(Caplet::new(2.0_f64, 0.037, 0.0, 0.25, 0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Caplet<T: Float> {
    expiry: T,
    forward: T,
    strike: T,
    volatility: T,
    accrual: T,
}

impl<T: Float> Caplet<T> {
    /// Creates a caplet.
    ///
    /// # Arguments
    ///
    /// * `expiry` - Fixing time in years (T)
    /// * `forward` - Forward rate (F)
    /// * `strike` - Strike rate (K)
    /// * `volatility` - Black volatility (σ)
    /// * `accrual` - Accrual year fraction (τ)
    ///
    /// # Errors
    ///
    /// - `InvalidForward` if `forward <= 0` or not finite
    /// - `InvalidStrike` if `strike <= 0` or not finite
    /// - `InvalidAccrual` if `accrual <= 0` or not finite
    pub fn new(
        expiry: T,
        forward: T,
        strike: T,
        volatility: T,
        accrual: T,
    ) -> Result<Self, InstrumentError> {
        if !is_positive(forward) {
            return Err(InstrumentError::InvalidForward {
                forward: to_f64(forward),
            });
        }
        if !is_positive(strike) {
            return Err(InstrumentError::InvalidStrike {
                strike: to_f64(strike),
            });
        }
        if !is_positive(accrual) {
            return Err(InstrumentError::InvalidAccrual {
                accrual: to_f64(accrual),
            });
        }

        Ok(Self {
            expiry,
            forward,
            strike,
            volatility,
            accrual,
        })
    }

    /// Fixing time in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Forward rate.
    #[inline]
    pub fn forward(&self) -> T {
        self.forward
    }

    /// Strike rate.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Black volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Accrual year fraction.
    #[inline]
    pub fn accrual(&self) -> T {
        self.accrual
    }

    /// Undiscounted payoff at the current forward: `τ * max(F - K, 0)`.
    #[inline]
    pub fn intrinsic_value(&self) -> T {
        self.accrual * (self.forward - self.strike).max(T::zero())
    }
}

impl<T: Float> Valuable<T> for Caplet<T> {
    fn cashflows(&self) -> Vec<Cashflow<T>> {
        Vec::new()
    }

    fn npv<C: YieldCurve<T>>(&self, curve: &C) -> Result<T, PricingError> {
        Ok(Black76Caplet::price(curve, self)?)
    }

    fn type_name(&self) -> &'static str {
        "Caplet"
    }
}

#[inline]
fn is_positive<T: Float>(x: T) -> bool {
    x.is_finite() && x > T::zero()
}

#[inline]
fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
