//! Instrument trait definitions.
//!
//! [`Valuable`] is the single capability the risk engine relies on: report
//! cashflows and a present value against a discount curve.
//!
//! # Design Philosophy
//!
//! The trait is used through static dispatch ([`Instrument`](super::Instrument)
//! enum). Do NOT use `Box<dyn Valuable>`.

use num_traits::Float;
use pricer_core::market_data::YieldCurve;
use pricer_core::types::PricingError;

/// Anything that can be valued against a discount curve.
///
/// # Type Parameters
///
/// * `T` - Floating-point type implementing `Float`
///
/// # Required Methods
///
/// - [`cashflows`](Valuable::cashflows) - Deterministic payment schedule (may be empty)
/// - [`npv`](Valuable::npv) - Present value under the given curve
///
/// # Provided Methods
///
/// - [`type_name`](Valuable::type_name) - Label for logs and reports
/// - [`total_cashflow`](Valuable::total_cashflow) - Undiscounted sum of amounts
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::{MarketDataError, YieldCurve};
/// use pricer_core::types::PricingError;
/// use pricer_models::instruments::{Cashflow, Valuable};
/// use num_traits::Float;
///
/// struct ZeroCoupon<T: Float> {
///     maturity: T,
/// }
///
/// impl<T: Float> Valuable<T> for ZeroCoupon<T> {
///     fn cashflows(&self) -> Vec<Cashflow<T>> {
///         vec![Cashflow::new(self.maturity, T::one())]
///     }
///
///     fn npv<C: YieldCurve<T>>(&self, curve: &C) -> Result<T, PricingError> {
///         Ok(curve.discount_factor(self.maturity)?)
///     }
/// }
///
/// struct Flat(f64);
///
/// impl YieldCurve<f64> for Flat {
///     fn discount_factor(&self, t: f64) -> Result<f64, MarketDataError> {
///         Ok((-self.0 * t).exp())
///     }
/// }
///
/// let zcb = ZeroCoupon { maturity: 2.0_f64 };
/// assert!((zcb.npv(&Flat(0.03)).unwrap() - (-0.06_f64).exp()).abs() < 1e-15);
/// ```
pub trait Valuable<T: Float> {
    /// Return the scheduled cashflows, ordered by payment time.
    ///
    /// Produced on demand and independent of any curve.
    fn cashflows(&self) -> Vec<Cashflow<T>>;

    /// Return the present value under `curve`.
    fn npv<C: YieldCurve<T>>(&self, curve: &C) -> Result<T, PricingError>;

    /// Return a human-readable instrument type name.
    ///
    /// Used for logging and error messages.
    fn type_name(&self) -> &'static str {
        "Unknown"
    }

    /// Return the undiscounted sum of all cashflow amounts.
    #[inline]
    fn total_cashflow(&self) -> T {
        self.cashflows()
            .iter()
            .fold(T::zero(), |acc, cf| acc + cf.amount)
    }
}

/// A single dated payment.
///
/// # Type Parameters
///
/// * `T` - Floating-point type implementing `Float`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cashflow<T: Float> {
    /// Payment time in years from the valuation date.
    pub time: T,
    /// Cashflow amount (positive = receive).
    pub amount: T,
}

impl<T: Float> Cashflow<T> {
    /// Create a new cashflow.
    #[inline]
    pub fn new(time: T, amount: T) -> Self {
        Self { time, amount }
    }

    /// Return the present value of this cashflow given a discount factor.
    #[inline]
    pub fn present_value(&self, discount_factor: T) -> T {
        self.amount * discount_factor
    }
}
