//! Yield curve trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Generic yield curve trait for discount factor and rate queries.
///
/// All times are year fractions. Implementations only need to provide
/// [`discount_factor`](Self::discount_factor); zero and forward rates are
/// derived from it with continuous compounding.
///
/// # Contract
///
/// - `discount_factor(t)` fails with `InvalidMaturity` for negative or NaN `t`
/// - `zero_rate(t)` fails with `InvalidMaturity` for `t <= 0`
/// - `forward_rate(t1, t2)` fails with `InvalidMaturity` unless `t2 > t1`
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{CurveInterpolation, DiscountCurve, YieldCurve};
/// use pricer_core::types::KeyUnit;
///
/// let curve = DiscountCurve::new(
///     &[1.0_f64, 2.0],
///     &[(-0.05_f64).exp(), (-0.10_f64).exp()],
///     KeyUnit::Years,
///     CurveInterpolation::LogLinear,
/// )
/// .unwrap();
///
/// let rate = curve.zero_rate(2.0).unwrap();
/// assert!((rate - 0.05).abs() < 1e-12);
///
/// let fwd = curve.forward_rate(1.0, 2.0).unwrap();
/// assert!((fwd - 0.05).abs() < 1e-12);
/// ```
pub trait YieldCurve<T: Float> {
    /// Return the discount factor for maturity `t` (years, `t >= 0`).
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError>;

    /// Return the continuously compounded zero rate for maturity `t`.
    ///
    /// ```text
    /// r(t) = -ln(D(t)) / t
    /// ```
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if !(t > T::zero()) {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        let df = self.discount_factor(t)?;
        Ok(-df.ln() / t)
    }

    /// Return the continuously compounded forward rate between `t1` and `t2`.
    ///
    /// ```text
    /// f(t1, t2) = -ln(D(t2) / D(t1)) / (t2 - t1)
    /// ```
    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        let dt = t2 - t1;
        if !(dt > T::zero()) {
            return Err(MarketDataError::InvalidMaturity {
                t: dt.to_f64().unwrap_or(f64::NAN),
            });
        }
        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;
        Ok(-(df2 / df1).ln() / dt)
    }
}
