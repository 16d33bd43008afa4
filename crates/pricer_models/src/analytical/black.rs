//! Black (1976) model for caplets.
//!
//! ## Mathematical Formulas
//!
//! **Price**: V = D(T)·τ·(F·N(d₁) - K·N(d₂))
//! **Delta**: ∂V/∂F = D(T)·τ·N(d₁)
//! **Vega**: ∂V/∂σ = D(T)·τ·F·√T·φ(d₁)
//!
//! Where:
//! - d₁ = (ln(F/K) + σ²T/2) / (σ√T)
//! - d₂ = d₁ - σ√T

use num_traits::Float;
use pricer_core::market_data::YieldCurve;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::Caplet;

/// First-order caplet sensitivities.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapletGreeks<T: Float> {
    /// Sensitivity to the forward rate.
    pub delta: T,
    /// Sensitivity to the Black volatility.
    pub vega: T,
}

/// Price and Greeks from a single evaluation of the Black formula.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapletValuation<T: Float> {
    /// Discounted caplet premium.
    pub price: T,
    /// Sensitivity to the forward rate.
    pub delta: T,
    /// Sensitivity to the Black volatility.
    pub vega: T,
}

/// Stateless Black-76 caplet pricer.
///
/// Every call validates the market inputs and fails with an
/// [`AnalyticalError`] instead of returning NaN or infinity:
/// σ ≤ 0, T ≤ 0, F ≤ 0 and K ≤ 0 are all rejected.
///
/// # Examples
/// ```
/// use pricer_core::market_data::{CurveInterpolation, DiscountCurve};
/// use pricer_core::types::KeyUnit;
/// use pricer_models::analytical::Black76Caplet;
/// use pricer_models::instruments::Caplet;
///
/// let curve = DiscountCurve::new(
///     &[0.5_f64, 1.0, 2.0, 5.0, 10.0],
///     &[(-0.015_f64).exp(), (-0.032_f64).exp(), (-0.07_f64).exp(), (-0.2_f64).exp(), (-0.42_f64).exp()],
///     KeyUnit::Years,
///     CurveInterpolation::LogLinear,
/// )
/// .unwrap();
///
/// let caplet = Caplet::new(2.0, 0.037, 0.04, 0.25, 0.5).unwrap();
/// let price = Black76Caplet::price(&curve, &caplet).unwrap();
/// assert!((price - 0.001879492977830357).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Black76Caplet;

impl Black76Caplet {
    /// Computes `(d₁, d₂)` after validating the inputs.
    ///
    /// # Errors
    /// - `InvalidVolatility` if σ ≤ 0 or not finite
    /// - `InvalidExpiry` if T ≤ 0 or not finite
    /// - `InvalidForward` if F ≤ 0 or not finite
    /// - `InvalidStrike` if K ≤ 0 or not finite
    pub fn d1_d2<T: Float>(
        forward: T,
        strike: T,
        volatility: T,
        expiry: T,
    ) -> Result<(T, T), AnalyticalError> {
        if !is_positive(volatility) {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: to_f64(volatility),
            });
        }
        if !is_positive(expiry) {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: to_f64(expiry),
            });
        }
        if !is_positive(forward) {
            return Err(AnalyticalError::InvalidForward {
                forward: to_f64(forward),
            });
        }
        if !is_positive(strike) {
            return Err(AnalyticalError::InvalidStrike {
                strike: to_f64(strike),
            });
        }

        let half = T::from(0.5).unwrap();
        let sd = volatility * expiry.sqrt();
        let d1 = ((forward / strike).ln() + half * sd * sd) / sd;
        Ok((d1, d1 - sd))
    }

    /// Discounted caplet premium.
    pub fn price<T: Float, C: YieldCurve<T>>(
        curve: &C,
        caplet: &Caplet<T>,
    ) -> Result<T, AnalyticalError> {
        Ok(Self::valuation(curve, caplet)?.price)
    }

    /// Delta and vega.
    pub fn greeks<T: Float, C: YieldCurve<T>>(
        curve: &C,
        caplet: &Caplet<T>,
    ) -> Result<CapletGreeks<T>, AnalyticalError> {
        let v = Self::valuation(curve, caplet)?;
        Ok(CapletGreeks {
            delta: v.delta,
            vega: v.vega,
        })
    }

    /// Price, delta and vega in one pass.
    pub fn valuation<T: Float, C: YieldCurve<T>>(
        curve: &C,
        caplet: &Caplet<T>,
    ) -> Result<CapletValuation<T>, AnalyticalError> {
        let forward = caplet.forward();
        let strike = caplet.strike();
        let expiry = caplet.expiry();

        let (d1, d2) = Self::d1_d2(forward, strike, caplet.volatility(), expiry)?;
        let annuity = curve.discount_factor(expiry)? * caplet.accrual();

        // Rounding can undershoot zero far out of the money.
        let price = (annuity * (forward * norm_cdf(d1) - strike * norm_cdf(d2))).max(T::zero());
        let delta = annuity * norm_cdf(d1);
        let vega = annuity * forward * expiry.sqrt() * norm_pdf(d1);

        if !(price.is_finite() && delta.is_finite() && vega.is_finite()) {
            return Err(AnalyticalError::NumericalInstability {
                message: format!(
                    "non-finite Black result: price = {}, delta = {}, vega = {}",
                    to_f64(price),
                    to_f64(delta),
                    to_f64(vega)
                ),
            });
        }

        Ok(CapletValuation { price, delta, vega })
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use pricer_core::market_data::{CurveInterpolation, DiscountCurve, MarketDataError};
    use pricer_core::types::KeyUnit;

    fn market_curve() -> DiscountCurve<f64> {
        let times = [0.5, 1.0, 2.0, 5.0, 10.0];
        let dfs: Vec<f64> = [-0.015_f64, -0.032, -0.07, -0.2, -0.42]
            .iter()
            .map(|l| l.exp())
            .collect();
        DiscountCurve::new(&times, &dfs, KeyUnit::Years, CurveInterpolation::LogLinear).unwrap()
    }

    // ==========================================================
    // Reference Values
    // ==========================================================

    #[test]
    fn test_d1_d2_reference() {
        let (d1, d2) = Black76Caplet::d1_d2(0.037_f64, 0.04, 0.25, 2.0).unwrap();
        assert_relative_eq!(d1, -0.043731843283321255, max_relative = 1e-12);
        assert_relative_eq!(d2, -0.39728523387659503, max_relative = 1e-12);
    }

    #[test]
    fn test_two_year_caplet_reference() {
        let curve = market_curve();
        let caplet = Caplet::new(2.0, 0.037, 0.04, 0.25, 0.5).unwrap();

        let v = Black76Caplet::valuation(&curve, &caplet).unwrap();
        assert_relative_eq!(v.price, 0.001879492977830357, max_relative = 1e-12);
        assert_relative_eq!(v.delta, 0.22496755108469277, max_relative = 1e-12);
        assert_relative_eq!(v.vega, 0.009722565773453533, max_relative = 1e-12);
    }

    #[test]
    fn test_three_year_caplet_reference() {
        let curve = market_curve();
        let caplet = Caplet::new(3.0, 0.038, 0.04, 0.24, 0.5).unwrap();

        let v = Black76Caplet::valuation(&curve, &caplet).unwrap();
        assert_relative_eq!(v.price, 0.002441727279213644, max_relative = 1e-12);
        assert_relative_eq!(v.delta, 0.2382364403446868, max_relative = 1e-12);
        assert_relative_eq!(v.vega, 0.011680339584640185, max_relative = 1e-12);
    }

    #[test]
    fn test_price_greeks_and_valuation_agree() {
        let curve = market_curve();
        let caplet = Caplet::new(1.0, 0.05, 0.03, 0.2, 0.25).unwrap();

        let v = Black76Caplet::valuation(&curve, &caplet).unwrap();
        let g = Black76Caplet::greeks(&curve, &caplet).unwrap();
        assert_eq!(Black76Caplet::price(&curve, &caplet).unwrap(), v.price);
        assert_eq!(g.delta, v.delta);
        assert_eq!(g.vega, v.vega);
    }

    // ==========================================================
    // Limits and Properties
    // ==========================================================

    #[test]
    fn test_low_volatility_tends_to_discounted_intrinsic() {
        let curve = market_curve();
        let df = (-0.032_f64).exp();

        let itm = Caplet::new(1.0, 0.05, 0.03, 1e-6, 0.25).unwrap();
        assert_relative_eq!(
            Black76Caplet::price(&curve, &itm).unwrap(),
            df * 0.25 * 0.02,
            max_relative = 1e-10
        );

        let otm = Caplet::new(1.0, 0.03, 0.05, 1e-6, 0.25).unwrap();
        assert_abs_diff_eq!(Black76Caplet::price(&curve, &otm).unwrap(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_price_increases_with_volatility() {
        let curve = market_curve();
        let mut prev = 0.0;
        for vol in [0.05, 0.1, 0.2, 0.4, 0.8] {
            let caplet = Caplet::new(2.0, 0.037, 0.04, vol, 0.5).unwrap();
            let price = Black76Caplet::price(&curve, &caplet).unwrap();
            assert!(price > prev, "price not increasing at σ = {}", vol);
            prev = price;
        }
    }

    #[test]
    fn test_delta_matches_forward_bump() {
        let curve = market_curve();
        let h = 1e-6;
        let up = Caplet::new(2.0, 0.037 + h, 0.04, 0.25, 0.5).unwrap();
        let down = Caplet::new(2.0, 0.037 - h, 0.04, 0.25, 0.5).unwrap();
        let fd = (Black76Caplet::price(&curve, &up).unwrap()
            - Black76Caplet::price(&curve, &down).unwrap())
            / (2.0 * h);

        let caplet = Caplet::new(2.0, 0.037, 0.04, 0.25, 0.5).unwrap();
        let delta = Black76Caplet::greeks(&curve, &caplet).unwrap().delta;
        assert_abs_diff_eq!(fd, delta, epsilon = 1e-4);
    }

    #[test]
    fn test_vega_matches_volatility_bump() {
        let curve = market_curve();
        let h = 1e-5;
        let up = Caplet::new(2.0, 0.037, 0.04, 0.25 + h, 0.5).unwrap();
        let down = Caplet::new(2.0, 0.037, 0.04, 0.25 - h, 0.5).unwrap();
        let fd = (Black76Caplet::price(&curve, &up).unwrap()
            - Black76Caplet::price(&curve, &down).unwrap())
            / (2.0 * h);

        let caplet = Caplet::new(2.0, 0.037, 0.04, 0.25, 0.5).unwrap();
        let vega = Black76Caplet::greeks(&curve, &caplet).unwrap().vega;
        assert_relative_eq!(fd, vega, max_relative = 1e-3);
    }

    // ==========================================================
    // Input Guards
    // ==========================================================

    #[test]
    fn test_zero_volatility_rejected() {
        let curve = market_curve();
        let caplet = Caplet::new(2.0, 0.037, 0.04, 0.0, 0.5).unwrap();
        assert!(matches!(
            Black76Caplet::price(&curve, &caplet),
            Err(AnalyticalError::InvalidVolatility { .. })
        ));
        assert!(Black76Caplet::greeks(&curve, &caplet).is_err());
    }

    #[test]
    fn test_non_positive_expiry_rejected() {
        let curve = market_curve();
        for expiry in [0.0, -1.0] {
            let caplet = Caplet::new(expiry, 0.037, 0.04, 0.25, 0.5).unwrap();
            assert!(matches!(
                Black76Caplet::price(&curve, &caplet),
                Err(AnalyticalError::InvalidExpiry { .. })
            ));
        }
    }

    #[test]
    fn test_non_positive_forward_and_strike_rejected() {
        assert!(matches!(
            Black76Caplet::d1_d2(0.0_f64, 0.04, 0.25, 2.0),
            Err(AnalyticalError::InvalidForward { .. })
        ));
        assert!(matches!(
            Black76Caplet::d1_d2(0.037_f64, -0.04, 0.25, 2.0),
            Err(AnalyticalError::InvalidStrike { .. })
        ));
    }

    #[test]
    fn test_curve_failure_is_propagated() {
        struct BrokenCurve;

        impl YieldCurve<f64> for BrokenCurve {
            fn discount_factor(&self, t: f64) -> Result<f64, MarketDataError> {
                Err(MarketDataError::InvalidMaturity { t })
            }
        }

        let caplet = Caplet::new(2.0, 0.037, 0.04, 0.25, 0.5).unwrap();
        assert!(matches!(
            Black76Caplet::price(&BrokenCurve, &caplet),
            Err(AnalyticalError::Curve(_))
        ));
    }
}
