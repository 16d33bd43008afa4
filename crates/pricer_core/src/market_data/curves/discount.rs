//! Knot-based discount curve with log-linear or step lookup.

use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use crate::math::interpolators::{Interpolator, LinearInterpolator, StepInterpolator};
use crate::types::KeyUnit;
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

/// One basis point as a decimal rate.
pub const BASIS_POINT: f64 = 1e-4;

/// Interpolation policy between curve knots.
///
/// Each curve instance carries exactly one policy; there is no implicit
/// default at the curve level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveInterpolation {
    /// Log-linear interpolation on discount factors.
    ///
    /// Interpolates `ln(D(t))` linearly between the bracketing knots, which is
    /// equivalent to a constant forward rate on each segment.
    LogLinear,

    /// Step lookup.
    ///
    /// Returns the discount factor of the first knot whose key is at or after
    /// the requested time.
    Step,
}

impl CurveInterpolation {
    /// Returns the canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            CurveInterpolation::LogLinear => "log-linear",
            CurveInterpolation::Step => "step",
        }
    }
}

impl FromStr for CurveInterpolation {
    type Err = String;

    /// Parses an interpolation policy (case-insensitive).
    ///
    /// Accepts "log-linear", "loglinear", "log_linear" and "step", "lookup".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "loglinear" => Ok(CurveInterpolation::LogLinear),
            "step" | "lookup" => Ok(CurveInterpolation::Step),
            _ => Err(format!("Unknown curve interpolation: {}", s)),
        }
    }
}

impl fmt::Display for CurveInterpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::CurveInterpolation;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for CurveInterpolation {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for CurveInterpolation {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            CurveInterpolation::from_str(&s).map_err(de::Error::custom)
        }
    }
}

/// Interpolator built once at construction, over knot times in years.
#[derive(Debug, Clone)]
enum KnotLookup<T: Float> {
    /// Linear in `ln(df)`.
    LogLinear(LinearInterpolator<T>),
    /// Next knot at or after the query.
    Step(StepInterpolator<T>),
}

/// Discount curve defined by (key, discount factor) knots.
///
/// Keys may be quoted in years or days ([`KeyUnit`]); every query takes a
/// year fraction. Outside the knot range the curve extrapolates flat: any
/// time at or before the first knot returns the first discount factor, any
/// time at or after the last knot returns the last one.
///
/// Discount factors must be strictly positive and finite but are not capped
/// at one, since a negative parallel shift legitimately lifts them above one.
///
/// The curve is immutable; [`bumped`](Self::bumped) returns a new value.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{CurveInterpolation, DiscountCurve, YieldCurve};
/// use pricer_core::types::KeyUnit;
///
/// let curve = DiscountCurve::new(
///     &[0.0_f64, 365.0, 1825.0, 3650.0],
///     &[1.0, 0.98, 0.90, 0.82],
///     KeyUnit::Days,
///     CurveInterpolation::Step,
/// )
/// .unwrap();
///
/// assert_eq!(curve.discount_factor(0.5).unwrap(), 0.98);
/// assert_eq!(curve.discount_factor(20.0).unwrap(), 0.82);
/// ```
#[derive(Debug, Clone)]
pub struct DiscountCurve<T: Float> {
    keys: Vec<T>,
    times: Vec<T>,
    discount_factors: Vec<T>,
    key_unit: KeyUnit,
    interpolation: CurveInterpolation,
    lookup: KnotLookup<T>,
}

impl<T: Float> DiscountCurve<T> {
    /// Construct a curve from knot keys and discount factors.
    ///
    /// # Errors
    ///
    /// * `LengthMismatch` - `keys` and `discount_factors` differ in length
    /// * `InsufficientData` - Fewer than 2 knots
    /// * `InvalidKey` - Negative or non-finite key
    /// * `NonIncreasingKeys` - Keys not strictly increasing
    /// * `InvalidDiscountFactor` - Non-positive or non-finite discount factor
    pub fn new(
        keys: &[T],
        discount_factors: &[T],
        key_unit: KeyUnit,
        interpolation: CurveInterpolation,
    ) -> Result<Self, MarketDataError> {
        if keys.len() != discount_factors.len() {
            return Err(MarketDataError::LengthMismatch {
                keys: keys.len(),
                values: discount_factors.len(),
            });
        }

        if keys.len() < 2 {
            return Err(MarketDataError::InsufficientData {
                got: keys.len(),
                need: 2,
            });
        }

        for (index, &key) in keys.iter().enumerate() {
            if !key.is_finite() || key < T::zero() {
                return Err(MarketDataError::InvalidKey {
                    index,
                    key: to_f64(key),
                });
            }
            if index > 0 && key <= keys[index - 1] {
                return Err(MarketDataError::NonIncreasingKeys { index });
            }
        }

        for (index, &df) in discount_factors.iter().enumerate() {
            if !df.is_finite() || df <= T::zero() {
                return Err(MarketDataError::InvalidDiscountFactor {
                    index,
                    df: to_f64(df),
                });
            }
        }

        let times: Vec<T> = keys.iter().map(|&k| key_unit.to_years(k)).collect();

        let lookup = match interpolation {
            CurveInterpolation::LogLinear => {
                let log_dfs: Vec<T> = discount_factors.iter().map(|df| df.ln()).collect();
                KnotLookup::LogLinear(LinearInterpolator::new(&times, &log_dfs)?)
            }
            CurveInterpolation::Step => {
                KnotLookup::Step(StepInterpolator::new(&times, discount_factors)?)
            }
        };

        Ok(Self {
            keys: keys.to_vec(),
            times,
            discount_factors: discount_factors.to_vec(),
            key_unit,
            interpolation,
            lookup,
        })
    }

    /// Construct a curve from continuously compounded zero rates.
    ///
    /// Each knot's discount factor is `exp(-rate * t)` with `t` the key in
    /// years.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::curves::{CurveInterpolation, DiscountCurve};
    /// use pricer_core::types::KeyUnit;
    ///
    /// let curve = DiscountCurve::from_zero_rates(
    ///     &[1.0_f64, 2.0],
    ///     &[0.03, 0.035],
    ///     KeyUnit::Years,
    ///     CurveInterpolation::LogLinear,
    /// )
    /// .unwrap();
    /// assert!((curve.discount_factors()[1] - (-0.07_f64).exp()).abs() < 1e-15);
    /// ```
    pub fn from_zero_rates(
        keys: &[T],
        zero_rates: &[T],
        key_unit: KeyUnit,
        interpolation: CurveInterpolation,
    ) -> Result<Self, MarketDataError> {
        if keys.len() != zero_rates.len() {
            return Err(MarketDataError::LengthMismatch {
                keys: keys.len(),
                values: zero_rates.len(),
            });
        }

        let dfs: Vec<T> = keys
            .iter()
            .zip(zero_rates)
            .map(|(&k, &r)| (-r * key_unit.to_years(k)).exp())
            .collect();

        Self::new(keys, &dfs, key_unit, interpolation)
    }

    /// Return a new curve under a parallel shift of `shift_bp` basis points.
    ///
    /// Every knot's discount factor is multiplied by
    /// `exp(-shift_bp * 1e-4 * t)` where `t` is the knot key in years. Key
    /// unit and interpolation policy carry over. A zero shift reproduces the
    /// original discount factors exactly.
    ///
    /// # Errors
    ///
    /// * `InvalidShift` - `shift_bp` is not finite
    /// * `InvalidDiscountFactor` - The shift overflows or underflows a knot
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::curves::{CurveInterpolation, DiscountCurve};
    /// use pricer_core::types::KeyUnit;
    ///
    /// let curve = DiscountCurve::new(
    ///     &[0.0_f64, 1.0],
    ///     &[1.0, 0.97],
    ///     KeyUnit::Years,
    ///     CurveInterpolation::LogLinear,
    /// )
    /// .unwrap();
    ///
    /// let up = curve.bumped(100.0).unwrap();
    /// assert_eq!(up.discount_factors()[0], 1.0);
    /// assert!((up.discount_factors()[1] - 0.97 * (-0.01_f64).exp()).abs() < 1e-15);
    /// ```
    pub fn bumped(&self, shift_bp: T) -> Result<Self, MarketDataError> {
        if !shift_bp.is_finite() {
            return Err(MarketDataError::InvalidShift {
                shift_bp: to_f64(shift_bp),
            });
        }

        let shift = shift_bp * T::from(BASIS_POINT).unwrap();
        let dfs: Vec<T> = self
            .discount_factors
            .iter()
            .zip(&self.times)
            .map(|(&df, &t)| df * (-shift * t).exp())
            .collect();

        Self::new(&self.keys, &dfs, self.key_unit, self.interpolation)
    }

    /// Knot keys in their native unit.
    #[inline]
    pub fn keys(&self) -> &[T] {
        &self.keys
    }

    /// Knot times in years.
    #[inline]
    pub fn times(&self) -> &[T] {
        &self.times
    }

    /// Knot discount factors.
    #[inline]
    pub fn discount_factors(&self) -> &[T] {
        &self.discount_factors
    }

    /// Unit the knot keys are quoted in.
    #[inline]
    pub fn key_unit(&self) -> KeyUnit {
        self.key_unit
    }

    /// Interpolation policy of this curve.
    #[inline]
    pub fn interpolation(&self) -> CurveInterpolation {
        self.interpolation
    }

    /// Number of knots.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false for a constructed curve.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// First and last knot times in years.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        (self.times[0], self.times[self.times.len() - 1])
    }
}

impl<T: Float> YieldCurve<T> for DiscountCurve<T> {
    /// Discount factor at `t` years.
    ///
    /// # Errors
    ///
    /// * `InvalidMaturity` - `t` negative or not finite
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if !t.is_finite() || t < T::zero() {
            return Err(MarketDataError::InvalidMaturity { t: to_f64(t) });
        }

        let (t_min, t_max) = self.domain();
        if t <= t_min {
            return Ok(self.discount_factors[0]);
        }
        if t >= t_max {
            return Ok(self.discount_factors[self.discount_factors.len() - 1]);
        }

        match &self.lookup {
            KnotLookup::LogLinear(interp) => Ok(interp.interpolate(t)?.exp()),
            KnotLookup::Step(interp) => Ok(interp.interpolate(t)?),
        }
    }
}

#[inline]
fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
