//! Fixed-coupon bullet bond.

use num_traits::Float;
use pricer_core::market_data::YieldCurve;
use pricer_core::types::PricingError;

use super::error::InstrumentError;
use super::traits::{Cashflow, Valuable};

/// Face value used when none is given.
pub const DEFAULT_FACE_VALUE: f64 = 100.0;

/// Tolerance when checking that `tenor * frequency` is a whole number.
const PERIOD_TOLERANCE: f64 = 1e-9;

/// Largest accepted coupon count: daily payments for 100 years.
pub const MAX_PERIODS: usize = 36_500;

/// Fixed-coupon bond paying `coupon_rate / payments_per_year * face_value`
/// every period and the face value with the final coupon.
///
/// Payment times are `i / payments_per_year` years for
/// `i = 1..=tenor_years * payments_per_year`. No day-count adjustment is
/// applied.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::{Bond, Valuable};
///
/// let bond = Bond::new(0.03_f64, 5.0, 2).unwrap();
/// let flows = bond.cashflows();
///
/// assert_eq!(flows.len(), 10);
/// assert_eq!(flows[0].time, 0.5);
/// assert!((flows[0].amount - 1.5).abs() < 1e-12);
/// assert!((flows[9].amount - 101.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bond<T: Float> {
    coupon_rate: T,
    tenor_years: T,
    payments_per_year: u32,
    face_value: T,
    num_periods: usize,
}

impl<T: Float> Bond<T> {
    /// Creates a bond with face value 100.
    ///
    /// # Errors
    ///
    /// - `InvalidFrequency` if `payments_per_year == 0`
    /// - `InvalidTenor` if `tenor_years <= 0`, `tenor_years * payments_per_year`
    ///   is not a whole number, or it exceeds [`MAX_PERIODS`]
    /// - `InvalidCoupon` if `coupon_rate` is negative or not finite
    pub fn new(
        coupon_rate: T,
        tenor_years: T,
        payments_per_year: u32,
    ) -> Result<Self, InstrumentError> {
        if payments_per_year == 0 {
            return Err(InstrumentError::InvalidFrequency {
                frequency: payments_per_year,
            });
        }

        if !coupon_rate.is_finite() || coupon_rate < T::zero() {
            return Err(InstrumentError::InvalidCoupon {
                coupon: to_f64(coupon_rate),
            });
        }

        let tenor = to_f64(tenor_years);
        let invalid_tenor = InstrumentError::InvalidTenor {
            tenor,
            frequency: payments_per_year,
        };
        if !tenor.is_finite() || tenor <= 0.0 {
            return Err(invalid_tenor);
        }

        let periods = tenor * f64::from(payments_per_year);
        let rounded = periods.round();
        if rounded < 1.0
            || rounded > MAX_PERIODS as f64
            || (periods - rounded).abs() > PERIOD_TOLERANCE
        {
            return Err(invalid_tenor);
        }

        Ok(Self {
            coupon_rate,
            tenor_years,
            payments_per_year,
            face_value: T::from(DEFAULT_FACE_VALUE).unwrap(),
            num_periods: rounded as usize,
        })
    }

    /// Returns the bond with a different face value.
    ///
    /// # Errors
    ///
    /// - `InvalidFaceValue` if `face_value` is non-positive or not finite
    pub fn with_face_value(mut self, face_value: T) -> Result<Self, InstrumentError> {
        if !face_value.is_finite() || face_value <= T::zero() {
            return Err(InstrumentError::InvalidFaceValue {
                face_value: to_f64(face_value),
            });
        }
        self.face_value = face_value;
        Ok(self)
    }

    /// Annual coupon rate.
    #[inline]
    pub fn coupon_rate(&self) -> T {
        self.coupon_rate
    }

    /// Tenor in years.
    #[inline]
    pub fn tenor_years(&self) -> T {
        self.tenor_years
    }

    /// Coupon payments per year.
    #[inline]
    pub fn payments_per_year(&self) -> u32 {
        self.payments_per_year
    }

    /// Face value repaid at maturity.
    #[inline]
    pub fn face_value(&self) -> T {
        self.face_value
    }

    /// Number of coupon periods.
    #[inline]
    pub fn num_periods(&self) -> usize {
        self.num_periods
    }

    /// Coupon paid each period.
    #[inline]
    pub fn coupon_amount(&self) -> T {
        self.coupon_rate / T::from(self.payments_per_year).unwrap() * self.face_value
    }

    /// Time of the final payment in years.
    #[inline]
    pub fn maturity(&self) -> T {
        T::from(self.num_periods).unwrap() / T::from(self.payments_per_year).unwrap()
    }
}

impl<T: Float> Valuable<T> for Bond<T> {
    fn cashflows(&self) -> Vec<Cashflow<T>> {
        let freq = T::from(self.payments_per_year).unwrap();
        let coupon = self.coupon_amount();

        (1..=self.num_periods)
            .map(|i| {
                let time = T::from(i).unwrap() / freq;
                let amount = if i == self.num_periods {
                    coupon + self.face_value
                } else {
                    coupon
                };
                Cashflow::new(time, amount)
            })
            .collect()
    }

    fn npv<C: YieldCurve<T>>(&self, curve: &C) -> Result<T, PricingError> {
        let mut pv = T::zero();
        for cf in self.cashflows() {
            pv = pv + cf.present_value(curve.discount_factor(cf.time)?);
        }
        Ok(pv)
    }

    fn type_name(&self) -> &'static str {
        "Bond"
    }
}

#[inline]
fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
