//! Step (next-knot) lookup.

use super::traits::{out_of_bounds, validate_knots};
use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Absolute tolerance used when matching a query against a knot.
///
/// Payment times are computed as `i / frequency` while knots may come from
/// `days / 365`; the two can differ in the last bit for the same date.
pub const KNOT_TOLERANCE: f64 = 1e-12;

/// Piecewise-constant lookup returning the value at the first knot whose
/// abscissa is at or after the query point.
///
/// For knots `x_0 < x_1 < ... < x_n` and `x_{i-1} < x <= x_i`, the result is
/// `y_i`. This is a right-continuous lookup: the value between two knots is
/// the value of the later knot.
///
/// # Example
///
/// ```
/// use pricer_core::math::interpolators::{Interpolator, StepInterpolator};
///
/// let interp = StepInterpolator::new(&[0.0, 1.0, 5.0], &[1.0, 0.98, 0.90]).unwrap();
/// assert_eq!(interp.interpolate(0.5).unwrap(), 0.98);
/// assert_eq!(interp.interpolate(1.0).unwrap(), 0.98);
/// assert_eq!(interp.interpolate(1.5).unwrap(), 0.90);
/// ```
#[derive(Debug, Clone)]
pub struct StepInterpolator<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
    tolerance: T,
}

impl<T: Float> StepInterpolator<T> {
    /// Construct a step interpolator.
    ///
    /// Same validation as [`LinearInterpolator::new`](super::LinearInterpolator::new).
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        validate_knots(xs, ys)?;

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            tolerance: T::from(KNOT_TOLERANCE).unwrap_or_else(T::epsilon),
        })
    }

    /// Returns the x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns the y-values.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no data points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl<T: Float> Interpolator<T> for StepInterpolator<T> {
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let (x_min, x_max) = self.domain();

        if !(x >= x_min && x <= x_max) {
            return Err(out_of_bounds(x, x_min, x_max));
        }

        // First knot with xs[i] >= x, allowing for representation noise.
        let idx = self.xs.partition_point(|&xi| xi + self.tolerance < x);
        Ok(self.ys[idx.min(self.ys.len() - 1)])
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
