//! Common interface for one-dimensional interpolators.

use crate::types::InterpolationError;
use num_traits::Float;

/// One-dimensional interpolator over a fixed, validated knot set.
///
/// Implementations never extrapolate: queries outside [`domain`](Self::domain)
/// return [`InterpolationError::OutOfBounds`]. Callers that need a boundary
/// policy (the discount curve's flat extrapolation) apply it before calling.
pub trait Interpolator<T: Float> {
    /// Interpolated value at `x`.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Closed interval `(x_min, x_max)` on which [`interpolate`](Self::interpolate) is defined.
    fn domain(&self) -> (T, T);
}

/// Validates abscissae/ordinates shared by every interpolator.
///
/// Requires equal lengths, at least two points and strictly increasing `xs`.
pub(crate) fn validate_knots<T: Float>(xs: &[T], ys: &[T]) -> Result<(), InterpolationError> {
    if xs.len() != ys.len() {
        return Err(InterpolationError::InvalidInput(format!(
            "xs and ys must have same length: got {} and {}",
            xs.len(),
            ys.len()
        )));
    }

    if xs.len() < 2 {
        return Err(InterpolationError::InsufficientData {
            got: xs.len(),
            need: 2,
        });
    }

    // NaN fails the comparison too, so it is caught here.
    for i in 1..xs.len() {
        if !(xs[i] > xs[i - 1]) {
            return Err(InterpolationError::NonMonotonicData { index: i });
        }
    }

    Ok(())
}

/// Builds the `OutOfBounds` error for a query outside `[min, max]`.
pub(crate) fn out_of_bounds<T: Float>(x: T, min: T, max: T) -> InterpolationError {
    InterpolationError::OutOfBounds {
        x: x.to_f64().unwrap_or(f64::NAN),
        min: min.to_f64().unwrap_or(f64::NAN),
        max: max.to_f64().unwrap_or(f64::NAN),
    }
}
