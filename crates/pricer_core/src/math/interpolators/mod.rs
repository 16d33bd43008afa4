//! Interpolation methods for curve construction.
//!
//! ## Available Interpolators
//!
//! - [`LinearInterpolator`]: Piecewise linear interpolation between data points
//! - [`StepInterpolator`]: Piecewise-constant lookup of the next knot at or after the query
//!
//! ## Core Trait
//!
//! Both implement [`Interpolator`], which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: Compute interpolated value
//! - `domain() -> (T, T)`: Return valid interpolation range
//!
//! ## Example
//!
//! ```
//! use pricer_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let xs = [0.0_f64, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 4.0, 9.0];
//!
//! let interp = LinearInterpolator::new(&xs, &ys).unwrap();
//! let y = interp.interpolate(1.5).unwrap();
//! assert!((y - 2.5).abs() < 1e-10);
//! ```

mod linear;
mod step;
mod traits;

pub use linear::LinearInterpolator;
pub use step::{StepInterpolator, KNOT_TOLERANCE};
pub use traits::Interpolator;
