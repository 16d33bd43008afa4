//! Core numeric traits.
//!
//! Every curve, instrument and pricer in the workspace is generic over
//! [`Float`], so the same code runs in `f64` for production and `f32` for
//! cheap precision checks.
//!
//! ## Important
//! Instruments are dispatched through enums, never `Box<dyn Trait>`.

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use pricer_core::traits::Float;
///
/// fn continuous_discount<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let df: f64 = continuous_discount(0.05, 1.0);
/// assert!((df - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;
