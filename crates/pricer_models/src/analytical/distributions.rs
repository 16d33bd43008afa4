//! Standard normal distribution functions used by the Black formula.
//!
//! - `norm_cdf`: cumulative distribution function Φ
//! - `norm_pdf`: probability density function φ
//!
//! Both are generic over `T: Float`. The error function comes from `statrs`
//! and is evaluated in `f64`.

use num_traits::Float;

const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function at full double precision.
#[inline]
fn erfc<T: Float>(x: T) -> T {
    let value = statrs::function::erf::erfc(x.to_f64().unwrap_or(f64::NAN));
    T::from(value).unwrap_or_else(T::nan)
}

/// Standard normal cumulative distribution function.
///
/// ```text
/// Φ(x) = erfc(-x / sqrt(2)) / 2
/// ```
///
/// Evaluated in double precision; the result always lies in `[0, 1]`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert_eq!(norm_cdf(0.0_f64), 0.5);
/// assert!((norm_cdf(1.959964_f64) - 0.975).abs() < 1e-6);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let arg = -x / T::from(SQRT_2).unwrap();
    T::from(0.5).unwrap() * erfc(arg)
}

/// Standard normal probability density function.
///
/// ```text
/// φ(x) = exp(-x² / 2) / sqrt(2π)
/// ```
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap();
    T::from(FRAC_1_SQRT_2PI).unwrap() * (-half * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_norm_cdf_reference_values() {
        // Values from exact erfc
        let cases = [
            (-3.0, 0.0013498980316300957),
            (-1.0, 0.15865525393145707),
            (-0.39728523387659503, 0.34557856748521354),
            (-0.043731843283321255, 0.4825590781101177),
            (0.0, 0.5),
            (1.0, 0.8413447460685429),
            (2.5, 0.9937903346742238),
        ];

        for (x, expected) in cases {
            assert_relative_eq!(norm_cdf(x), expected, max_relative = 1e-13);
        }
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for x in [0.1, 0.5, 1.3, 2.7, 4.0] {
            assert_abs_diff_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_norm_cdf_tails_are_bounded() {
        assert!(norm_cdf(-40.0_f64) >= 0.0);
        assert!(norm_cdf(-40.0_f64) < 1e-12);
        assert!(norm_cdf(40.0_f64) <= 1.0);
        assert_abs_diff_eq!(norm_cdf(40.0_f64), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_cdf_monotone() {
        let mut prev = norm_cdf(-3.0_f64);
        for i in -29..=30 {
            let x = i as f64 * 0.1;
            let cur = norm_cdf(x);
            assert!(cur >= prev, "Φ not monotone at {}", x);
            prev = cur;
        }
    }

    #[test]
    fn test_norm_pdf_values() {
        assert_abs_diff_eq!(norm_pdf(1.0_f64), 0.24197072451914337, epsilon = 1e-15);
        assert_abs_diff_eq!(norm_pdf(-1.0_f64), norm_pdf(1.0_f64), epsilon = 1e-15);
        assert!(norm_pdf(50.0_f64) >= 0.0);
    }

    #[test]
    fn test_norm_pdf_is_cdf_slope() {
        let h = 1e-4;
        for x in [-1.5, -0.2, 0.0, 0.7, 2.0] {
            let slope = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_abs_diff_eq!(slope, norm_pdf(x), epsilon = 1e-3);
        }
    }

    #[test]
    fn test_f32() {
        assert!((norm_cdf(0.0_f32) - 0.5).abs() < 1e-6);
        assert!((norm_pdf(0.0_f32) - 0.398_942_3).abs() < 1e-6);
    }
}
