//! Parallel rate shock definitions.

use pricer_core::traits::Float;

/// Named parallel shift of the discount curve, in basis points.
///
/// Positive shifts raise rates and lower discount factors.
///
/// # Examples
///
/// ```
/// use pricer_risk::scenarios::Scenario;
///
/// let up = Scenario::new("+25bp", 25.0_f64);
/// assert_eq!(up.name(), "+25bp");
/// assert_eq!(up.shift_bp(), 25.0);
/// assert!(Scenario::<f64>::base().is_base());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario<T: Float> {
    name: String,
    shift_bp: T,
}

impl<T: Float> Scenario<T> {
    /// Creates a scenario.
    pub fn new(name: impl Into<String>, shift_bp: T) -> Self {
        Self {
            name: name.into(),
            shift_bp,
        }
    }

    /// Unshocked scenario (0bp).
    pub fn base() -> Self {
        Self::new("Base", T::zero())
    }

    /// Scenario label.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parallel shift in basis points.
    #[inline]
    pub fn shift_bp(&self) -> T {
        self.shift_bp
    }

    /// Returns `true` for a zero shift.
    #[inline]
    pub fn is_base(&self) -> bool {
        self.shift_bp == T::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_new() {
        let s = Scenario::new("IR -10bp", -10.0_f64);
        assert_eq!(s.name(), "IR -10bp");
        assert_eq!(s.shift_bp(), -10.0);
        assert!(!s.is_base());
    }

    #[test]
    fn test_base_scenario() {
        let base = Scenario::<f64>::base();
        assert_eq!(base.name(), "Base");
        assert_eq!(base.shift_bp(), 0.0);
    }
}
