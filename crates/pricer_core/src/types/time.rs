//! Time units for curve keys.
//!
//! All times that cross a crate boundary are year fractions. Curve knots may
//! be quoted in years or in calendar days; `KeyUnit` converts between the two
//! on an Actual/365 Fixed basis.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::KeyUnit;
//!
//! let unit = KeyUnit::Days;
//! assert!((unit.to_years(730.0_f64) - 2.0).abs() < 1e-12);
//! assert_eq!(unit.name(), "days");
//! ```

use num_traits::Float;
use std::fmt;
use std::str::FromStr;

/// Number of days in a year for day-keyed curves (Actual/365 Fixed).
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Unit in which curve knot keys are quoted.
///
/// # Variants
///
/// - `Years`: keys are year fractions (`1.0` = one year)
/// - `Days`: keys are calendar days (`365` = one year)
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::KeyUnit;
///
/// let unit: KeyUnit = "DAYS".parse().unwrap();
/// assert_eq!(unit, KeyUnit::Days);
/// assert!((unit.from_years(0.5_f64) - 182.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyUnit {
    /// Keys are year fractions.
    #[default]
    Years,

    /// Keys are calendar days, converted with [`DAYS_PER_YEAR`].
    Days,
}

impl KeyUnit {
    /// Returns the canonical lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            KeyUnit::Years => "years",
            KeyUnit::Days => "days",
        }
    }

    /// Converts a key quoted in this unit to a year fraction.
    #[inline]
    pub fn to_years<T: Float>(&self, key: T) -> T {
        match self {
            KeyUnit::Years => key,
            KeyUnit::Days => key / T::from(DAYS_PER_YEAR).unwrap(),
        }
    }

    /// Converts a year fraction to a key quoted in this unit.
    #[inline]
    pub fn from_years<T: Float>(&self, years: T) -> T {
        match self {
            KeyUnit::Years => years,
            KeyUnit::Days => years * T::from(DAYS_PER_YEAR).unwrap(),
        }
    }
}

impl FromStr for KeyUnit {
    type Err = String;

    /// Parses a key unit (case-insensitive).
    ///
    /// Accepts "years", "year", "y" and "days", "day", "d".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "years" | "year" | "y" => Ok(KeyUnit::Years),
            "days" | "day" | "d" => Ok(KeyUnit::Days),
            _ => Err(format!("Unknown key unit: {}", s)),
        }
    }
}

impl fmt::Display for KeyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::KeyUnit;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for KeyUnit {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for KeyUnit {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            KeyUnit::from_str(&s).map_err(de::Error::custom)
        }
    }
}
