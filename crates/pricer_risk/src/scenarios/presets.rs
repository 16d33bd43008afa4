//! Preset parallel rate scenarios.

use super::shifts::Scenario;
use pricer_core::traits::Float;

/// Standard parallel rate shocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresetScenarioType {
    /// Interest rate +1bp parallel shift
    RateUp1bp,
    /// Interest rate +10bp parallel shift
    RateUp10bp,
    /// Interest rate +25bp parallel shift
    RateUp25bp,
    /// Interest rate +100bp parallel shift
    RateUp100bp,
    /// Interest rate -1bp parallel shift
    RateDown1bp,
    /// Interest rate -10bp parallel shift
    RateDown10bp,
    /// Interest rate -25bp parallel shift
    RateDown25bp,
    /// Interest rate -100bp parallel shift
    RateDown100bp,
}

impl PresetScenarioType {
    /// All rate scenarios, up shocks first.
    pub fn rate_scenarios() -> Vec<Self> {
        vec![
            Self::RateUp1bp,
            Self::RateUp10bp,
            Self::RateUp25bp,
            Self::RateUp100bp,
            Self::RateDown1bp,
            Self::RateDown10bp,
            Self::RateDown25bp,
            Self::RateDown100bp,
        ]
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RateUp1bp => "IR +1bp",
            Self::RateUp10bp => "IR +10bp",
            Self::RateUp25bp => "IR +25bp",
            Self::RateUp100bp => "IR +100bp",
            Self::RateDown1bp => "IR -1bp",
            Self::RateDown10bp => "IR -10bp",
            Self::RateDown25bp => "IR -25bp",
            Self::RateDown100bp => "IR -100bp",
        }
    }

    /// Parallel shift in basis points.
    pub fn shift_bp(&self) -> f64 {
        match self {
            Self::RateUp1bp => 1.0,
            Self::RateUp10bp => 10.0,
            Self::RateUp25bp => 25.0,
            Self::RateUp100bp => 100.0,
            Self::RateDown1bp => -1.0,
            Self::RateDown10bp => -10.0,
            Self::RateDown25bp => -25.0,
            Self::RateDown100bp => -100.0,
        }
    }

    /// Builds the corresponding [`Scenario`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_risk::scenarios::PresetScenarioType;
    ///
    /// let s = PresetScenarioType::RateDown25bp.scenario::<f64>();
    /// assert_eq!(s.name(), "IR -25bp");
    /// assert_eq!(s.shift_bp(), -25.0);
    /// ```
    pub fn scenario<T: Float>(&self) -> Scenario<T> {
        Scenario::new(self.name(), T::from(self.shift_bp()).unwrap())
    }
}
