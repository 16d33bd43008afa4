//! Scenario execution engine.
//!
//! For a scenario with shift `s`:
//!
//! ```text
//! pv_base    = Σ npv(curve)
//! pv_shocked = Σ npv(curve.bumped(s))
//! dv01       = (Σ npv(curve.bumped(-1)) - Σ npv(curve.bumped(+1))) / 2
//! convexity  = Σ npv(curve.bumped(+1)) + Σ npv(curve.bumped(-1)) - 2 pv_base
//! ```
//!
//! Sums run in portfolio order. dv01 and convexity are independent of the
//! scenario shift.

use super::shifts::Scenario;
use crate::error::RiskError;
use crate::parallel::{ordered_map, ordered_sum, ParallelConfig};
use crate::portfolio::{Portfolio, Trade};
use pricer_core::market_data::DiscountCurve;
use pricer_core::traits::Float;
use pricer_models::instruments::Valuable;
use tracing::{debug, trace};

/// Bump used for the finite-difference sensitivities, in basis points.
pub const SENSITIVITY_BUMP_BP: f64 = 1.0;

/// Outcome of one scenario run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioResult<T: Float> {
    /// Scenario that was executed
    pub name: String,
    /// Portfolio value on the base curve
    pub pv_base: T,
    /// Portfolio value on the shocked curve
    pub pv_shocked: T,
    /// Value change for a 1bp fall in rates (central difference)
    pub dv01: T,
    /// Second difference of value for a ±1bp shift
    pub convexity: T,
}

impl<T: Float> ScenarioResult<T> {
    /// `pv_shocked - pv_base`.
    #[inline]
    pub fn pnl(&self) -> T {
        self.pv_shocked - self.pv_base
    }

    /// Check if the scenario loses money.
    #[inline]
    pub fn is_loss(&self) -> bool {
        self.pnl() < T::zero()
    }
}

/// Base-curve values shared by every scenario of a run.
#[derive(Clone, Copy, Debug)]
struct Sensitivities<T> {
    pv_base: T,
    dv01: T,
    convexity: T,
}

/// Values a portfolio under parallel rate shocks of a borrowed base curve.
///
/// The engine owns the portfolio and never mutates it or the curve.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::{CurveInterpolation, DiscountCurve};
/// use pricer_core::types::KeyUnit;
/// use pricer_models::instruments::{Bond, Instrument};
/// use pricer_risk::portfolio::Portfolio;
/// use pricer_risk::scenarios::{Scenario, ScenarioEngine};
///
/// let curve = DiscountCurve::new(
///     &[0.0_f64, 365.0, 1825.0, 3650.0],
///     &[1.0, 0.98, 0.90, 0.82],
///     KeyUnit::Days,
///     CurveInterpolation::Step,
/// )
/// .unwrap();
///
/// let bonds: Vec<Instrument<f64>> = vec![
///     Bond::new(0.03, 5.0, 2).unwrap().into(),
///     Bond::new(0.04, 10.0, 2).unwrap().into(),
/// ];
/// let engine = ScenarioEngine::new(&curve, Portfolio::<f64>::from_instruments(bonds));
///
/// let result = engine.run(&Scenario::new("+25bp", 25.0)).unwrap();
/// assert!((result.pv_base - 220.46).abs() < 1e-9);
/// assert!(result.pv_shocked < result.pv_base);
/// assert!(result.dv01 > 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct ScenarioEngine<'a, T: Float> {
    curve: &'a DiscountCurve<T>,
    portfolio: Portfolio<T>,
    parallel: ParallelConfig,
}

impl<'a, T> ScenarioEngine<'a, T>
where
    T: Float + Send + Sync,
{
    /// Creates an engine with the default [`ParallelConfig`].
    pub fn new(curve: &'a DiscountCurve<T>, portfolio: Portfolio<T>) -> Self {
        Self {
            curve,
            portfolio,
            parallel: ParallelConfig::default(),
        }
    }

    /// Replaces the parallel execution settings.
    pub fn with_parallel_config(mut self, config: ParallelConfig) -> Self {
        self.parallel = config;
        self
    }

    /// Replaces the base curve, keeping the portfolio.
    pub fn with_curve<'b>(self, curve: &'b DiscountCurve<T>) -> ScenarioEngine<'b, T> {
        ScenarioEngine {
            curve,
            portfolio: self.portfolio,
            parallel: self.parallel,
        }
    }

    /// Base curve.
    #[inline]
    pub fn curve(&self) -> &DiscountCurve<T> {
        self.curve
    }

    /// Portfolio being valued.
    #[inline]
    pub fn portfolio(&self) -> &Portfolio<T> {
        &self.portfolio
    }

    /// Parallel execution settings.
    #[inline]
    pub fn parallel_config(&self) -> &ParallelConfig {
        &self.parallel
    }

    /// Sum of instrument values on `curve`, in portfolio order.
    ///
    /// # Errors
    ///
    /// `RiskError::Valuation` for the first trade (in portfolio order) that
    /// fails to value. No partial sum is returned.
    pub fn portfolio_value(&self, curve: &DiscountCurve<T>) -> Result<T, RiskError> {
        let pvs = ordered_map(self.portfolio.trades(), &self.parallel, |trade| {
            value_trade(trade, curve)
        });
        ordered_sum(pvs)
    }

    /// Runs one scenario.
    ///
    /// # Errors
    ///
    /// - `RiskError::InvalidScenario` if the shift cannot be applied
    /// - `RiskError::Valuation` if any instrument fails on any curve
    pub fn run(&self, scenario: &Scenario<T>) -> Result<ScenarioResult<T>, RiskError> {
        let sensitivities = self.sensitivities()?;
        self.run_with(scenario, &sensitivities)
    }

    /// Runs several scenarios, sharing the base and ±1bp valuations.
    ///
    /// Results are in input order. The first failure aborts the batch.
    pub fn run_all(&self, scenarios: &[Scenario<T>]) -> Result<Vec<ScenarioResult<T>>, RiskError> {
        if scenarios.is_empty() {
            return Ok(Vec::new());
        }
        let sensitivities = self.sensitivities()?;
        scenarios
            .iter()
            .map(|scenario| self.run_with(scenario, &sensitivities))
            .collect()
    }

    fn run_with(
        &self,
        scenario: &Scenario<T>,
        sensitivities: &Sensitivities<T>,
    ) -> Result<ScenarioResult<T>, RiskError> {
        let shocked = self.shifted_curve(scenario.name(), scenario.shift_bp())?;
        let pv_shocked = self.portfolio_value(&shocked)?;

        let result = ScenarioResult {
            name: scenario.name().to_string(),
            pv_base: sensitivities.pv_base,
            pv_shocked,
            dv01: sensitivities.dv01,
            convexity: sensitivities.convexity,
        };

        debug!(
            scenario = %result.name,
            shift_bp = to_f64(scenario.shift_bp()),
            trades = self.portfolio.len(),
            pv_base = to_f64(result.pv_base),
            pv_shocked = to_f64(result.pv_shocked),
            dv01 = to_f64(result.dv01),
            convexity = to_f64(result.convexity),
            "scenario complete"
        );

        Ok(result)
    }

    fn sensitivities(&self) -> Result<Sensitivities<T>, RiskError> {
        let bump = T::from(SENSITIVITY_BUMP_BP).unwrap();
        let two = T::from(2.0).unwrap();

        let pv_base = self.portfolio_value(self.curve)?;
        let pv_up = self.portfolio_value(&self.shifted_curve("+1bp", bump)?)?;
        let pv_down = self.portfolio_value(&self.shifted_curve("-1bp", -bump)?)?;

        Ok(Sensitivities {
            pv_base,
            dv01: (pv_down - pv_up) / two,
            convexity: pv_up + pv_down - two * pv_base,
        })
    }

    fn shifted_curve(&self, name: &str, shift_bp: T) -> Result<DiscountCurve<T>, RiskError> {
        trace!(scenario = name, shift_bp = to_f64(shift_bp), "bumping curve");
        self.curve
            .bumped(shift_bp)
            .map_err(|e| RiskError::InvalidScenario {
                scenario: name.to_string(),
                reason: e.to_string(),
            })
    }
}

fn value_trade<T: Float>(trade: &Trade<T>, curve: &DiscountCurve<T>) -> Result<T, RiskError> {
    trade
        .instrument()
        .npv(curve)
        .map_err(|source| RiskError::Valuation {
            trade_id: trade.id().clone(),
            source,
        })
}

#[inline]
fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use pricer_core::market_data::CurveInterpolation;
    use pricer_core::types::{KeyUnit, PricingError};
    use pricer_models::instruments::{Bond, Caplet};

    fn day_step_curve() -> DiscountCurve<f64> {
        DiscountCurve::new(
            &[0.0, 365.0, 1825.0, 3650.0],
            &[1.0, 0.98, 0.90, 0.82],
            KeyUnit::Days,
            CurveInterpolation::Step,
        )
        .unwrap()
    }

    fn bond_portfolio() -> Portfolio<f64> {
        Portfolio::<f64>::new()
            .with_trade("BOND-5Y", Bond::new(0.03, 5.0, 2).unwrap())
            .and_then(|p| p.with_trade("BOND-10Y", Bond::new(0.04, 10.0, 2).unwrap()))
            .unwrap()
    }

    // ================================================================
    // Scenario run
    // ================================================================

    #[test]
    fn test_run_reference_bonds() {
        let curve = day_step_curve();
        let engine = ScenarioEngine::new(&curve, bond_portfolio());
        let result = engine.run(&Scenario::new("+25bp", 25.0)).unwrap();

        assert_eq!(result.name, "+25bp");
        assert_relative_eq!(result.pv_base, 220.46, max_relative = 1e-12);
        assert_relative_eq!(result.pv_shocked, 216.58232938012964, max_relative = 1e-12);
        assert_relative_eq!(result.dv01, 0.15668601880113897, max_relative = 1e-9);
        assert_abs_diff_eq!(result.convexity, 0.0001272686088213959, epsilon = 1e-10);
        assert!(result.is_loss());
    }

    #[test]
    fn test_zero_shift_reproduces_base() {
        let curve = day_step_curve();
        let engine = ScenarioEngine::new(&curve, bond_portfolio());
        let result = engine.run(&Scenario::base()).unwrap();

        assert_eq!(result.pv_shocked, result.pv_base);
        assert_eq!(result.pnl(), 0.0);
    }

    #[test]
    fn test_empty_portfolio_is_zero() {
        let curve = day_step_curve();
        let engine = ScenarioEngine::new(&curve, Portfolio::<f64>::new());
        let result = engine.run(&Scenario::new("+25bp", 25.0)).unwrap();

        assert_eq!(result.pv_base, 0.0);
        assert_eq!(result.pv_shocked, 0.0);
        assert_eq!(result.dv01, 0.0);
        assert_eq!(result.convexity, 0.0);
    }

    #[test]
    fn test_run_all_matches_individual_runs() {
        let curve = day_step_curve();
        let engine = ScenarioEngine::new(&curve, bond_portfolio());
        let scenarios = vec![
            Scenario::new("+25bp", 25.0),
            Scenario::new("-10bp", -10.0),
            Scenario::base(),
        ];

        let batch = engine.run_all(&scenarios).unwrap();
        assert_eq!(batch.len(), 3);
        for (scenario, result) in scenarios.iter().zip(&batch) {
            assert_eq!(result, &engine.run(scenario).unwrap());
        }
        assert!(engine.run_all(&[]).unwrap().is_empty());
    }

    // ================================================================
    // Failure propagation
    // ================================================================

    #[test]
    fn test_failing_instrument_aborts_run() {
        let curve = day_step_curve();
        let portfolio = bond_portfolio()
            .with_trade("CAPLET-BAD", Caplet::new(2.0, 0.03, 0.03, 0.0, 0.5).unwrap())
            .unwrap();
        let engine = ScenarioEngine::new(&curve, portfolio);

        match engine.run(&Scenario::new("+25bp", 25.0)).unwrap_err() {
            RiskError::Valuation { trade_id, source } => {
                assert_eq!(trade_id.as_str(), "CAPLET-BAD");
                assert!(matches!(source, PricingError::InvalidMarketInput(_)));
            }
            other => panic!("Expected Valuation, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_shift_is_invalid_scenario() {
        let curve = day_step_curve();
        let engine = ScenarioEngine::new(&curve, bond_portfolio());

        match engine.run(&Scenario::new("broken", f64::NAN)).unwrap_err() {
            RiskError::InvalidScenario { scenario, .. } => assert_eq!(scenario, "broken"),
            other => panic!("Expected InvalidScenario, got {:?}", other),
        }
    }

    // ================================================================
    // Curve and parallel settings
    // ================================================================

    #[test]
    fn test_with_curve_revalues() {
        let curve = day_step_curve();
        let flatter = curve.bumped(50.0).unwrap();
        let engine = ScenarioEngine::new(&curve, bond_portfolio());
        let base = engine.portfolio_value(engine.curve()).unwrap();

        let engine = engine.with_curve(&flatter);
        assert!(engine.portfolio_value(engine.curve()).unwrap() < base);
        assert_eq!(engine.portfolio().len(), 2);
    }

    #[test]
    fn test_parallel_path_bit_identical() {
        let curve = day_step_curve();
        let instruments: Vec<Bond<f64>> = (1..=400)
            .map(|i| Bond::new(0.01 + 0.0001 * i as f64, (1 + i % 10) as f64, 2).unwrap())
            .collect();
        let portfolio = Portfolio::<f64>::from_instruments(instruments);
        let scenario = Scenario::new("+25bp", 25.0);

        let sequential = ScenarioEngine::new(&curve, portfolio.clone())
            .with_parallel_config(ParallelConfig::sequential())
            .run(&scenario)
            .unwrap();
        let parallel = ScenarioEngine::new(&curve, portfolio)
            .with_parallel_config(ParallelConfig::new(8, 1))
            .run(&scenario)
            .unwrap();

        assert_eq!(sequential.pv_base.to_bits(), parallel.pv_base.to_bits());
        assert_eq!(sequential.pv_shocked.to_bits(), parallel.pv_shocked.to_bits());
        assert_eq!(sequential.dv01.to_bits(), parallel.dv01.to_bits());
        assert_eq!(sequential.convexity.to_bits(), parallel.convexity.to_bits());
    }
}
