//! `ratesrisk demo`: a two-bond book on a day-keyed step curve.
//!
//! Needs no input files. With the default scenario the table output is
//!
//! ```text
//! ┌──────────┬────────────┬────────────┬───────────┬──────────┬──────────┐
//! │ Scenario │ PV         │ Shocked    │ PnL       │ DV01     │ Conv     │
//! ├──────────┼────────────┼────────────┼───────────┼──────────┼──────────┤
//! │ +25bp    │ 220.460000 │ 216.582329 │ -3.877671 │ 0.156686 │ 0.000127 │
//! └──────────┴────────────┴────────────┴───────────┴──────────┴──────────┘
//! ```

use pricer_core::market_data::{CurveInterpolation, DiscountCurve};
use pricer_core::types::{KeyUnit, PricingError};
use pricer_models::instruments::Bond;
use pricer_risk::portfolio::Portfolio;
use std::io::Write;

use crate::commands::scenario;
use crate::config::CliConfig;
use crate::Result;

/// Day keys of the demo curve.
const CURVE_DAYS: [f64; 4] = [0.0, 365.0, 1825.0, 3650.0];

/// Discount factors of the demo curve.
const CURVE_DFS: [f64; 4] = [1.0, 0.98, 0.90, 0.82];

/// Step curve on day keys.
pub fn demo_curve() -> Result<DiscountCurve<f64>> {
    let curve = DiscountCurve::new(&CURVE_DAYS, &CURVE_DFS, KeyUnit::Days, CurveInterpolation::Step)
        .map_err(PricingError::from)?;
    Ok(curve)
}

/// 5Y 3% and 10Y 4% semi-annual bonds.
pub fn demo_portfolio() -> Result<Portfolio<f64>> {
    let five_year = Bond::new(0.03, 5.0, 2).map_err(PricingError::from)?;
    let ten_year = Bond::new(0.04, 10.0, 2).map_err(PricingError::from)?;

    let mut portfolio = Portfolio::new();
    portfolio.add("BOND-5Y", five_year)?;
    portfolio.add("BOND-10Y", ten_year)?;
    Ok(portfolio)
}

/// Prints the demo scenarios to stdout.
pub fn run(config: &CliConfig) -> Result<()> {
    let stdout = std::io::stdout();
    execute(config, &mut stdout.lock())
}

/// Writes the demo scenarios to `out`.
pub fn execute<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    let curve = demo_curve()?;
    scenario::execute(&curve, demo_portfolio()?, config, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use approx::assert_relative_eq;

    const DEMO_TABLE: &str = "\
┌──────────┬────────────┬────────────┬───────────┬──────────┬──────────┐
│ Scenario │ PV         │ Shocked    │ PnL       │ DV01     │ Conv     │
├──────────┼────────────┼────────────┼───────────┼──────────┼──────────┤
│ +25bp    │ 220.460000 │ 216.582329 │ -3.877671 │ 0.156686 │ 0.000127 │
└──────────┴────────────┴────────────┴───────────┴──────────┴──────────┘
";

    #[test]
    fn test_demo_reference_values() {
        let config = CliConfig {
            output_format: OutputFormat::Json,
            ..CliConfig::default()
        };

        let mut buf = Vec::new();
        execute(&config, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let row = &value[0];

        assert_eq!(row["name"], "+25bp");
        assert_relative_eq!(row["pv_base"].as_f64().unwrap(), 220.46, max_relative = 1e-12);
        assert_relative_eq!(
            row["pv_shocked"].as_f64().unwrap(),
            216.58232938012964,
            max_relative = 1e-10
        );
        assert_relative_eq!(
            row["dv01"].as_f64().unwrap(),
            0.15668601880113897,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            row["convexity"].as_f64().unwrap(),
            0.0001272686088213959,
            max_relative = 1e-4
        );
    }

    #[test]
    fn test_demo_table() {
        let mut buf = Vec::new();
        execute(&CliConfig::default(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, DEMO_TABLE);
    }
}
