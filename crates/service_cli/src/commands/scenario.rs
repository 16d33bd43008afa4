//! `ratesrisk scenario`: parallel-shift scenarios over a portfolio.

use pricer_core::market_data::DiscountCurve;
use pricer_models::instruments::Instrument;
use pricer_risk::parallel::{ParallelConfig, DEFAULT_BATCH_SIZE};
use pricer_risk::portfolio::Portfolio;
use pricer_risk::scenarios::ScenarioEngine;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::config::CliConfig;
use crate::loader::{load_market_file, load_portfolio_file};
use crate::output::{write_scenarios, ScenarioRow};
use crate::Result;

/// Runs the configured scenarios.
///
/// Trades come from `portfolio` when given, otherwise from the caplet
/// section of the market file.
pub fn run(market: &Path, portfolio: Option<&Path>, config: &CliConfig) -> Result<()> {
    let data = load_market_file(market, config.key_unit, config.interpolation)?;
    let portfolio = match portfolio {
        Some(path) => load_portfolio_file(path)?,
        None => {
            let caplets = data.require_caplets(&market.display().to_string())?;
            Portfolio::from_instruments(caplets.iter().copied().map(Instrument::from))
        }
    };

    let stdout = std::io::stdout();
    execute(&data.curve, portfolio, config, &mut stdout.lock())
}

/// Runs the configured scenarios against an in-memory curve and portfolio.
pub fn execute<W: Write>(
    curve: &DiscountCurve<f64>,
    portfolio: Portfolio<f64>,
    config: &CliConfig,
    out: &mut W,
) -> Result<()> {
    let trades = portfolio.len();
    let engine = ScenarioEngine::new(curve, portfolio).with_parallel_config(ParallelConfig::new(
        DEFAULT_BATCH_SIZE,
        config.parallel_threshold,
    ));

    let results = engine.run_all(&config.engine_scenarios())?;
    info!(trades, scenarios = results.len(), "scenario run complete");

    let rows: Vec<ScenarioRow> = results.iter().map(ScenarioRow::from).collect();
    write_scenarios(out, &rows, config.output_format)
}
