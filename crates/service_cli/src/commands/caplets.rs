//! `ratesrisk caplets`: Black-76 prices and Greeks for every caplet in a
//! market file.

use pricer_core::types::PricingError;
use pricer_models::analytical::Black76Caplet;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::loader::{load_market_file, MarketData};
use crate::output::{write_caplets, CapletRow};
use crate::Result;

/// Prices the caplets in `market` and prints them to stdout.
pub fn run(market: &Path, config: &CliConfig) -> Result<()> {
    let data = load_market_file(market, config.key_unit, config.interpolation)?;
    let stdout = std::io::stdout();
    execute(&data, &market.display().to_string(), config, &mut stdout.lock())
}

/// Prices already-loaded market data.
pub fn execute<W: Write>(
    data: &MarketData,
    source: &str,
    config: &CliConfig,
    out: &mut W,
) -> Result<()> {
    let caplets = data.require_caplets(source)?;

    let mut rows = Vec::with_capacity(caplets.len());
    for caplet in caplets {
        let valuation =
            Black76Caplet::valuation(&data.curve, caplet).map_err(PricingError::from)?;
        debug!(expiry = caplet.expiry(), price = valuation.price, "caplet priced");
        rows.push(CapletRow::new(caplet, &valuation));
    }

    info!(caplets = rows.len(), "caplets priced");
    write_caplets(out, &rows, config.output_format)
}
