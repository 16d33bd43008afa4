//! Market data and portfolio file loaders.
//!
//! # Market file
//!
//! One CSV holds the curve and, optionally, caplets:
//!
//! ```text
//! maturity,zero_rate
//! 0.5,0.03
//! 1,0.032
//! 2,0.035
//!
//! T,F,K,sigma,tau
//! 2,0.037,0.04,0.25,0.5
//! ```
//!
//! Curve rows are `key,zero_rate` and are converted with
//! `df = exp(-zero_rate * key_in_years)`. A leading non-numeric header is
//! skipped. A row whose first field starts with `T` switches to caplet rows
//! `T,F,K,sigma,tau`. Lines starting with `#` and blank lines are ignored.
//!
//! # Portfolio file
//!
//! ```text
//! trade_id,kind,p1,p2,p3,p4,p5
//! BOND-5Y,bond,0.03,5,2,,
//! CAP-2Y,caplet,2,0.037,0.04,0.25,0.5
//! ```
//!
//! `bond` rows are `coupon,tenor_years,frequency[,face]`; `caplet` rows are
//! `T,F,K,sigma,tau`.

use pricer_core::market_data::{CurveInterpolation, DiscountCurve};
use pricer_core::types::{KeyUnit, PricingError};
use pricer_models::instruments::{Bond, Caplet, Instrument, Valuable};
use pricer_risk::portfolio::Portfolio;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::{CliError, Result};

/// Error text when fewer than two curve rows are present.
pub const CURVE_SECTION_ERROR: &str = "curve section missing or too short";

/// Error text when caplets are required but absent.
pub const CAPLET_SECTION_ERROR: &str = "caplet section missing";

/// Contents of a market file.
#[derive(Debug, Clone)]
pub struct MarketData {
    /// Discount curve built from the zero-rate rows
    pub curve: DiscountCurve<f64>,
    /// Caplets in file order
    pub caplets: Vec<Caplet<f64>>,
}

impl MarketData {
    /// Caplets, failing if the file had none.
    pub fn require_caplets(&self, source: &str) -> Result<&[Caplet<f64>]> {
        if self.caplets.is_empty() {
            return Err(CliError::MissingSection {
                path: source.to_string(),
                message: CAPLET_SECTION_ERROR.to_string(),
            });
        }
        Ok(&self.caplets)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Curve,
    Caplets,
}

/// Reads a market file from disk.
pub fn load_market_file(
    path: &Path,
    key_unit: KeyUnit,
    interpolation: CurveInterpolation,
) -> Result<MarketData> {
    let source = path.display().to_string();
    if !path.exists() {
        return Err(CliError::FileNotFound(source));
    }

    let market = parse_market_data(File::open(path)?, &source, key_unit, interpolation)?;
    info!(
        file = %source,
        knots = market.curve.len(),
        caplets = market.caplets.len(),
        %interpolation,
        %key_unit,
        "market data loaded"
    );
    Ok(market)
}

/// Parses market CSV text. `source` names the input in error messages.
pub fn parse_market_data<R: Read>(
    reader: R,
    source: &str,
    key_unit: KeyUnit,
    interpolation: CurveInterpolation,
) -> Result<MarketData> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut section = Section::Curve;
    let mut keys = Vec::new();
    let mut zero_rates = Vec::new();
    let mut caplets = Vec::new();

    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        if record.iter().all(str::is_empty) {
            continue;
        }

        let first = record.get(0).unwrap_or_default();
        if first.starts_with('T') {
            debug!(line, "caplet section starts");
            section = Section::Caplets;
            continue;
        }

        match section {
            Section::Curve => {
                if keys.is_empty() && first.parse::<f64>().is_err() {
                    debug!(line, header = first, "skipping curve header");
                    continue;
                }
                let [key, rate] = parse_fields::<2>(&record, source, line)?;
                keys.push(key);
                zero_rates.push(rate);
            }
            Section::Caplets => {
                let [expiry, forward, strike, sigma, tau] =
                    parse_fields::<5>(&record, source, line)?;
                let caplet = Caplet::new(expiry, forward, strike, sigma, tau).map_err(|e| {
                    CliError::Parse {
                        path: source.to_string(),
                        line,
                        message: e.to_string(),
                    }
                })?;
                caplets.push(caplet);
            }
        }
    }

    if keys.len() < 2 {
        return Err(CliError::MissingSection {
            path: source.to_string(),
            message: CURVE_SECTION_ERROR.to_string(),
        });
    }

    debug!(rows = keys.len(), "curve rows read");
    let curve = DiscountCurve::from_zero_rates(&keys, &zero_rates, key_unit, interpolation)
        .map_err(PricingError::from)?;

    Ok(MarketData { curve, caplets })
}

/// Reads the first `N` fields as numbers; further non-empty fields are an error.
fn parse_fields<const N: usize>(
    record: &csv::StringRecord,
    source: &str,
    line: u64,
) -> Result<[f64; N]> {
    let parse_error = |message: String| CliError::Parse {
        path: source.to_string(),
        line,
        message,
    };

    let populated = record.iter().filter(|f| !f.is_empty()).count();
    if record.len() < N || populated != N {
        return Err(parse_error(format!(
            "expected {} fields, found {}",
            N, populated
        )));
    }

    let mut values = [0.0; N];
    for (i, value) in values.iter_mut().enumerate() {
        let field = &record[i];
        *value = field
            .parse()
            .map_err(|_| parse_error(format!("field {} is not a number: '{}'", i + 1, field)))?;
    }
    Ok(values)
}

#[derive(Debug, Deserialize)]
struct PortfolioRow {
    trade_id: String,
    kind: String,
    #[serde(default)]
    p1: Option<f64>,
    #[serde(default)]
    p2: Option<f64>,
    #[serde(default)]
    p3: Option<f64>,
    #[serde(default)]
    p4: Option<f64>,
    #[serde(default)]
    p5: Option<f64>,
}

impl PortfolioRow {
    fn into_instrument(self) -> std::result::Result<Instrument<f64>, String> {
        match self.kind.to_lowercase().as_str() {
            "bond" => {
                let coupon = required(self.p1, "coupon")?;
                let tenor = required(self.p2, "tenor_years")?;
                let frequency = payments_per_year(required(self.p3, "frequency")?)?;
                let bond = Bond::new(coupon, tenor, frequency).map_err(|e| e.to_string())?;
                let bond = match self.p4 {
                    Some(face) => bond.with_face_value(face).map_err(|e| e.to_string())?,
                    None => bond,
                };
                Ok(bond.into())
            }
            "caplet" => {
                let caplet = Caplet::new(
                    required(self.p1, "T")?,
                    required(self.p2, "F")?,
                    required(self.p3, "K")?,
                    required(self.p4, "sigma")?,
                    required(self.p5, "tau")?,
                )
                .map_err(|e| e.to_string())?;
                Ok(caplet.into())
            }
            other => Err(format!("unknown instrument kind '{}'", other)),
        }
    }
}

fn required(value: Option<f64>, name: &str) -> std::result::Result<f64, String> {
    value.ok_or_else(|| format!("missing {}", name))
}

fn payments_per_year(value: f64) -> std::result::Result<u32, String> {
    if value.is_finite() && value >= 1.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(format!("frequency must be a positive integer, got {}", value))
    }
}

/// Reads a portfolio file from disk.
pub fn load_portfolio_file(path: &Path) -> Result<Portfolio<f64>> {
    let source = path.display().to_string();
    if !path.exists() {
        return Err(CliError::FileNotFound(source));
    }

    let portfolio = parse_portfolio(File::open(path)?, &source)?;
    info!(file = %source, trades = portfolio.len(), "portfolio loaded");
    Ok(portfolio)
}

/// Parses portfolio CSV text. `source` names the input in error messages.
pub fn parse_portfolio<R: Read>(reader: R, source: &str) -> Result<Portfolio<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut portfolio = Portfolio::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        let parse_error = |message: String| CliError::Parse {
            path: source.to_string(),
            line,
            message,
        };

        let row: PortfolioRow = record
            .deserialize(Some(&headers))
            .map_err(|e| parse_error(e.to_string()))?;
        let trade_id = row.trade_id.clone();
        let instrument = row.into_instrument().map_err(parse_error)?;

        debug!(line, trade = %trade_id, kind = instrument.type_name(), "trade read");
        portfolio.add(trade_id, instrument)?;
    }
    Ok(portfolio)
}
