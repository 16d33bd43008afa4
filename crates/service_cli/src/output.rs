//! Result formatting for table, CSV and JSON output.

use pricer_models::analytical::CapletValuation;
use pricer_models::instruments::Caplet;
use pricer_risk::scenarios::ScenarioResult;
use serde::Serialize;
use std::io::Write;

use crate::config::OutputFormat;
use crate::Result;

/// One priced caplet.
#[derive(Debug, Clone, Serialize)]
pub struct CapletRow {
    /// Expiry in years
    #[serde(rename = "T")]
    pub expiry: f64,
    /// Forward rate
    #[serde(rename = "F")]
    pub forward: f64,
    /// Strike rate
    #[serde(rename = "K")]
    pub strike: f64,
    /// Black volatility
    pub sigma: f64,
    /// Accrual fraction
    pub tau: f64,
    /// Discounted premium
    pub price: f64,
    /// Forward delta
    pub delta: f64,
    /// Vega
    pub vega: f64,
}

impl CapletRow {
    /// Combines caplet terms with their valuation.
    pub fn new(caplet: &Caplet<f64>, valuation: &CapletValuation<f64>) -> Self {
        Self {
            expiry: caplet.expiry(),
            forward: caplet.forward(),
            strike: caplet.strike(),
            sigma: caplet.volatility(),
            tau: caplet.accrual(),
            price: valuation.price,
            delta: valuation.delta,
            vega: valuation.vega,
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            format!("{}", self.expiry),
            format!("{:.4}", self.forward),
            format!("{:.4}", self.strike),
            format!("{:.4}", self.sigma),
            format!("{}", self.tau),
            format!("{:.6}", self.price),
            format!("{:.6}", self.delta),
            format!("{:.6}", self.vega),
        ]
    }
}

/// One scenario line.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioRow {
    /// Scenario name
    pub name: String,
    /// Base portfolio value
    pub pv_base: f64,
    /// Shocked portfolio value
    pub pv_shocked: f64,
    /// `pv_shocked - pv_base`
    pub pnl: f64,
    /// Value change for a 1bp fall in rates
    pub dv01: f64,
    /// Second difference for ±1bp
    pub convexity: f64,
}

impl From<&ScenarioResult<f64>> for ScenarioRow {
    fn from(result: &ScenarioResult<f64>) -> Self {
        Self {
            name: result.name.clone(),
            pv_base: result.pv_base,
            pv_shocked: result.pv_shocked,
            pnl: result.pnl(),
            dv01: result.dv01,
            convexity: result.convexity,
        }
    }
}

impl ScenarioRow {
    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            format!("{:.6}", self.pv_base),
            format!("{:.6}", self.pv_shocked),
            format!("{:.6}", self.pnl),
            format!("{:.6}", self.dv01),
            format!("{:.6}", self.convexity),
        ]
    }
}

const CAPLET_HEADERS: [&str; 8] = ["T", "F", "K", "sigma", "tau", "price", "delta", "vega"];
const SCENARIO_HEADERS: [&str; 6] = ["Scenario", "PV", "Shocked", "PnL", "DV01", "Conv"];

/// Writes caplet rows in the requested format.
pub fn write_caplets<W: Write>(out: &mut W, rows: &[CapletRow], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let cells: Vec<_> = rows.iter().map(CapletRow::cells).collect();
            write_table(out, &CAPLET_HEADERS, &cells)
        }
        OutputFormat::Csv => write_csv(out, rows),
        OutputFormat::Json => write_json(out, rows),
    }
}

/// Writes scenario rows in the requested format.
pub fn write_scenarios<W: Write>(
    out: &mut W,
    rows: &[ScenarioRow],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let cells: Vec<_> = rows.iter().map(ScenarioRow::cells).collect();
            write_table(out, &SCENARIO_HEADERS, &cells)
        }
        OutputFormat::Csv => write_csv(out, rows),
        OutputFormat::Json => write_json(out, rows),
    }
}

fn write_csv<W: Write, R: Serialize>(out: &mut W, rows: &[R]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json<W: Write, R: Serialize>(out: &mut W, rows: &[R]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)?;
    Ok(())
}

/// Box-drawn table; text columns left-aligned, numbers right-aligned.
fn write_table<W: Write>(out: &mut W, headers: &[&str], rows: &[Vec<String>]) -> Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };

    writeln!(out, "{}", rule("┌", "┬", "┐"))?;
    let header: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!(" {:<w$} ", h, w = w))
        .collect();
    writeln!(out, "│{}│", header.join("│"))?;
    writeln!(out, "{}", rule("├", "┼", "┤"))?;

    if rows.is_empty() {
        let inner: usize = widths.iter().map(|w| w + 3).sum::<usize>() - 1;
        writeln!(out, "│{:<w$}│", " (no data)", w = inner)?;
    }
    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| {
                if cell.parse::<f64>().is_ok() {
                    format!(" {:>w$} ", cell, w = w)
                } else {
                    format!(" {:<w$} ", cell, w = w)
                }
            })
            .collect();
        writeln!(out, "│{}│", cells.join("│"))?;
    }

    writeln!(out, "{}", rule("└", "┴", "┘"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_rows() -> Vec<ScenarioRow> {
        vec![ScenarioRow {
            name: "+25bp".to_string(),
            pv_base: 220.46,
            pv_shocked: 216.58232938012964,
            pnl: 216.58232938012964 - 220.46,
            dv01: 0.15668601880113897,
            convexity: 0.0001272686088213959,
        }]
    }

    fn caplet_rows() -> Vec<CapletRow> {
        vec![CapletRow {
            expiry: 2.0,
            forward: 0.037,
            strike: 0.04,
            sigma: 0.25,
            tau: 0.5,
            price: 0.001879492977830357,
            delta: 0.22496755108469277,
            vega: 0.01,
        }]
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_scenario_table() {
        let text = render(|out| write_scenarios(out, &scenario_rows(), OutputFormat::Table));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[1].contains("Scenario"));
        assert!(lines[3].contains("+25bp"));
        assert!(lines[3].contains("220.460000"));
        assert!(lines[3].contains("0.156686"));
        assert!(lines[4].starts_with('└'));

        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_empty_table() {
        let text = render(|out| write_scenarios(out, &[], OutputFormat::Table));
        assert!(text.contains("(no data)"));
        let lines: Vec<&str> = text.lines().collect();
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_caplet_csv_headers() {
        let text = render(|out| write_caplets(out, &caplet_rows(), OutputFormat::Csv));
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("T,F,K,sigma,tau,price,delta,vega"));
        assert!(lines.next().unwrap().starts_with("2.0,0.037,0.04,0.25,0.5,0.00187949"));
    }

    #[test]
    fn test_scenario_json() {
        let text = render(|out| write_scenarios(out, &scenario_rows(), OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["name"], "+25bp");
        assert_eq!(value[0]["pv_base"], 220.46);
        assert!(value[0]["pnl"].as_f64().unwrap() < 0.0);
    }
}
