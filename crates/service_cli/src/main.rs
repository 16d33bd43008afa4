//! ratesrisk - Command Line Front End for Rates Pricing and Scenario Risk
//!
//! # Commands
//!
//! - `ratesrisk caplets <market.csv>` - Black-76 price, delta and vega per caplet
//! - `ratesrisk scenario <market.csv> [--portfolio <book.csv>]` - Parallel-shift
//!   scenarios with DV01 and convexity
//! - `ratesrisk demo` - Two-bond book on a built-in step curve
//!
//! # Configuration
//!
//! Settings resolve in the order CLI flags > `RATESRISK_*` environment
//! variables > TOML config file > defaults. Logs go to stderr; results go to
//! stdout.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod loader;
mod output;

pub use error::{CliError, Result};

use config::{build_config, CliArgs, CliConfig};

/// Rates pricing and scenario risk CLI
#[derive(Parser)]
#[command(name = "ratesrisk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, csv, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Curve interpolation (log-linear, step)
    #[arg(short, long, global = true)]
    interpolation: Option<String>,

    /// Unit of curve keys in market files (years, days)
    #[arg(short, long, global = true)]
    key_unit: Option<String>,

    /// Portfolio size at which valuation runs in parallel
    #[arg(long, global = true)]
    parallel_threshold: Option<usize>,

    /// Parallel shift in basis points; repeat for several scenarios
    #[arg(short, long = "shift", global = true, allow_negative_numbers = true)]
    shifts: Vec<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price the caplets in a market file
    Caplets {
        /// Market file with curve and caplet sections
        market: PathBuf,
    },

    /// Run parallel-shift scenarios
    Scenario {
        /// Market file with the discount curve
        market: PathBuf,

        /// Portfolio file; defaults to the market file's caplets
        #[arg(short, long)]
        portfolio: Option<PathBuf>,
    },

    /// Run the built-in two-bond example
    Demo,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            output_format: self.format.clone(),
            interpolation: self.interpolation.clone(),
            key_unit: self.key_unit.clone(),
            parallel_threshold: self.parallel_threshold,
            shifts_bp: self.shifts.clone(),
        }
    }
}

fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    init_tracing(&config);
    info!(
        format = %config.output_format,
        interpolation = %config.interpolation,
        key_unit = %config.key_unit,
        "ratesrisk starting"
    );
    debug!(?config, "resolved configuration");

    match &cli.command {
        Commands::Caplets { market } => commands::caplets::run(market, &config),
        Commands::Scenario { market, portfolio } => {
            commands::scenario::run(market, portfolio.as_deref(), &config)
        }
        Commands::Demo => commands::demo::run(&config),
    }
}
