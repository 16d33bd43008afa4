//! CLI error types.

use pricer_core::types::PricingError;
use pricer_risk::portfolio::PortfolioError;
use pricer_risk::RiskError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `ratesrisk` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Input file is structurally incomplete.
    #[error("{path}: {message}")]
    MissingSection {
        /// Input file
        path: String,
        /// What is missing
        message: String,
    },

    /// Malformed row in an input file.
    #[error("{path}:{line}: {message}")]
    Parse {
        /// Input file
        path: String,
        /// 1-based line number
        line: u64,
        /// What is wrong with the row
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Curve, instrument or pricing failure.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Portfolio assembly failure.
    #[error(transparent)]
    Portfolio(#[from] PortfolioError),

    /// Scenario run failure.
    #[error(transparent)]
    Risk(#[from] RiskError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read or write error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;
