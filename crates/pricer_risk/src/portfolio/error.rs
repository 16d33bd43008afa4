//! Portfolio error types.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors that can occur while assembling a portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortfolioError {
    /// Duplicate trade ID encountered.
    #[error("Duplicate trade ID: {0}")]
    DuplicateTrade(String),

    /// Trade ID is empty or blank.
    #[error("Invalid trade ID: '{0}'")]
    InvalidTradeId(String),
}

impl From<PortfolioError> for PricingError {
    fn from(err: PortfolioError) -> Self {
        PricingError::InvalidInstrument(err.to_string())
    }
}
