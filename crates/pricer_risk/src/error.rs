//! Risk engine error types.

use crate::portfolio::{PortfolioError, TradeId};
use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors raised while running scenarios over a portfolio.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
/// use pricer_risk::RiskError;
/// use pricer_risk::portfolio::TradeId;
///
/// let err = RiskError::Valuation {
///     trade_id: TradeId::new("T0002"),
///     source: PricingError::InvalidMarketInput("Invalid volatility: σ = 0".to_string()),
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Valuation failed for trade T0002: Invalid market input: Invalid volatility: σ = 0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// An instrument could not be valued; the whole run is aborted.
    #[error("Valuation failed for trade {trade_id}: {source}")]
    Valuation {
        /// Trade whose valuation failed
        trade_id: TradeId,
        /// Underlying pricing failure
        #[source]
        source: PricingError,
    },

    /// The scenario shift cannot be applied to the base curve.
    #[error("Invalid scenario '{scenario}': {reason}")]
    InvalidScenario {
        /// Scenario name
        scenario: String,
        /// Why the shift was rejected
        reason: String,
    },

    /// Portfolio assembly failed.
    #[error(transparent)]
    Portfolio(#[from] PortfolioError),
}

impl RiskError {
    /// Kind of the underlying failure, as reported by [`PricingError::kind`].
    pub fn kind(&self) -> &'static str {
        match self {
            RiskError::Valuation { source, .. } => source.kind(),
            RiskError::InvalidScenario { .. } => "InvalidScenario",
            RiskError::Portfolio(_) => "InvalidInstrument",
        }
    }
}

impl From<RiskError> for PricingError {
    fn from(err: RiskError) -> Self {
        match err {
            RiskError::Valuation { trade_id, source } => {
                let context = |msg: String| format!("trade {}: {}", trade_id, msg);
                match source {
                    PricingError::InvalidCurve(m) => PricingError::InvalidCurve(context(m)),
                    PricingError::InvalidInstrument(m) => {
                        PricingError::InvalidInstrument(context(m))
                    }
                    PricingError::InvalidMarketInput(m) => {
                        PricingError::InvalidMarketInput(context(m))
                    }
                    PricingError::InvalidScenario(m) => PricingError::InvalidScenario(context(m)),
                    PricingError::NumericalInstability(m) => {
                        PricingError::NumericalInstability(context(m))
                    }
                }
            }
            RiskError::InvalidScenario { scenario, reason } => {
                PricingError::InvalidScenario(format!("{}: {}", scenario, reason))
            }
            RiskError::Portfolio(e) => e.into(),
        }
    }
}
