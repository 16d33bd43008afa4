//! # Pricer Risk (L4: Application)
//!
//! Portfolio scenario risk under parallel rate shocks.
//!
//! This crate provides:
//! - Portfolio and trade structures with unique trade IDs
//! - Named parallel shift scenarios and standard presets
//! - A scenario engine producing PVs, DV01 and convexity
//! - Rayon-based valuation with deterministic summation
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  portfolio/  - Trade, TradeId,          │
//! │               Portfolio                 │
//! │  scenarios/  - Scenario, presets,       │
//! │               ScenarioEngine            │
//! │  parallel/   - Rayon utilities          │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Bond, Caplet, Black76Caplet            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::{CurveInterpolation, DiscountCurve};
//! use pricer_core::types::KeyUnit;
//! use pricer_models::instruments::{Bond, Caplet};
//! use pricer_risk::portfolio::PortfolioBuilder;
//! use pricer_risk::scenarios::{PresetScenarioType, ScenarioEngine};
//!
//! let curve = DiscountCurve::new(
//!     &[0.5_f64, 1.0, 2.0, 5.0, 10.0],
//!     &[0.985, 0.968, 0.932, 0.818, 0.657],
//!     KeyUnit::Years,
//!     CurveInterpolation::LogLinear,
//! )
//! .unwrap();
//!
//! let portfolio = PortfolioBuilder::<f64>::new()
//!     .add_trade("BOND-5Y", Bond::new(0.03, 5.0, 2).unwrap())
//!     .add_trade("CAPLET-2Y", Caplet::new(2.0, 0.037, 0.04, 0.25, 0.5).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let engine = ScenarioEngine::new(&curve, portfolio);
//! let scenarios: Vec<_> = PresetScenarioType::rate_scenarios()
//!     .iter()
//!     .map(|p| p.scenario::<f64>())
//!     .collect();
//! let results = engine.run_all(&scenarios).unwrap();
//!
//! assert_eq!(results.len(), scenarios.len());
//! assert!(results.iter().all(|r| r.dv01 > 0.0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod parallel;
pub mod portfolio;
pub mod scenarios;

pub use error::RiskError;
