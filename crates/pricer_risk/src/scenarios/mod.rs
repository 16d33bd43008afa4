//! Scenario analysis under parallel rate shocks.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Scenario Engine                  │
//! ├──────────────────────────────────────────────┤
//! │  Scenario           - Named parallel shift   │
//! │  PresetScenarioType - Standard ±bp shocks    │
//! │  ScenarioEngine     - Bump, revalue, diff    │
//! │  ScenarioResult     - PVs, DV01, convexity   │
//! └──────────────────────────────────────────────┘
//! ```

mod engine;
mod presets;
mod shifts;

pub use engine::{ScenarioEngine, ScenarioResult, SENSITIVITY_BUMP_BP};
pub use presets::PresetScenarioType;
pub use shifts::Scenario;
