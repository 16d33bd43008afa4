//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line flags.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (`RATESRISK_*`)
//! 3. Config file
//! 4. Default values

use pricer_core::market_data::CurveInterpolation;
use pricer_core::types::KeyUnit;
use pricer_risk::parallel::DEFAULT_PARALLEL_THRESHOLD;
use pricer_risk::scenarios::Scenario;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "RATESRISK_LOG_LEVEL";
/// Environment variable overriding the output format.
pub const ENV_OUTPUT_FORMAT: &str = "RATESRISK_OUTPUT_FORMAT";
/// Environment variable overriding the curve interpolation.
pub const ENV_INTERPOLATION: &str = "RATESRISK_INTERPOLATION";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown output format.
    #[error("Invalid output format: {0}. Must be one of: table, csv, json")]
    InvalidOutputFormat(String),

    /// Unknown interpolation policy.
    #[error("Invalid interpolation: {0}. Must be one of: log-linear, step")]
    InvalidInterpolation(String),

    /// Unknown key unit.
    #[error("Invalid key unit: {0}. Must be one of: years, days")]
    InvalidKeyUnit(String),

    /// Scenario definition cannot be used.
    #[error("Invalid scenario '{name}': {reason}")]
    InvalidScenario {
        /// Scenario name
        name: String,
        /// What is wrong
        reason: String,
    },

    /// Config file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Everything, including per-curve bumps
    Trace,
    /// Per-scenario results and loader detail
    Debug,
    /// Progress messages
    #[default]
    Info,
    /// Warnings only
    Warn,
    /// Errors only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Result rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Boxed, human-readable table
    #[default]
    Table,
    /// CSV with a header row
    Csv,
    /// Pretty-printed JSON array
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl OutputFormat {
    /// Lowercase name as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One configured parallel shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Scenario label
    pub name: String,
    /// Parallel shift in basis points
    pub shift_bp: f64,
}

impl ScenarioConfig {
    /// Scenario named after its shift, e.g. `+25bp`.
    pub fn from_shift(shift_bp: f64) -> Self {
        Self {
            name: format!("{:+}bp", shift_bp),
            shift_bp,
        }
    }

    /// Engine scenario.
    pub fn to_scenario(&self) -> Scenario<f64> {
        Scenario::new(self.name.clone(), self.shift_bp)
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Result rendering
    #[serde(deserialize_with = "deserialize_output_format")]
    pub output_format: OutputFormat,
    /// Interpolation policy for curves read from market files
    pub interpolation: CurveInterpolation,
    /// Unit of curve keys in market files
    pub key_unit: KeyUnit,
    /// Portfolio size at which valuation moves to the rayon pool
    pub parallel_threshold: usize,
    /// Scenarios run by the `scenario` command
    pub scenarios: Vec<ScenarioConfig>,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_output_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            output_format: OutputFormat::Table,
            interpolation: CurveInterpolation::LogLinear,
            key_unit: KeyUnit::Years,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            scenarios: vec![ScenarioConfig::from_shift(25.0)],
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply `RATESRISK_*` overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = lookup(ENV_OUTPUT_FORMAT) {
            self.output_format = OutputFormat::from_str(&format)?;
        }
        if let Some(interpolation) = lookup(ENV_INTERPOLATION) {
            self.interpolation = CurveInterpolation::from_str(&interpolation)
                .map_err(|_| ConfigError::InvalidInterpolation(interpolation.clone()))?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(format) = &cli.output_format {
            self.output_format = OutputFormat::from_str(format)?;
        }
        if let Some(interpolation) = &cli.interpolation {
            self.interpolation = CurveInterpolation::from_str(interpolation)
                .map_err(|_| ConfigError::InvalidInterpolation(interpolation.clone()))?;
        }
        if let Some(unit) = &cli.key_unit {
            self.key_unit =
                KeyUnit::from_str(unit).map_err(|_| ConfigError::InvalidKeyUnit(unit.clone()))?;
        }
        if let Some(threshold) = cli.parallel_threshold {
            self.parallel_threshold = threshold;
        }
        if !cli.shifts_bp.is_empty() {
            self.scenarios = cli
                .shifts_bp
                .iter()
                .map(|&bp| ScenarioConfig::from_shift(bp))
                .collect();
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scenarios.is_empty() {
            return Err(ConfigError::InvalidScenario {
                name: String::new(),
                reason: "at least one scenario is required".to_string(),
            });
        }
        for scenario in &self.scenarios {
            if scenario.name.trim().is_empty() {
                return Err(ConfigError::InvalidScenario {
                    name: scenario.name.clone(),
                    reason: "name must not be empty".to_string(),
                });
            }
            if !scenario.shift_bp.is_finite() {
                return Err(ConfigError::InvalidScenario {
                    name: scenario.name.clone(),
                    reason: format!("shift must be finite, got {}", scenario.shift_bp),
                });
            }
        }
        Ok(())
    }

    /// Engine scenarios in configured order.
    pub fn engine_scenarios(&self) -> Vec<Scenario<f64>> {
        self.scenarios.iter().map(ScenarioConfig::to_scenario).collect()
    }
}

/// Configuration-related command-line flags
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub output_format: Option<String>,
    /// Interpolation override
    pub interpolation: Option<String>,
    /// Key unit override
    pub key_unit: Option<String>,
    /// Parallel threshold override
    pub parallel_threshold: Option<usize>,
    /// Scenario shifts replacing the configured list
    pub shifts_bp: Vec<f64>,
}

/// Build configuration from all sources, reading the process environment
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// Build configuration with an explicit environment lookup
pub fn build_config_with_env<F>(cli: &CliArgs, env: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env(env)?;
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}
