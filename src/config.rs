//! Calculator configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.
//! Environment variables override whatever was loaded from file.

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Env var overriding `tolerance.principal`
pub const ENV_PRINCIPAL_TOLERANCE: &str = "AMORT_PRINCIPAL_TOLERANCE";
/// Env var overriding `tolerance.per_period`
pub const ENV_PERIOD_TOLERANCE: &str = "AMORT_PERIOD_TOLERANCE";
/// Env var overriding `tolerance.max_reported_periods`
pub const ENV_MAX_REPORTED_PERIODS: &str = "AMORT_MAX_REPORTED_PERIODS";
/// Env var overriding `retain_schedule`
pub const ENV_RETAIN_SCHEDULE: &str = "AMORT_RETAIN_SCHEDULE";

fn default_principal_tolerance() -> f64 { 1.0 }
fn default_per_period_tolerance() -> f64 { 1.0 }
fn default_max_reported_periods() -> usize { 5 }

/// Tolerances used by schedule validation, in currency units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToleranceConfig {
    /// Allowed gap between the principal column sum and the loan amount
    #[serde(default = "default_principal_tolerance")]
    pub principal: f64,

    /// Allowed gap between a payment and its principal + interest split
    #[serde(default = "default_per_period_tolerance")]
    pub per_period: f64,

    /// Offending periods listed individually before summarising the rest
    #[serde(default = "default_max_reported_periods")]
    pub max_reported_periods: usize,
}

impl ToleranceConfig {
    /// Allowed gap between total payment and principal + summed interest
    /// for a schedule of `periods` records
    pub fn total_tolerance(&self, periods: usize) -> f64 {
        self.principal + self.per_period * periods as f64
    }
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            principal: default_principal_tolerance(),
            per_period: default_per_period_tolerance(),
            max_reported_periods: default_max_reported_periods(),
        }
    }
}

/// Top-level calculator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub tolerance: ToleranceConfig,

    /// Keep the full schedule on every `LoanResult`
    #[serde(default)]
    pub retain_schedule: bool,
}

impl CalculatorConfig {
    /// Load from a JSON file
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Parse from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `AMORT_*` environment overrides
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = parse_override(&lookup, ENV_PRINCIPAL_TOLERANCE) {
            self.tolerance.principal = value;
        }
        if let Some(value) = parse_override(&lookup, ENV_PERIOD_TOLERANCE) {
            self.tolerance.per_period = value;
        }
        if let Some(value) = parse_override(&lookup, ENV_MAX_REPORTED_PERIODS) {
            self.tolerance.max_reported_periods = value;
        }
        if let Some(value) = parse_override(&lookup, ENV_RETAIN_SCHEDULE) {
            self.retain_schedule = value;
        }
        self
    }
}

fn parse_override<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}
