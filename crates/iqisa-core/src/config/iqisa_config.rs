//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AggregationConfig, EvaluationConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`IQISA_*`)
/// 2. Config file passed to [`IqisaConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IqisaConfig {
    pub aggregation: AggregationConfig,
    pub evaluation: EvaluationConfig,
}

impl IqisaConfig {
    /// Load configuration from an optional TOML file, then apply
    /// environment overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `IQISA_*` overrides read through `lookup`.
    ///
    /// Unset variables leave the current value alone; unparseable ones are errors.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_env(&lookup, "IQISA_EXTREMIZE_EXPONENT")? {
            self.aggregation.extremize_exponent = v;
        }
        if let Some(v) = parse_env(&lookup, "IQISA_DECAY_BASE")? {
            self.aggregation.decay_base = v;
        }
        if let Some(v) = parse_env(&lookup, "IQISA_DECAY_PERIOD_SECS")? {
            self.aggregation.decay_period_secs = v;
        }
        if let Some(v) = parse_env(&lookup, "IQISA_NORMALIZE")? {
            self.evaluation.normalize = v;
        }
        if let Some(v) = parse_env(&lookup, "IQISA_PARALLEL")? {
            self.evaluation.parallel = v;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let agg = &self.aggregation;
        if !(agg.extremize_exponent.is_finite() && agg.extremize_exponent > 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: "aggregation.extremize_exponent".to_string(),
                message: "must be a positive number".to_string(),
            });
        }
        if !(agg.decay_base > 0.0 && agg.decay_base <= 1.0) {
            return Err(ConfigError::ValidationFailed {
                field: "aggregation.decay_base".to_string(),
                message: "must be in (0, 1]".to_string(),
            });
        }
        if !(agg.decay_period_secs.is_finite() && agg.decay_period_secs > 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: "aggregation.decay_period_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_env<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::ValidationFailed {
                field: key.to_string(),
                message: format!("cannot parse {raw:?}"),
            }),
    }
}
