use serde::{Deserialize, Serialize};

use super::defaults;

/// Numeric parameters shared by every aggregation method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Exponent `k` used by the `gjp`, `post`, and `before` extremizers.
    pub extremize_exponent: f64,
    /// Weight multiplier applied once per decay period of live time.
    pub decay_base: f64,
    /// Length of one decay period in seconds.
    pub decay_period_secs: f64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            extremize_exponent: defaults::DEFAULT_EXTREMIZE_EXPONENT,
            decay_base: defaults::DEFAULT_DECAY_BASE,
            decay_period_secs: defaults::DEFAULT_DECAY_PERIOD_SECS,
        }
    }
}
