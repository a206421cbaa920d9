use serde::{Deserialize, Serialize};

use super::defaults;

/// Evaluator behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Forwarded to the scoring harness as its `normalize` flag.
    pub normalize: bool,
    /// Score method configurations on the rayon pool.
    pub parallel: bool,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            normalize: defaults::DEFAULT_NORMALIZE,
            parallel: defaults::DEFAULT_PARALLEL,
        }
    }
}
