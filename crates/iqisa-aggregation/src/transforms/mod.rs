//! Numeric building blocks of the aggregation pipeline.

pub mod center;
pub mod encoding;
pub mod extremize;
pub mod weights;

use iqisa_core::errors::AggregationError;

/// `exp(x) / (1 + exp(x))`, arranged so neither branch overflows.
pub(crate) fn logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Reject NaN and values outside `[0, 1]`.
pub fn check_probability(p: f64) -> Result<f64, AggregationError> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(AggregationError::InvalidProbability { value: p })
    }
}
