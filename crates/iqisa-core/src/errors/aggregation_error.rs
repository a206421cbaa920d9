//! Numeric domain errors raised while aggregating one forecast group.

use super::error_code::{self, IqisaErrorCode};

/// Outcome of aggregating one group: `Ok(Some(p))`, `Ok(None)` for an
/// empty group, or a domain error.
pub type AggregateResult = Result<Option<f64>, AggregationError>;

/// A numeric precondition of the aggregation pipeline was violated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregationError {
    #[error("probability {value} is outside [0, 1]")]
    InvalidProbability { value: f64 },

    #[error("probability {value} cannot be encoded as {encoding}")]
    BoundaryProbability { value: f64, encoding: &'static str },

    #[error("decay weights sum to zero")]
    ZeroWeightSum,

    #[error("geometric mean requires positive values, got {value}")]
    NonPositiveGeometricInput { value: f64 },

    #[error("extremizer undefined for group size {n}")]
    DegenerateGroupSize { n: usize },

    #[error("forecast timestamp is {seconds}s after its suspend time")]
    SuspendedBeforeForecast { seconds: f64 },

    #[error("aggregate is not a finite number: {value}")]
    NonFiniteAggregate { value: f64 },
}

impl IqisaErrorCode for AggregationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidProbability { .. } => error_code::DOMAIN_INVALID_PROBABILITY,
            Self::BoundaryProbability { .. } => error_code::DOMAIN_BOUNDARY_PROBABILITY,
            Self::ZeroWeightSum => error_code::DOMAIN_ZERO_WEIGHT_SUM,
            Self::NonPositiveGeometricInput { .. } => error_code::DOMAIN_NON_POSITIVE_GEOMETRIC,
            Self::DegenerateGroupSize { .. } => error_code::DOMAIN_DEGENERATE_GROUP_SIZE,
            Self::SuspendedBeforeForecast { .. } => error_code::DOMAIN_SUSPENDED_BEFORE_FORECAST,
            Self::NonFiniteAggregate { .. } => error_code::DOMAIN_NON_FINITE_AGGREGATE,
        }
    }
}
