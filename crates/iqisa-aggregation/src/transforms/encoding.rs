//! Probability ↔ odds ↔ log-odds.

use iqisa_core::errors::AggregationError;

use super::logistic;
use crate::method::Encoding;

/// Map a probability into the averaging space of `encoding`.
///
/// Odds and log-odds reject 0 and 1.
pub fn encode(p: f64, encoding: Encoding) -> Result<f64, AggregationError> {
    match encoding {
        Encoding::Raw => Ok(p),
        Encoding::Odds | Encoding::LogOdds if p <= 0.0 || p >= 1.0 => {
            Err(AggregationError::BoundaryProbability {
                value: p,
                encoding: encoding.token(),
            })
        }
        Encoding::Odds => Ok(p / (1.0 - p)),
        Encoding::LogOdds => Ok((p / (1.0 - p)).ln()),
    }
}

/// Map an aggregate back to probability space.
pub fn decode(x: f64, encoding: Encoding) -> f64 {
    match encoding {
        Encoding::Raw => x,
        Encoding::Odds => x / (1.0 + x),
        Encoding::LogOdds => logistic(x),
    }
}
