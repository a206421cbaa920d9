//! Reference loss functions over paired prediction/outcome slices.

use iqisa_core::constants::LOG_SCORE_EPSILON;
use iqisa_core::traits::LossFunction;

/// Mean squared error between probability and 0/1 outcome.
///
/// 0.0 is perfect; always predicting 0.5 scores 0.25.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrierScore;

impl LossFunction for BrierScore {
    fn name(&self) -> &str {
        "brier"
    }

    fn loss(&self, predicted: &[f64], actual: &[f64]) -> f64 {
        debug_assert_eq!(predicted.len(), actual.len());
        mean(predicted.iter().zip(actual).map(|(p, a)| (p - a).powi(2)))
    }
}

/// Mean negative log-likelihood of the realized outcome.
///
/// Probabilities are clamped away from 0 and 1 so a confident miss costs
/// a large but finite amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogScore;

impl LossFunction for LogScore {
    fn name(&self) -> &str {
        "log"
    }

    fn loss(&self, predicted: &[f64], actual: &[f64]) -> f64 {
        debug_assert_eq!(predicted.len(), actual.len());
        mean(predicted.iter().zip(actual).map(|(&p, &a)| {
            let p = p.clamp(LOG_SCORE_EPSILON, 1.0 - LOG_SCORE_EPSILON);
            -(a * p.ln() + (1.0 - a) * (1.0 - p).ln())
        }))
    }
}

/// Mean of an iterator; 0.0 when empty.
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
