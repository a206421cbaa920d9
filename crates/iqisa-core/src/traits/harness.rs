//! Boundary with the external scoring harness.
//!
//! The harness owns the per-question loop: it applies an aggregator to
//! every question of a dataset and scores the aggregate against the
//! realized outcome. The evaluator only reduces what comes back.

use crate::dataset::Dataset;
use crate::errors::{AggregateResult, AggregationError};
use crate::forecast::ForecastGroup;
use crate::traits::LossFunction;

/// An aggregator bound to one method configuration.
pub type AggregateFn<'a> = dyn Fn(&ForecastGroup) -> AggregateResult + Sync + 'a;

/// What happened to one question under one method.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionScore {
    /// Loss of the aggregate against the outcome.
    Scored(f64),
    /// The group was empty; no aggregate exists.
    Undefined,
    /// The question has no Yes/No outcome.
    Unresolved,
    /// The aggregator hit a numeric domain error.
    Failed(AggregationError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionLoss {
    pub question_id: String,
    pub score: QuestionScore,
}

impl QuestionLoss {
    pub fn new(question_id: impl Into<String>, score: QuestionScore) -> Self {
        Self {
            question_id: question_id.into(),
            score,
        }
    }
}

/// Applies an aggregator across a dataset and scores each question.
pub trait ScoringHarness: Send + Sync {
    fn score(
        &self,
        dataset: &Dataset,
        aggregate: &AggregateFn<'_>,
        loss: &dyn LossFunction,
        normalize: bool,
    ) -> Vec<QuestionLoss>;
}
