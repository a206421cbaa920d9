//! Reference in-memory scoring harness.

use iqisa_core::dataset::{Dataset, ResolvedQuestion};
use iqisa_core::traits::{AggregateFn, LossFunction, QuestionLoss, QuestionScore, ScoringHarness};

/// Scores each question of an in-memory dataset in order.
///
/// With `normalize`, the harness also aggregates the complementary
/// forecasts (`1 - p`) and reports `yes / (yes + no)`, so the two answer
/// options of a binary question sum to one.
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryHarness;

impl InMemoryHarness {
    pub fn new() -> Self {
        Self
    }

    fn score_question(
        question: &ResolvedQuestion,
        aggregate: &AggregateFn<'_>,
        loss: &dyn LossFunction,
        normalize: bool,
    ) -> QuestionScore {
        let Some(actual) = question.outcome.value() else {
            return QuestionScore::Unresolved;
        };

        let yes = match aggregate(&question.group) {
            Ok(Some(p)) => p,
            Ok(None) => return QuestionScore::Undefined,
            Err(e) => return QuestionScore::Failed(e),
        };

        let predicted = if normalize {
            match aggregate(&question.group.complement()) {
                Ok(Some(no)) if yes + no > 0.0 => yes / (yes + no),
                Ok(_) => yes,
                Err(e) => return QuestionScore::Failed(e),
            }
        } else {
            yes
        };

        QuestionScore::Scored(loss.loss(&[predicted], &[actual]))
    }
}

impl ScoringHarness for InMemoryHarness {
    fn score(
        &self,
        dataset: &Dataset,
        aggregate: &AggregateFn<'_>,
        loss: &dyn LossFunction,
        normalize: bool,
    ) -> Vec<QuestionLoss> {
        dataset
            .iter()
            .map(|q| {
                QuestionLoss::new(
                    q.question_id(),
                    Self::score_question(q, aggregate, loss, normalize),
                )
            })
            .collect()
    }
}
