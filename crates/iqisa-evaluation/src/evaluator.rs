//! Evaluator: scores every catalog method through a harness and ranks them.

use iqisa_aggregation::{Aggregator, MethodCatalog, MethodConfig};
use iqisa_core::config::{EvaluationConfig, IqisaConfig};
use iqisa_core::dataset::Dataset;
use iqisa_core::errors::{EvaluationError, IqisaErrorCode};
use iqisa_core::traits::{
    Cancellable, CancellationToken, LossFunction, QuestionScore, ScoringHarness,
};
use rayon::prelude::*;
use tracing::{debug, info, info_span, warn, Span};

use crate::report::{EvaluationReport, MethodScore};

/// Scores a catalog of methods against a dataset.
///
/// Holds no state across runs; each method is scored independently, so
/// methods are fanned out over the rayon pool when `parallel` is set and
/// reduced afterwards in catalog order.
pub struct Evaluator<'h> {
    harness: &'h dyn ScoringHarness,
    aggregator: Aggregator,
    config: EvaluationConfig,
    cancellation: Option<CancellationToken>,
}

impl<'h> Evaluator<'h> {
    /// Create an evaluator with validated configuration.
    pub fn new(harness: &'h dyn ScoringHarness, config: &IqisaConfig) -> Result<Self, EvaluationError> {
        config.validate()?;
        Ok(Self {
            harness,
            aggregator: Aggregator::with_config(config.aggregation),
            config: config.evaluation,
            cancellation: None,
        })
    }

    /// Attach a cancellation token.
    ///
    /// Methods not yet started when the token trips are left out of the
    /// report, which is then marked cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    /// Score every method of `catalog` on `dataset` and rank them.
    pub fn evaluate(
        &self,
        catalog: &MethodCatalog,
        dataset: &Dataset,
        loss: &dyn LossFunction,
    ) -> Result<EvaluationReport, EvaluationError> {
        if catalog.is_empty() {
            return Err(EvaluationError::EmptyCatalog);
        }

        let span = info_span!(
            "iqisa.evaluate",
            methods = catalog.len(),
            questions = dataset.len(),
            loss = loss.name()
        );
        let _enter = span.enter();

        let methods = catalog.as_slice();
        let scores: Vec<Option<MethodScore>> = if self.config.parallel {
            methods
                .par_iter()
                .enumerate()
                .map(|(index, method)| self.score_method(&span, index, method, dataset, loss))
                .collect()
        } else {
            methods
                .iter()
                .enumerate()
                .map(|(index, method)| self.score_method(&span, index, method, dataset, loss))
                .collect()
        };

        let cancelled = scores.iter().any(Option::is_none);
        let scores: Vec<MethodScore> = scores.into_iter().flatten().collect();
        let report = EvaluationReport::new(loss.name(), dataset.len(), scores, cancelled);

        info!(
            scored_methods = report.len(),
            failures = report.total_failures(),
            cancelled,
            best = report.best().map(|s| s.label.as_str()).unwrap_or("-"),
            "evaluation complete"
        );

        Ok(report)
    }

    /// `None` when cancelled before this method started.
    fn score_method(
        &self,
        parent: &Span,
        index: usize,
        method: &MethodConfig,
        dataset: &Dataset,
        loss: &dyn LossFunction,
    ) -> Option<MethodScore> {
        if self.is_cancelled() {
            return None;
        }

        parent.in_scope(|| {
            let label = method.label();
            let aggregate = self.aggregator.bind(method);
            let losses = self
                .harness
                .score(dataset, &aggregate, loss, self.config.normalize);

            for q in &losses {
                match &q.score {
                    QuestionScore::Failed(e) => warn!(
                        method = %label,
                        question = %q.question_id,
                        code = e.error_code(),
                        error = %e,
                        "aggregation failed; question excluded"
                    ),
                    QuestionScore::Undefined => {
                        debug!(method = %label, question = %q.question_id, "empty forecast group")
                    }
                    QuestionScore::Unresolved => {
                        debug!(method = %label, question = %q.question_id, "unresolved question")
                    }
                    QuestionScore::Scored(_) => {}
                }
            }

            let score = MethodScore::from_losses(*method, index, &losses);
            info!(
                method = %label,
                mean_loss = ?score.mean_loss,
                scored = score.scored,
                failed = score.failure_count(),
                "method scored"
            );
            Some(score)
        })
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(Cancellable::is_cancelled)
    }
}

/// Score `catalog` on `dataset` through `harness` with default settings.
pub fn evaluate(
    catalog: &MethodCatalog,
    dataset: &Dataset,
    harness: &dyn ScoringHarness,
    loss: &dyn LossFunction,
) -> Result<EvaluationReport, EvaluationError> {
    Evaluator::new(harness, &IqisaConfig::default())?.evaluate(catalog, dataset, loss)
}
