//! Per-method scores and the final ranking.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use iqisa_aggregation::MethodConfig;
use iqisa_core::errors::IqisaErrorCode;
use iqisa_core::traits::{QuestionLoss, QuestionScore};
use serde::{Deserialize, Serialize};

/// How one method fared across a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodScore {
    pub method: MethodConfig,
    pub label: String,
    /// Position of the method in the catalog that produced it.
    pub catalog_index: usize,
    /// Mean loss over scored questions; `None` if nothing could be scored.
    pub mean_loss: Option<f64>,
    pub scored: usize,
    /// Questions whose forecast group was empty.
    pub undefined: usize,
    /// Questions without a Yes/No outcome.
    pub unresolved: usize,
    /// Domain failures, keyed by error code.
    pub failures: BTreeMap<String, usize>,
}

impl MethodScore {
    /// Reduce harness output: arithmetic mean over scored questions only.
    pub fn from_losses(method: MethodConfig, catalog_index: usize, losses: &[QuestionLoss]) -> Self {
        let mut sum = 0.0;
        let mut score = Self {
            method,
            label: method.label(),
            catalog_index,
            mean_loss: None,
            scored: 0,
            undefined: 0,
            unresolved: 0,
            failures: BTreeMap::new(),
        };

        for q in losses {
            match &q.score {
                QuestionScore::Scored(loss) => {
                    sum += loss;
                    score.scored += 1;
                }
                QuestionScore::Undefined => score.undefined += 1,
                QuestionScore::Unresolved => score.unresolved += 1,
                QuestionScore::Failed(e) => {
                    *score.failures.entry(e.error_code().to_string()).or_default() += 1;
                }
            }
        }

        if score.scored > 0 {
            score.mean_loss = Some(sum / score.scored as f64);
        }
        score
    }

    pub fn failure_count(&self) -> usize {
        self.failures.values().sum()
    }
}

/// Ranking of methods by mean loss, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Name of the loss function used.
    pub loss: String,
    pub question_count: usize,
    /// True when the run was cancelled before every method was scored.
    pub cancelled: bool,
    ranking: Vec<MethodScore>,
}

impl EvaluationReport {
    /// Build a report from scores given in catalog order.
    ///
    /// Sorting is stable, so equal losses keep catalog order. Methods with
    /// no scored question rank last.
    pub fn new(
        loss: impl Into<String>,
        question_count: usize,
        mut scores: Vec<MethodScore>,
        cancelled: bool,
    ) -> Self {
        scores.sort_by(|a, b| compare_loss(a.mean_loss, b.mean_loss));
        Self {
            loss: loss.into(),
            question_count,
            cancelled,
            ranking: scores,
        }
    }

    /// Methods sorted ascending by mean loss.
    pub fn ranking(&self) -> &[MethodScore] {
        &self.ranking
    }

    /// Head of the ranking; the lowest mean loss when anything was scored.
    pub fn best(&self) -> Option<&MethodScore> {
        self.ranking.first()
    }

    /// Score of the method with `label`.
    pub fn get(&self, label: &str) -> Option<&MethodScore> {
        self.ranking.iter().find(|s| s.label == label)
    }

    /// Label → mean loss for every method that scored at least one question.
    pub fn mean_losses(&self) -> BTreeMap<String, f64> {
        self.ranking
            .iter()
            .filter_map(|s| s.mean_loss.map(|loss| (s.label.clone(), loss)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.ranking.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }

    /// Domain failures summed over every method.
    pub fn total_failures(&self) -> usize {
        self.ranking.iter().map(MethodScore::failure_count).sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn compare_loss(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for score in &self.ranking {
            match score.mean_loss {
                Some(loss) => writeln!(f, "{}\t{:.6}", score.label, loss)?,
                None => writeln!(f, "{}\t-", score.label)?,
            }
        }
        Ok(())
    }
}
