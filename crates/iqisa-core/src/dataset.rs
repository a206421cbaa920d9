//! Questions paired with their realized outcomes.

use serde::{Deserialize, Serialize};

use crate::forecast::ForecastGroup;

/// Resolution status of a binary question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Yes,
    No,
    /// Resolved, but annulled. Never scored.
    Ambiguous,
    /// Not yet resolved. Never scored.
    Open,
}

impl Outcome {
    /// Numeric value used by loss functions: 1.0, 0.0, or `None` when unresolved.
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Yes => Some(1.0),
            Self::No => Some(0.0),
            Self::Ambiguous | Self::Open => None,
        }
    }

    /// True for `Yes` and `No`.
    pub fn is_resolved(self) -> bool {
        self.value().is_some()
    }
}

impl From<bool> for Outcome {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// A question's forecasts together with how it resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedQuestion {
    pub group: ForecastGroup,
    pub outcome: Outcome,
}

impl ResolvedQuestion {
    pub fn new(group: ForecastGroup, outcome: Outcome) -> Self {
        Self { group, outcome }
    }

    /// Identifier of the underlying forecast group.
    pub fn question_id(&self) -> &str {
        &self.group.question_id
    }
}

/// An already-normalized set of questions handed over by a loader.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub questions: Vec<ResolvedQuestion>,
}

impl Dataset {
    pub fn new(questions: Vec<ResolvedQuestion>) -> Self {
        Self { questions }
    }

    /// Append a question with its outcome.
    pub fn push(&mut self, group: ForecastGroup, outcome: Outcome) {
        self.questions.push(ResolvedQuestion::new(group, outcome));
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedQuestion> {
        self.questions.iter()
    }

    /// Number of questions with a Yes/No outcome.
    pub fn resolved_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| q.outcome.is_resolved())
            .count()
    }
}

impl FromIterator<ResolvedQuestion> for Dataset {
    fn from_iter<I: IntoIterator<Item = ResolvedQuestion>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
