//! Forecast records and per-question forecast groups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observation of a single forecaster's (or the crowd's) belief
/// that a binary question resolves true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    /// Forecast probability, expected in (0, 1).
    pub probability: f64,
    /// When the forecast was made.
    pub timestamp: DateTime<Utc>,
    /// When the forecast stopped being live. `None` means always live.
    pub suspend_time: Option<DateTime<Utc>>,
}

impl ForecastRecord {
    /// A record that never stops being live.
    pub fn new(probability: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            probability,
            timestamp,
            suspend_time: None,
        }
    }

    /// Set the instant after which the forecast is no longer live.
    pub fn with_suspend_time(mut self, suspend_time: DateTime<Utc>) -> Self {
        self.suspend_time = Some(suspend_time);
        self
    }

    /// Seconds between the forecast and its suspension, if suspended.
    ///
    /// Negative when the suspend time precedes the timestamp.
    pub fn live_seconds(&self) -> Option<f64> {
        self.suspend_time
            .map(|end| (end - self.timestamp).num_milliseconds() as f64 / 1000.0)
    }
}

/// All forecasts for one question, consumed read-only by the aggregator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastGroup {
    /// Stable question identifier, carried into per-question losses.
    pub question_id: String,
    pub records: Vec<ForecastRecord>,
}

impl ForecastGroup {
    /// Group `records` under `question_id`.
    pub fn new(question_id: impl Into<String>, records: Vec<ForecastRecord>) -> Self {
        Self {
            question_id: question_id.into(),
            records,
        }
    }

    /// Build a group from bare probabilities stamped at `timestamp`.
    pub fn from_probabilities(
        question_id: impl Into<String>,
        probabilities: &[f64],
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self::new(
            question_id,
            probabilities
                .iter()
                .map(|&p| ForecastRecord::new(p, timestamp))
                .collect(),
        )
    }

    /// Number of forecasts.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// An empty group aggregates to "undefined".
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Forecast probabilities in record order.
    pub fn probabilities(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.probability)
    }

    /// The same group with every probability replaced by `1 - p`.
    ///
    /// Used to aggregate the "no" side of a binary question.
    pub fn complement(&self) -> Self {
        Self {
            question_id: self.question_id.clone(),
            records: self
                .records
                .iter()
                .map(|r| ForecastRecord {
                    probability: 1.0 - r.probability,
                    ..r.clone()
                })
                .collect(),
        }
    }
}
