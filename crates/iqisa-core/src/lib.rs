//! # iqisa-core
//!
//! Foundation crate for the iqisa forecast aggregation engine.
//! Defines the forecast data model, errors, config, constants, and the
//! traits at the boundary with external scoring harnesses.

pub mod config;
pub mod constants;
pub mod dataset;
pub mod errors;
pub mod forecast;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::IqisaConfig;
pub use dataset::{Dataset, Outcome, ResolvedQuestion};
pub use errors::{
    AggregateResult, AggregationError, ConfigError, ConfigurationError, EvaluationError,
};
pub use forecast::{ForecastGroup, ForecastRecord};
pub use traits::{LossFunction, QuestionLoss, QuestionScore, ScoringHarness};
