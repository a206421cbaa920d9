//! Error handling for iqisa.
//! One error enum per subsystem, `thiserror` only.

pub mod aggregation_error;
pub mod config_error;
pub mod configuration_error;
pub mod error_code;
pub mod evaluation_error;

pub use aggregation_error::{AggregateResult, AggregationError};
pub use config_error::ConfigError;
pub use configuration_error::ConfigurationError;
pub use error_code::IqisaErrorCode;
pub use evaluation_error::EvaluationError;
