//! Errors that abort a whole evaluation run.

use super::error_code::{self, IqisaErrorCode};
use super::{ConfigError, ConfigurationError};

#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Method configuration error: {0}")]
    Method(#[from] ConfigurationError),

    #[error("method catalog is empty")]
    EmptyCatalog,
}

impl IqisaErrorCode for EvaluationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Method(e) => e.error_code(),
            Self::EmptyCatalog => error_code::EMPTY_CATALOG,
        }
    }
}
