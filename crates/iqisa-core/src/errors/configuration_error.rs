//! Malformed method configurations.

use super::error_code::{self, IqisaErrorCode};

/// A method configuration that must never reach the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("incompatible method: {center} center with {encoding} encoding and {decay} decay")]
    IncompatibleMethod {
        center: String,
        encoding: String,
        decay: String,
    },

    #[error("unknown {axis} token: {token}")]
    UnknownToken { axis: &'static str, token: String },

    #[error("malformed method label: {label}")]
    MalformedLabel { label: String },
}

impl IqisaErrorCode for ConfigurationError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIGURATION_ERROR
    }
}
