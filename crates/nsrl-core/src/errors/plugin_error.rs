//! Job-level errors.

use super::error_code::NsrlErrorCode;
use super::{ConfigError, DecodeError, LookupError};

/// Errors that fail a job outright.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),
}

impl From<DecodeError> for PluginError {
    fn from(e: DecodeError) -> Self {
        Self::Lookup(LookupError::Decode(e))
    }
}

impl NsrlErrorCode for PluginError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Lookup(e) => e.error_code(),
        }
    }
}
