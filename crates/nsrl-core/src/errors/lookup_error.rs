//! Lookup client errors.

use serde::Serialize;

use super::decode_error::DecodeError;
use super::error_code::{self, NsrlErrorCode};

/// Broad category of a transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    Connect,
    Timeout,
    Redirect,
    Body,
    Request,
}

impl TransportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connect => "connect",
            Self::Timeout => "timeout",
            Self::Redirect => "redirect",
            Self::Body => "body",
            Self::Request => "request",
        }
    }
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the lookup client. Non-200/404 statuses are not errors
/// here; they are classified as a service-error outcome.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("failed to build HTTP client: {reason}")]
    ClientBuild { reason: String },

    #[error("{kind} failure looking up '{url}': {reason}")]
    Transport {
        url: String,
        kind: TransportKind,
        reason: String,
    },

    #[error("failed to decode details response: {0}")]
    Decode(#[from] DecodeError),
}

impl NsrlErrorCode for LookupError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ClientBuild { .. } => error_code::CLIENT_ERROR,
            Self::Transport {
                kind: TransportKind::Timeout,
                ..
            } => error_code::TIMEOUT,
            Self::Transport { .. } => error_code::TRANSPORT_ERROR,
            Self::Decode(e) => e.error_code(),
        }
    }
}
