//! Errors decoding a details response body.

use super::error_code::{self, NsrlErrorCode};

/// A details body that cannot be decoded into catalog records.
///
/// Empty strings inside a record are not errors; only structural mismatches
/// (missing keys, wrong JSON types) end up here.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("response body is not valid JSON: {reason}")]
    InvalidJson { reason: String },

    #[error("expected a JSON array of match records, got {found}")]
    NotAnArray { found: String },

    #[error("malformed match record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
}

impl NsrlErrorCode for DecodeError {
    fn error_code(&self) -> &'static str {
        error_code::DECODE_ERROR
    }
}
