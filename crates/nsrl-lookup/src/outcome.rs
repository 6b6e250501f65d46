//! Response classification.

use nsrl_core::errors::DecodeError;
use nsrl_core::models::FileDetails;

use crate::action::LookupAction;
use crate::decode::decode_details;

/// Classified result of one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// 404: the digest is not in the catalog.
    NotFound,
    /// 200 from the exists endpoint.
    FoundMinimal,
    /// 200 from the details endpoint, records in response order.
    FoundDetailed(Vec<FileDetails>),
    /// Any other status, with the body kept for diagnostics.
    ServiceError { status: u16, body: String },
}

impl LookupOutcome {
    /// Is the digest known to the catalog?
    pub fn is_known(&self) -> bool {
        matches!(self, Self::FoundMinimal | Self::FoundDetailed(_))
    }

    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::FoundMinimal => "found_minimal",
            Self::FoundDetailed(_) => "found_detailed",
            Self::ServiceError { .. } => "service_error",
        }
    }
}

/// Does classifying this response need the body?
pub(crate) fn needs_body(action: LookupAction, status: u16) -> bool {
    !matches!((action, status), (_, 404) | (LookupAction::Exists, 200))
}

/// Classify a response. Pure: no I/O.
pub fn classify(
    action: LookupAction,
    status: u16,
    body: &str,
) -> Result<LookupOutcome, DecodeError> {
    match (status, action) {
        (200, LookupAction::Exists) => Ok(LookupOutcome::FoundMinimal),
        (200, LookupAction::Details) => Ok(LookupOutcome::FoundDetailed(decode_details(body)?)),
        (404, _) => Ok(LookupOutcome::NotFound),
        (status, _) => Ok(LookupOutcome::ServiceError {
            status,
            body: body.to_string(),
        }),
    }
}
