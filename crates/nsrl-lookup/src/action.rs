//! Endpoint variant selection.

use nsrl_core::constants::{ACTION_DETAILS, ACTION_EXISTS};

/// Which lookup endpoint to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupAction {
    /// Existence check only; a 200 carries no data we need.
    Exists,
    /// Full catalog match list.
    Details,
}

impl LookupAction {
    pub fn from_details(wants_details: bool) -> Self {
        if wants_details {
            Self::Details
        } else {
            Self::Exists
        }
    }

    /// URL path segment for this action.
    pub fn segment(&self) -> &'static str {
        match self {
            Self::Exists => ACTION_EXISTS,
            Self::Details => ACTION_DETAILS,
        }
    }
}

impl std::fmt::Display for LookupAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.segment())
    }
}
