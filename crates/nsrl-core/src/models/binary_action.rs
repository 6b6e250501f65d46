//! Upstream binary event kinds.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// The kind of upstream event that produced a binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryAction {
    /// Binary submitted directly from a source.
    Sourced,
    /// Binary extracted from another binary.
    Extracted,
    /// Existing binary gained new streams.
    Augmented,
    /// Existing binary gained new features.
    Enriched,
    /// Binary metadata mapped from elsewhere.
    Mapped,
}

impl BinaryAction {
    pub const ALL: [BinaryAction; 5] = [
        Self::Sourced,
        Self::Extracted,
        Self::Augmented,
        Self::Enriched,
        Self::Mapped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sourced => "sourced",
            Self::Extracted => "extracted",
            Self::Augmented => "augmented",
            Self::Enriched => "enriched",
            Self::Mapped => "mapped",
        }
    }

    /// Event kinds that carry new binary content.
    pub fn new_content() -> Vec<BinaryAction> {
        vec![Self::Extracted, Self::Sourced]
    }
}

impl std::fmt::Display for BinaryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BinaryAction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == needle)
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "event_type".to_string(),
                message: format!("unknown binary action '{s}'"),
            })
    }
}
