//! Jobs and job results.

use serde::{Deserialize, Serialize};

use super::binary_action::BinaryAction;
use super::feature::FeatureSet;

/// One unit of work: look up a binary by digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// SHA-256 of the binary, used as the lookup key.
    pub digest: String,
    /// Upstream event that produced the binary.
    pub action: BinaryAction,
}

impl Job {
    pub fn new(digest: impl Into<String>, action: BinaryAction) -> Self {
        Self {
            digest: digest.into(),
            action,
        }
    }
}

/// Terminal state of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum JobState {
    /// Lookup succeeded; features may or may not have been emitted.
    Completed,
    /// The digest is not in the catalog.
    CompletedEmpty,
    /// The event type is not one this plugin processes.
    Skipped { reason: String },
    /// The job failed.
    Error { label: String, message: String },
}

impl JobState {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// State plus the features emitted by a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobResult {
    #[serde(flatten)]
    pub state: JobState,
    pub features: FeatureSet,
}

impl JobResult {
    pub fn completed(features: FeatureSet) -> Self {
        Self {
            state: JobState::Completed,
            features,
        }
    }

    pub fn completed_empty() -> Self {
        Self {
            state: JobState::CompletedEmpty,
            features: FeatureSet::new(),
        }
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        Self {
            state: JobState::Skipped {
                reason: reason.into(),
            },
            features: FeatureSet::new(),
        }
    }

    pub fn error(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            state: JobState::Error {
                label: label.into(),
                message: message.into(),
            },
            features: FeatureSet::new(),
        }
    }
}
