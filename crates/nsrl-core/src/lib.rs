//! # nsrl-core
//!
//! Foundation crate for the NSRL lookup plugin.
//! Defines the catalog wire models, feature values, job results, errors,
//! config, and constants shared by the lookup client, the reducer and the
//! plugin runner.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::{ConfigOverrides, NsrlConfig};
pub use errors::{ConfigError, DecodeError, LookupError, NsrlErrorCode, PluginError};
pub use models::{
    BinaryAction, FeatureData, FeatureName, FeatureSet, FeatureValue, FileDetails, Job,
    JobResult, JobState, MatchRecord, PackageDetails,
};
