//! Data models: catalog wire records, feature values, and jobs.

pub mod binary_action;
pub mod feature;
pub mod job;
pub mod match_record;

pub use binary_action::BinaryAction;
pub use feature::{FeatureData, FeatureKind, FeatureName, FeatureSet, FeatureValue};
pub use job::{Job, JobResult, JobState};
pub use match_record::{FileDetails, Manufacturer, MatchRecord, OsDetails, PackageDetails};
