//! Catalog matches to feature values.

use std::num::NonZeroUsize;

use nsrl_core::errors::ConfigError;
use nsrl_core::models::{FeatureName, FeatureSet, FileDetails, MatchRecord};
use nsrl_core::NsrlConfig;

use crate::grouping::group_records;
use crate::render::render_versions;
use crate::sampling::select_packages;

/// Size limits applied while reducing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReducerLimits {
    /// Maximum distinct applications emitted.
    pub max_details: NonZeroUsize,
    /// Field-size limit of the sink; rendered versions get one less.
    pub max_value_length: NonZeroUsize,
}

impl ReducerLimits {
    pub fn new(max_details: usize, max_value_length: usize) -> Result<Self, ConfigError> {
        let positive = |field: &str, value: usize| {
            NonZeroUsize::new(value).ok_or_else(|| ConfigError::ValidationFailed {
                field: field.to_string(),
                message: "must be greater than 0".to_string(),
            })
        };
        Ok(Self {
            max_details: positive("max_details", max_details)?,
            max_value_length: positive("max_value_length", max_value_length)?,
        })
    }

    pub fn from_config(config: &NsrlConfig) -> Result<Self, ConfigError> {
        Self::new(config.max_details, config.max_value_length)
    }
}

/// Reduce catalog matches to feature values.
///
/// Emits `nsrl_hits` (every input record), `nsrl_package_hits` (distinct
/// usable names), then an `application` and `application_versions` pair
/// per selected package.
pub fn reduce(records: &[MatchRecord], limits: ReducerLimits) -> FeatureSet {
    let mut features = FeatureSet::new();
    features.add_integer(FeatureName::NsrlHits, records.len() as u64);

    let groups = group_records(records);
    features.add_integer(FeatureName::NsrlPackageHits, groups.len() as u64);

    let selection = select_packages(&groups, limits.max_details.get());
    for selected in &selection {
        let group = selected.group;
        features.add_labelled(FeatureName::Application, &group.name, &group.app_type);
        features.add_labelled(
            FeatureName::ApplicationVersions,
            &group.name,
            render_versions(group, selected.pass, limits.max_value_length.get()),
        );
    }

    tracing::debug!(
        hits = records.len(),
        package_hits = groups.len(),
        selected = selection.len(),
        "reduced catalog matches"
    );
    features
}

/// Reduce decoded details records.
pub fn reduce_details(details: &[FileDetails], limits: ReducerLimits) -> FeatureSet {
    let records: Vec<MatchRecord> = details.iter().map(MatchRecord::from).collect();
    reduce(&records, limits)
}
