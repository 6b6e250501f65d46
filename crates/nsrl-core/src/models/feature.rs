//! Feature values emitted for a job.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Value type of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Integer,
    String,
}

/// Every feature this plugin can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureName {
    NsrlHits,
    NsrlPackageHits,
    Application,
    ApplicationVersions,
    Tag,
}

impl FeatureName {
    pub const ALL: [FeatureName; 5] = [
        Self::NsrlHits,
        Self::NsrlPackageHits,
        Self::Application,
        Self::ApplicationVersions,
        Self::Tag,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NsrlHits => "nsrl_hits",
            Self::NsrlPackageHits => "nsrl_package_hits",
            Self::Application => "application",
            Self::ApplicationVersions => "application_versions",
            Self::Tag => "tag",
        }
    }

    pub fn kind(&self) -> FeatureKind {
        match self {
            Self::NsrlHits | Self::NsrlPackageHits => FeatureKind::Integer,
            Self::Application | Self::ApplicationVersions | Self::Tag => FeatureKind::String,
        }
    }

    /// Human-readable description registered with the runner.
    pub fn description(&self) -> &'static str {
        match self {
            Self::NsrlHits => "Number of packages with this hash found in the NSRL database.",
            Self::NsrlPackageHits => {
                "Number of packages (ignoring version) with this hash found in the NSRL database."
            }
            Self::Application => {
                "Name and type of the application from NSRL. (sample of total applications)"
            }
            Self::ApplicationVersions => {
                "Name and versions of the application from NSRL. (sample of total applications)"
            }
            Self::Tag => "Any informational label about the sample",
        }
    }
}

impl std::fmt::Display for FeatureName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw feature datum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureData {
    Integer(u64),
    String(String),
}

impl FeatureData {
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::String(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Integer(_) => None,
        }
    }
}

/// A named feature value with an optional descriptive label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureValue {
    pub feature: FeatureName,
    pub value: FeatureData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FeatureValue {
    pub fn integer(feature: FeatureName, value: u64) -> Self {
        Self {
            feature,
            value: FeatureData::Integer(value),
            label: None,
        }
    }

    pub fn string(feature: FeatureName, value: impl Into<String>) -> Self {
        Self {
            feature,
            value: FeatureData::String(value.into()),
            label: None,
        }
    }

    pub fn labelled(
        feature: FeatureName,
        value: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            feature,
            value: FeatureData::String(value.into()),
            label: Some(label.into()),
        }
    }
}

/// Insertion-ordered collection of feature values for one job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSet {
    values: Vec<FeatureValue>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: FeatureValue) {
        self.values.push(value);
    }

    pub fn add_integer(&mut self, feature: FeatureName, value: u64) {
        self.push(FeatureValue::integer(feature, value));
    }

    pub fn add_string(&mut self, feature: FeatureName, value: impl Into<String>) {
        self.push(FeatureValue::string(feature, value));
    }

    pub fn add_labelled(
        &mut self,
        feature: FeatureName,
        value: impl Into<String>,
        label: impl Into<String>,
    ) {
        self.push(FeatureValue::labelled(feature, value, label));
    }

    /// Append every value of `other`, keeping its order.
    pub fn extend(&mut self, other: FeatureSet) {
        self.values.extend(other.values);
    }

    /// All values emitted for `feature`, in emission order.
    pub fn values(&self, feature: FeatureName) -> impl Iterator<Item = &FeatureValue> {
        self.values.iter().filter(move |v| v.feature == feature)
    }

    pub fn count(&self, feature: FeatureName) -> usize {
        self.values(feature).count()
    }

    /// The first integer emitted for `feature`.
    pub fn integer(&self, feature: FeatureName) -> Option<u64> {
        self.values(feature).find_map(|v| v.value.as_integer())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureValue> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values grouped by feature name, names in sorted order.
    pub fn grouped(&self) -> BTreeMap<&'static str, Vec<&FeatureValue>> {
        let mut grouped: BTreeMap<&'static str, Vec<&FeatureValue>> = BTreeMap::new();
        for value in &self.values {
            grouped.entry(value.feature.as_str()).or_default().push(value);
        }
        grouped
    }
}

impl IntoIterator for FeatureSet {
    type Item = FeatureValue;
    type IntoIter = std::vec::IntoIter<FeatureValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
