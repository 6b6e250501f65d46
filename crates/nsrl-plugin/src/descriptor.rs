//! Static plugin metadata registered with the runner.

use nsrl_core::constants::{ENTITY_TYPE, PLUGIN_NAME, PLUGIN_VERSION};
use nsrl_core::models::{FeatureKind, FeatureName};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: FeatureKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginDescriptor {
    pub name: &'static str,
    pub version: &'static str,
    pub entity_type: &'static str,
    pub features: Vec<FeatureDescriptor>,
}

impl PluginDescriptor {
    pub fn nsrl() -> Self {
        Self {
            name: PLUGIN_NAME,
            version: PLUGIN_VERSION,
            entity_type: ENTITY_TYPE,
            features: FeatureName::ALL
                .iter()
                .map(|feature| FeatureDescriptor {
                    name: feature.as_str(),
                    description: feature.description(),
                    kind: feature.kind(),
                })
                .collect(),
        }
    }
}
