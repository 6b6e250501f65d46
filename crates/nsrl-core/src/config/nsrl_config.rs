//! Top-level plugin configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::overrides::{parse_bool_setting, parse_positive_setting, ConfigOverrides};
use crate::constants;
use crate::errors::ConfigError;
use crate::models::BinaryAction;

/// Plugin configuration.
///
/// Resolution order (highest priority first):
/// 1. Runner or CLI settings (applied via `apply_overrides`)
/// 2. Environment variables (`NSRL_*`)
/// 3. TOML config file
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NsrlConfig {
    /// Lookup service base URI.
    pub uri: String,
    /// Request full match details instead of an existence check.
    pub details: bool,
    /// Maximum distinct applications emitted per job.
    pub max_details: usize,
    /// Field-size limit of the feature sink, in characters.
    pub max_value_length: usize,
    /// Upstream event kinds that trigger a lookup.
    pub filter_allow_event_types: Vec<BinaryAction>,
}

impl Default for NsrlConfig {
    fn default() -> Self {
        Self {
            uri: constants::DEFAULT_URI.to_string(),
            details: constants::DEFAULT_DETAILS,
            max_details: constants::DEFAULT_MAX_DETAILS,
            max_value_length: constants::DEFAULT_MAX_VALUE_LENGTH,
            filter_allow_event_types: BinaryAction::new_content(),
        }
    }
}

impl NsrlConfig {
    /// Load configuration with layered resolution and validate the result.
    pub fn load(path: Option<&Path>, settings: &ConfigOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let overrides = ConfigOverrides::from_env().merged_with(settings);
        config.apply_overrides(&overrides)?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Unknown keys are ignored.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply string overrides, parsing each one strictly.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) -> Result<(), ConfigError> {
        if let Some(ref uri) = overrides.uri {
            self.uri = uri.clone();
        }
        if let Some(ref details) = overrides.details {
            self.details = parse_bool_setting("details", details)?;
        }
        if let Some(ref max_details) = overrides.max_details {
            self.max_details = parse_positive_setting("max_details", max_details)?;
        }
        if let Some(ref max_value_length) = overrides.max_value_length {
            self.max_value_length = parse_positive_setting("max_value_length", max_value_length)?;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.uri.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "uri".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.max_details == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "max_details".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.max_value_length == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "max_value_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Does an event of this kind trigger a lookup?
    pub fn allows(&self, action: BinaryAction) -> bool {
        self.filter_allow_event_types.contains(&action)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
