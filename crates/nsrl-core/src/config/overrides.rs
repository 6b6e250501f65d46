//! String-typed setting overrides from the runner, the CLI or the environment.

use crate::constants::ENV_PREFIX;
use crate::errors::ConfigError;

/// Overrides as the runner hands them over: every value is a string and
/// is only parsed when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub uri: Option<String>,
    pub details: Option<String>,
    pub max_details: Option<String>,
    pub max_value_length: Option<String>,
}

impl ConfigOverrides {
    /// Build overrides from `key = value` settings pairs.
    /// Unknown keys are ignored so runners can pass shared settings.
    pub fn from_settings<'a, I>(settings: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut overrides = Self::default();
        for (key, value) in settings {
            let value = Some(value.to_string());
            match key {
                "uri" => overrides.uri = value,
                "details" => overrides.details = value,
                "max_details" => overrides.max_details = value,
                "max_value_length" => overrides.max_value_length = value,
                other => tracing::debug!(key = other, "ignoring unknown setting"),
            }
        }
        overrides
    }

    /// Read overrides from `NSRL_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read overrides through an arbitrary variable lookup.
    /// Pattern: `NSRL_URI`, `NSRL_DETAILS`, `NSRL_MAX_DETAILS`, `NSRL_MAX_VALUE_LENGTH`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| lookup(&format!("{ENV_PREFIX}{suffix}"));
        Self {
            uri: var("URI"),
            details: var("DETAILS"),
            max_details: var("MAX_DETAILS"),
            max_value_length: var("MAX_VALUE_LENGTH"),
        }
    }

    /// Values in `other` replace values in `self` when present.
    pub fn merged_with(mut self, other: &ConfigOverrides) -> Self {
        if other.uri.is_some() {
            self.uri = other.uri.clone();
        }
        if other.details.is_some() {
            self.details = other.details.clone();
        }
        if other.max_details.is_some() {
            self.max_details = other.max_details.clone();
        }
        if other.max_value_length.is_some() {
            self.max_value_length = other.max_value_length.clone();
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Parse a boolean setting: `true/false`, `1/0`, `yes/no`, any case.
pub fn parse_bool_setting(field: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: format!("'{value}' is not a boolean"),
        }),
    }
}

/// Parse a positive integer setting. Only ASCII digits are accepted, so
/// signs, decimals and whitespace padding are rejected.
pub fn parse_positive_setting(field: &str, value: &str) -> Result<usize, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue {
        field: field.to_string(),
        message,
    };
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(format!("'{value}' must be an integer value")));
    }
    let parsed: usize = value
        .parse()
        .map_err(|e| invalid(format!("'{value}' is out of range: {e}")))?;
    if parsed == 0 {
        return Err(invalid("must be greater than 0".to_string()));
    }
    Ok(parsed)
}
