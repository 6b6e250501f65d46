use std::collections::HashMap;
use std::io::Write;

use nsrl_core::config::*;
use nsrl_core::errors::ConfigError;
use nsrl_core::models::BinaryAction;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = NsrlConfig::from_toml("").unwrap();

    assert_eq!(config.uri, "http://nsrl-lookup-server");
    assert!(!config.details);
    assert_eq!(config.max_details, 10);
    assert_eq!(config.max_value_length, 4000);
    assert_eq!(
        config.filter_allow_event_types,
        vec![BinaryAction::Extracted, BinaryAction::Sourced]
    );
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
uri = "http://localhost:8080"
details = true
filter_allow_event_types = ["sourced"]
"#;
    let config = NsrlConfig::from_toml(toml).unwrap();
    assert_eq!(config.uri, "http://localhost:8080");
    assert!(config.details);
    assert!(config.allows(BinaryAction::Sourced));
    assert!(!config.allows(BinaryAction::Extracted));
    // Non-overridden fields keep defaults
    assert_eq!(config.max_details, 10);
}

#[test]
fn config_rejects_negative_max_details_in_toml() {
    let err = NsrlConfig::from_toml("max_details = -3").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_serde_roundtrip() {
    let config = NsrlConfig::default();
    let toml_str = config.to_toml().unwrap();
    let roundtripped = NsrlConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn validate_rejects_zero_limits() {
    let config = NsrlConfig {
        max_details: 0,
        ..NsrlConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("max_details"));

    let config = NsrlConfig {
        max_value_length: 0,
        ..NsrlConfig::default()
    };
    assert!(config.validate().is_err());

    let config = NsrlConfig {
        uri: "  ".into(),
        ..NsrlConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn settings_strings_are_parsed() {
    let overrides = ConfigOverrides::from_settings([
        ("uri", "http://localhost:8080"),
        ("details", "True"),
        ("max_details", "2"),
        ("unrelated", "ignored"),
    ]);
    let mut config = NsrlConfig::default();
    config.apply_overrides(&overrides).unwrap();

    assert_eq!(config.uri, "http://localhost:8080");
    assert!(config.details);
    assert_eq!(config.max_details, 2);
}

#[test]
fn non_integer_max_details_is_a_config_error() {
    for bad in ["ten", "-1", "1.5", " 3", "0", ""] {
        let overrides = ConfigOverrides {
            max_details: Some(bad.to_string()),
            ..Default::default()
        };
        let err = NsrlConfig::default().apply_overrides(&overrides).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "max_details"),
            "'{bad}' should be rejected, got {err:?}"
        );
    }
}

#[test]
fn parse_bool_setting_accepts_common_spellings() {
    for (raw, expected) in [("True", true), ("FALSE", false), ("1", true), ("no", false)] {
        assert_eq!(parse_bool_setting("details", raw).unwrap(), expected);
    }
    assert!(parse_bool_setting("details", "maybe").is_err());
}

#[test]
fn env_lookup_maps_prefixed_variables() {
    let vars: HashMap<&str, &str> = [
        ("NSRL_URI", "http://env-host"),
        ("NSRL_MAX_DETAILS", "5"),
    ]
    .into_iter()
    .collect();
    let overrides = ConfigOverrides::from_lookup(|name| vars.get(name).map(|v| v.to_string()));

    assert_eq!(overrides.uri.as_deref(), Some("http://env-host"));
    assert_eq!(overrides.max_details.as_deref(), Some("5"));
    assert!(overrides.details.is_none());
}

#[test]
fn later_overrides_win_when_merged() {
    let env = ConfigOverrides {
        uri: Some("http://env-host".into()),
        max_details: Some("5".into()),
        ..Default::default()
    };
    let cli = ConfigOverrides {
        max_details: Some("7".into()),
        ..Default::default()
    };
    let merged = env.merged_with(&cli);
    assert_eq!(merged.uri.as_deref(), Some("http://env-host"));
    assert_eq!(merged.max_details.as_deref(), Some("7"));
}

#[test]
fn load_reads_file_then_applies_settings() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "uri = \"http://file-host\"\nmax_details = 4").unwrap();

    let settings = ConfigOverrides {
        max_details: Some("3".into()),
        ..Default::default()
    };
    let config = NsrlConfig::load(Some(file.path()), &settings).unwrap();
    assert_eq!(config.max_details, 3);
}

#[test]
fn load_missing_file_is_reported() {
    let err = NsrlConfig::load(
        Some(std::path::Path::new("/nonexistent/nsrl.toml")),
        &ConfigOverrides::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}
