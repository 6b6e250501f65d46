//! Shared constants for the NSRL lookup plugin.
//! Single source of truth for all default values.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Plugin identity ----

/// Plugin name reported to the runner.
pub const PLUGIN_NAME: &str = "NsrlLookup";

/// Plugin version reported to the runner.
pub const PLUGIN_VERSION: &str = "2024.07.08";

/// Entity type this plugin processes.
pub const ENTITY_TYPE: &str = "binary";

// ---- Config defaults ----

/// Default lookup service base URI.
pub const DEFAULT_URI: &str = "http://nsrl-lookup-server";

/// Request full match details by default?
pub const DEFAULT_DETAILS: bool = false;

/// Default cap on distinct applications emitted per job.
pub const DEFAULT_MAX_DETAILS: usize = 10;

/// Default field-size limit of the feature sink, in characters.
pub const DEFAULT_MAX_VALUE_LENGTH: usize = 4000;

/// Default tracing filter when `NSRL_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "nsrl=info";

// ---- Lookup ----

/// Fixed lookup request timeout in seconds.
pub const LOOKUP_TIMEOUT_SECS: u64 = 30;

/// Path segment for existence-only lookups.
pub const ACTION_EXISTS: &str = "exists";

/// Path segment for full detail lookups.
pub const ACTION_DETAILS: &str = "details";

// ---- Features ----

/// Tag value emitted whenever the digest is known.
pub const NSRL_TAG: &str = "NSRL";

/// Separator used when joining a package's versions.
pub const VERSION_SEPARATOR: &str = ",";

// ---- Job states ----

/// Error label for non-200/404 lookup responses.
pub const LOOKUP_ERROR_LABEL: &str = "Lookup Error";

/// Error label for errors raised while executing a job.
pub const PLUGIN_EXCEPTION_LABEL: &str = "Plugin Exception";

// ---- Environment ----

/// Environment variable prefix for config overrides.
pub const ENV_PREFIX: &str = "NSRL_";

/// Environment variable holding the tracing filter.
pub const ENV_LOG: &str = "NSRL_LOG";
