//! Error handling for the NSRL lookup plugin.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod decode_error;
pub mod error_code;
pub mod lookup_error;
pub mod plugin_error;

pub use config_error::ConfigError;
pub use decode_error::DecodeError;
pub use error_code::NsrlErrorCode;
pub use lookup_error::{LookupError, TransportKind};
pub use plugin_error::PluginError;
