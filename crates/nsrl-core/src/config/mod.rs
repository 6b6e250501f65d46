//! Configuration for the NSRL lookup plugin.
//! TOML-based, layered resolution: settings > env > file > defaults.

pub mod nsrl_config;
pub mod overrides;

pub use nsrl_config::NsrlConfig;
pub use overrides::{parse_bool_setting, parse_positive_setting, ConfigOverrides};
