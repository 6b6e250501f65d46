//! # nsrl-plugin
//!
//! Job execution for the NSRL lookup: filters events, looks up the digest,
//! tags known files and reduces detail responses into feature values.

pub mod descriptor;
pub mod plugin;

pub use descriptor::{FeatureDescriptor, PluginDescriptor};
pub use plugin::NsrlPlugin;
