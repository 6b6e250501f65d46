//! # nsrl-reduce
//!
//! Turns the catalog matches for one digest into feature values:
//! raw and per-package hit counts, then a sample of at most `max_details`
//! applications that favours distinct application types before repeating
//! one, each paired with its rendered version list.

pub mod grouping;
pub mod reducer;
pub mod render;
pub mod sampling;

pub use grouping::{group_records, PackageGroup, PackageGroups, VersionSet};
pub use reducer::{reduce, reduce_details, ReducerLimits};
pub use render::{render_versions, truncate_chars};
pub use sampling::{select_packages, SamplingPass, Selection};
