//! Rendering a group's versions into a bounded label.

use nsrl_core::constants::VERSION_SEPARATOR;

use crate::grouping::PackageGroup;
use crate::sampling::SamplingPass;

/// Join a group's versions and cut the result to `max_value_length - 1`
/// characters.
///
/// The diversity pass sorts versions first; the fill pass keeps them in
/// first-seen order.
pub fn render_versions(group: &PackageGroup, pass: SamplingPass, max_value_length: usize) -> String {
    let mut versions: Vec<&str> = group.versions.iter().collect();
    if pass == SamplingPass::Diverse {
        versions.sort_unstable();
    }
    let joined = versions.join(VERSION_SEPARATOR);
    truncate_chars(&joined, max_value_length.saturating_sub(1))
}

/// First `max_chars` characters of `s`, never splitting a character.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((byte_index, _)) => s[..byte_index].to_string(),
        None => s.to_string(),
    }
}
