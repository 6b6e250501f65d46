//! Grouping usable catalog records by application name.

use nsrl_core::models::MatchRecord;
use rustc_hash::{FxHashMap, FxHashSet};

/// Distinct versions in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionSet {
    ordered: Vec<String>,
    seen: FxHashSet<String>,
}

impl VersionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a version; returns false if it was already present.
    pub fn insert(&mut self, version: &str) -> bool {
        if self.seen.contains(version) {
            return false;
        }
        self.seen.insert(version.to_string());
        self.ordered.push(version.to_string());
        true
    }

    pub fn contains(&self, version: &str) -> bool {
        self.seen.contains(version)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for VersionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for version in iter {
            set.insert(version.as_ref());
        }
        set
    }
}

/// All usable records sharing one trimmed application name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageGroup {
    pub name: String,
    /// Application type of the first record seen for this name.
    pub app_type: String,
    /// Trimmed versions in first-seen order.
    pub versions: VersionSet,
}

impl PackageGroup {
    fn new(name: &str, app_type: &str) -> Self {
        Self {
            name: name.to_string(),
            app_type: app_type.to_string(),
            versions: VersionSet::new(),
        }
    }
}

/// Package groups in first-seen order, indexed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageGroups {
    groups: Vec<PackageGroup>,
    by_name: FxHashMap<String, usize>,
}

impl PackageGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// The group for `name`, created with `app_type` on first sight.
    fn entry(&mut self, name: &str, app_type: &str) -> &mut PackageGroup {
        let index = match self.by_name.get(name) {
            Some(&index) => index,
            None => {
                self.groups.push(PackageGroup::new(name, app_type));
                self.by_name.insert(name.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        &mut self.groups[index]
    }

    pub fn get(&self, name: &str) -> Option<&PackageGroup> {
        self.by_name.get(name).map(|&index| &self.groups[index])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PackageGroup> {
        self.groups.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for &'a PackageGroups {
    type Item = &'a PackageGroup;
    type IntoIter = std::slice::Iter<'a, PackageGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Drop unusable records and group the rest by trimmed name.
///
/// A later record whose application type differs from the group's is
/// still merged; the first application type wins.
pub fn group_records<'a, I>(records: I) -> PackageGroups
where
    I: IntoIterator<Item = &'a MatchRecord>,
{
    let mut groups = PackageGroups::new();
    for record in records {
        if !record.is_usable() {
            continue;
        }
        groups
            .entry(
                record.application_name.trim(),
                record.application_type.trim(),
            )
            .versions
            .insert(record.version.trim());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group<'a>(groups: &'a PackageGroups, name: &str) -> &'a PackageGroup {
        groups.get(name).unwrap()
    }

    #[test]
    fn groups_by_trimmed_name_in_first_seen_order() {
        let records = vec![
            MatchRecord::new("Knight Online", "Game", "1781103"),
            MatchRecord::new("Capsa Enterprise", "network monitoring", "12.0"),
            MatchRecord::new(" Knight Online ", "Game", " 1783900 "),
        ];
        let groups = group_records(&records);

        assert_eq!(
            groups.names().collect::<Vec<_>>(),
            vec!["Knight Online", "Capsa Enterprise"]
        );
        assert_eq!(
            group(&groups, "Knight Online").versions.iter().collect::<Vec<_>>(),
            vec!["1781103", "1783900"]
        );
    }

    #[test]
    fn first_app_type_wins() {
        let records = vec![
            MatchRecord::new("Word", "Office", "2000"),
            MatchRecord::new("Word", "Operating System", "2003"),
        ];
        let groups = group_records(&records);
        assert_eq!(groups.len(), 1);
        assert_eq!(group(&groups, "Word").app_type, "Office");
        assert_eq!(group(&groups, "Word").versions.len(), 2);
    }

    #[test]
    fn unusable_records_are_skipped() {
        let records = vec![
            MatchRecord::new("", "Game", "1"),
            MatchRecord::new("Orphan", "", "1"),
            MatchRecord::new("Kept", "Game", ""),
        ];
        let groups = group_records(&records);
        assert_eq!(groups.names().collect::<Vec<_>>(), vec!["Kept"]);
        // Empty versions are still versions.
        assert!(group(&groups, "Kept").versions.contains(""));
    }

    #[test]
    fn duplicate_versions_collapse() {
        let records = vec![
            MatchRecord::new("PKG1", "Operating System", "2007"),
            MatchRecord::new("PKG1", "Operating System", "2007"),
        ];
        assert_eq!(group(&group_records(&records), "PKG1").versions.len(), 1);
    }

    #[test]
    fn version_set_keeps_first_seen_order() {
        let mut set: VersionSet = ["b", "a"].into_iter().collect();
        assert!(!set.insert("b"));
        assert!(set.insert("c"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }
}
