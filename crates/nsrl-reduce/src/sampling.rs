//! Diversity-first selection of package groups under a cap.

use rustc_hash::FxHashSet;

use crate::grouping::{PackageGroup, PackageGroups};

/// Which pass selected a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingPass {
    /// First pass: at most one group per application type.
    Diverse,
    /// Second pass: groups deferred by the first pass, used to reach the cap.
    Fill,
}

/// A selected group and the pass that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    pub group: &'a PackageGroup,
    pub pass: SamplingPass,
}

/// Choose at most `max_details` groups.
///
/// Groups are visited in first-seen order. A group whose application type
/// was already selected is deferred; the pass stops once the cap is hit.
/// If the cap was not reached, deferred groups fill the remaining slots in
/// the order they were deferred.
pub fn select_packages(groups: &PackageGroups, max_details: usize) -> Vec<Selection<'_>> {
    let mut selected = Vec::with_capacity(max_details.min(groups.len()));
    let mut seen_app_types: FxHashSet<&str> = FxHashSet::default();
    let mut skipped: Vec<&PackageGroup> = Vec::new();

    for group in groups {
        if selected.len() >= max_details {
            break;
        }
        if seen_app_types.contains(group.app_type.as_str()) {
            skipped.push(group);
            continue;
        }
        seen_app_types.insert(group.app_type.as_str());
        selected.push(Selection {
            group,
            pass: SamplingPass::Diverse,
        });
    }

    if selected.len() < max_details {
        let room = max_details - selected.len();
        selected.extend(skipped.into_iter().take(room).map(|group| Selection {
            group,
            pass: SamplingPass::Fill,
        }));
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::group_records;
    use nsrl_core::models::MatchRecord;

    fn groups(entries: &[(&str, &str)]) -> PackageGroups {
        let records: Vec<MatchRecord> = entries
            .iter()
            .map(|(name, app_type)| MatchRecord::new(*name, *app_type, "1"))
            .collect();
        group_records(&records)
    }

    fn names<'a>(selection: &[Selection<'a>]) -> Vec<&'a str> {
        selection.iter().map(|s| s.group.name.as_str()).collect()
    }

    #[test]
    fn prefers_distinct_app_types() {
        let g = groups(&[("A", "Game"), ("B", "Game"), ("C", "Driver"), ("D", "Utility")]);
        let selection = select_packages(&g, 3);
        assert_eq!(names(&selection), vec!["A", "C", "D"]);
        assert!(selection.iter().all(|s| s.pass == SamplingPass::Diverse));
    }

    #[test]
    fn fill_pass_reaches_the_cap() {
        let g = groups(&[("Microsoft Word", "Operating System"), ("Word", "Operating System")]);
        let selection = select_packages(&g, 10);
        assert_eq!(names(&selection), vec!["Microsoft Word", "Word"]);
        assert_eq!(selection[0].pass, SamplingPass::Diverse);
        assert_eq!(selection[1].pass, SamplingPass::Fill);
    }

    #[test]
    fn fill_pass_keeps_deferral_order() {
        let g = groups(&[
            ("A", "Game"),
            ("B", "Game"),
            ("C", "Driver"),
            ("D", "Game"),
            ("E", "Driver"),
        ]);
        let selection = select_packages(&g, 4);
        assert_eq!(names(&selection), vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn diverse_pass_stops_at_the_cap() {
        let g = groups(&[("A", "Game"), ("B", "Game"), ("C", "Driver"), ("D", "Utility")]);
        let selection = select_packages(&g, 2);
        assert_eq!(names(&selection), vec!["A", "C"]);
        assert!(selection.iter().all(|s| s.pass == SamplingPass::Diverse));
    }

    #[test]
    fn cap_of_one_with_shared_type() {
        let g = groups(&[("A", "Game"), ("B", "Game")]);
        assert_eq!(names(&select_packages(&g, 1)), vec!["A"]);
    }

    #[test]
    fn empty_groups_select_nothing() {
        assert!(select_packages(&PackageGroups::new(), 10).is_empty());
    }
}
