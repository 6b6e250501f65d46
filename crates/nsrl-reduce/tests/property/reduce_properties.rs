use std::collections::HashSet;

use nsrl_core::models::{FeatureName, FeatureSet, MatchRecord};
use nsrl_reduce::{group_records, reduce, select_packages, ReducerLimits, SamplingPass};
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = MatchRecord> {
    (
        prop::sample::select(vec!["", "Word", " Word", "Excel", "Knight Online", "Sage 50", "Capsa"]),
        prop::sample::select(vec!["", "Game", "Drivers", "Accounting", "Operating System"]),
        "[0-9a-z.,]{0,6}",
    )
        .prop_map(|(name, app_type, version)| MatchRecord::new(name, app_type, version))
}

fn labels(features: &FeatureSet, feature: FeatureName) -> Vec<String> {
    features
        .values(feature)
        .map(|v| v.label.clone().unwrap_or_default())
        .collect()
}

proptest! {
    #[test]
    fn hits_count_every_record(records in prop::collection::vec(record_strategy(), 0..60)) {
        let features = reduce(&records, ReducerLimits::new(10, 4000).unwrap());
        prop_assert_eq!(features.integer(FeatureName::NsrlHits), Some(records.len() as u64));
    }

    #[test]
    fn package_hits_count_distinct_usable_names(records in prop::collection::vec(record_strategy(), 0..60)) {
        let expected: HashSet<&str> = records
            .iter()
            .filter(|r| r.is_usable())
            .map(|r| r.application_name.trim())
            .collect();
        let features = reduce(&records, ReducerLimits::new(10, 4000).unwrap());
        prop_assert_eq!(features.integer(FeatureName::NsrlPackageHits), Some(expected.len() as u64));
    }

    #[test]
    fn application_count_is_min_of_cap_and_packages(
        records in prop::collection::vec(record_strategy(), 0..60),
        max_details in 1usize..8,
    ) {
        let features = reduce(&records, ReducerLimits::new(max_details, 4000).unwrap());
        let packages = features.integer(FeatureName::NsrlPackageHits).unwrap() as usize;
        prop_assert_eq!(features.count(FeatureName::Application), max_details.min(packages));
        prop_assert_eq!(features.count(FeatureName::ApplicationVersions), max_details.min(packages));
    }

    #[test]
    fn diverse_selections_have_distinct_app_types(
        records in prop::collection::vec(record_strategy(), 0..60),
        max_details in 1usize..8,
    ) {
        let groups = group_records(&records);
        let distinct_types: HashSet<&str> = groups.iter().map(|g| g.app_type.as_str()).collect();
        let selection = select_packages(&groups, max_details);

        let leading = max_details.min(distinct_types.len());
        let leading_types: HashSet<&str> = selection
            .iter()
            .take(leading)
            .map(|s| s.group.app_type.as_str())
            .collect();
        prop_assert_eq!(leading_types.len(), leading);
        prop_assert!(selection.iter().take(leading).all(|s| s.pass == SamplingPass::Diverse));
    }

    #[test]
    fn rendered_versions_fit_the_value_length(
        records in prop::collection::vec(record_strategy(), 0..60),
        max_value_length in 1usize..12,
    ) {
        let features = reduce(&records, ReducerLimits::new(10, max_value_length).unwrap());
        for label in labels(&features, FeatureName::ApplicationVersions) {
            prop_assert!(label.chars().count() <= max_value_length - 1);
        }
    }

    #[test]
    fn reduction_is_idempotent(
        records in prop::collection::vec(record_strategy(), 0..60),
        max_details in 1usize..8,
    ) {
        let limits = ReducerLimits::new(max_details, 4000).unwrap();
        prop_assert_eq!(reduce(&records, limits), reduce(&records, limits));
    }

    #[test]
    fn primary_pass_versions_are_sorted(records in prop::collection::vec(record_strategy(), 0..60)) {
        let groups = group_records(&records);
        for selected in select_packages(&groups, 10) {
            let rendered = nsrl_reduce::render_versions(selected.group, selected.pass, 4000);
            let expected: Vec<&str> = match selected.pass {
                SamplingPass::Diverse => {
                    let mut v: Vec<&str> = selected.group.versions.iter().collect();
                    v.sort_unstable();
                    v
                }
                SamplingPass::Fill => selected.group.versions.iter().collect(),
            };
            prop_assert_eq!(rendered, expected.join(","));
        }
    }
}
