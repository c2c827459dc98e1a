use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use kbforge_core::config::SelectionConfig;
use kbforge_selection::{normalize_object, Selector};
use test_fixtures::cluster;

const SUBJECTS: &[&str] = &["cat", "dog", "owl"];
const OBJECTS: &[&str] = &["pet", "a pet", "the pet", "fur", "wing", "an animal", "animal"];
const RELATIONS: &[&str] = &["/r/IsA", "/r/HasA"];

proptest! {
    #[test]
    fn selection_respects_cap_and_distinct_pairs(
        rows in prop::collection::vec((0..3usize, 0..7usize, 0..2usize, 1..50u64), 0..60),
        top_n in 0..5usize,
    ) {
        let clusters = rows
            .iter()
            .enumerate()
            .map(|(i, &(s, o, r, count))| {
                cluster(SUBJECTS[s], "be", OBJECTS[o], count)
                    .rank(i)
                    .relation(RELATIONS[r], OBJECTS[o])
                    .build()
            })
            .collect::<Vec<_>>();
        let config = SelectionConfig { top_n, ..SelectionConfig::default() };
        let selection = Selector::new(config).select(clusters);

        let mut per_subject: HashMap<String, Vec<u64>> = HashMap::new();
        let mut pairs = HashSet::new();
        for c in &selection.kept {
            per_subject.entry(c.subject().to_string()).or_default().push(c.count);
            let pair = (
                c.subject().to_string(),
                c.predicted_relation().to_string(),
                normalize_object(c.predicted_object()),
            );
            prop_assert!(pairs.insert(pair));
        }
        for counts in per_subject.values() {
            prop_assert!(counts.len() <= top_n);
            prop_assert!(counts.windows(2).all(|w| w[0] >= w[1]));
        }
    }
}
