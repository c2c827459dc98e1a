use kbforge_core::models::ScorePatch;
use kbforge_ranking::{log_freq_updates, normalized_log_freq};
use proptest::prelude::*;
use test_fixtures::cluster;

proptest! {
    #[test]
    fn log_freq_in_unit_range_with_max_at_one(counts in prop::collection::vec(1u64..10_000, 1..50)) {
        let values = normalized_log_freq(&counts);
        prop_assert_eq!(values.len(), counts.len());
        prop_assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));

        let max = counts.iter().copied().max().unwrap_or(1);
        for (c, v) in counts.iter().zip(&values) {
            if *c == max {
                prop_assert_eq!(*v, 1.0);
            }
        }
    }

    #[test]
    fn log_freq_normalises_per_subject(
        dog in prop::collection::vec(1u64..500, 1..20),
        cat in prop::collection::vec(1u64..500, 1..20),
    ) {
        let clusters: Vec<_> = dog
            .iter()
            .enumerate()
            .map(|(i, &n)| cluster("dog", "have", &format!("thing {i}"), n).rank(i).build())
            .chain(cat.iter().enumerate().map(|(i, &n)| {
                cluster("cat", "have", &format!("thing {i}"), n).rank(i).build()
            }))
            .collect();
        let updates = log_freq_updates(&clusters);
        prop_assert_eq!(updates.len(), clusters.len());

        let ones = updates
            .iter()
            .filter(|u| matches!(u.patch, ScorePatch::LogFreq(v) if v == 1.0))
            .count();
        // At least the top cluster of each subject.
        prop_assert!(ones >= 2);
    }
}
