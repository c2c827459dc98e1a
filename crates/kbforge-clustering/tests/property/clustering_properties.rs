use kbforge_clustering::{cluster_by_threshold, ClusteringEngine};
use kbforge_core::config::{ClusteringConfig, Linkage};
use kbforge_core::models::{SubjectKey, TripleId};
use proptest::prelude::*;
use test_fixtures::{triple, HashEmbedder};

fn linkage() -> impl Strategy<Value = Linkage> {
    prop_oneof![
        Just(Linkage::Ward),
        Just(Linkage::Average),
        Just(Linkage::Complete),
        Just(Linkage::Single),
    ]
}

proptest! {
    #[test]
    fn every_point_gets_exactly_one_label(
        points in prop::collection::vec(prop::collection::vec(-1.0f32..1.0, 3), 0..40),
        threshold in 0.01f64..2.0,
        linkage in linkage(),
    ) {
        let out = cluster_by_threshold(&points, threshold, linkage).unwrap();
        prop_assert_eq!(out.labels.len(), points.len());
        prop_assert!(out.labels.iter().all(|&l| l < out.num_clusters.max(1)));
        prop_assert_eq!(out.num_clusters + out.stats.merges, points.len());
    }

    #[test]
    fn cluster_counts_are_conserved(
        counts in prop::collection::vec(1u64..50, 0..30),
        cap in 1usize..40,
    ) {
        let subject = SubjectKey::new("cat", "primary", "cat");
        let triples: Vec<_> = counts
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let mut t = triple("cat", "like", &format!("thing {i}"), c, i as u64 * 100);
                t.id = Some(TripleId::from_position(0, i));
                t
            })
            .collect();
        let config = ClusteringConfig {
            max_triples_per_subject: cap,
            ..ClusteringConfig::default()
        };
        let engine = ClusteringEngine::new(config, Box::new(HashEmbedder::new(16))).unwrap();
        let out = engine.cluster_subject(&subject, &triples).unwrap();

        let clustered: u64 = counts.iter().take(cap).sum();
        let total: u64 = out.clusters.iter().map(|c| c.count).sum();
        prop_assert_eq!(total, clustered);

        // Each clustered triple is in exactly one cluster.
        let members: usize = out.clusters.iter().map(|c| c.triples.len()).sum();
        prop_assert_eq!(members, counts.len().min(cap));

        // Clusters by descending count; representative is the top member.
        for w in out.clusters.windows(2) {
            prop_assert!(w[0].count >= w[1].count);
        }
        for c in &out.clusters {
            prop_assert_eq!(c.variants[0].object.as_str(), c.object());
            prop_assert!(c.variants.windows(2).all(|w| w[0].count >= w[1].count));
        }
    }
}
