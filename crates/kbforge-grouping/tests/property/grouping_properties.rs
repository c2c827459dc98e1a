use std::collections::{BTreeMap, BTreeSet};

use kbforge_core::models::{AssertionId, KeyedAssertion, Triple, TripleKey};
use kbforge_grouping::{aggregate_shards, filter_by_frequency, merge_partials, TripleAggregator};
use proptest::prelude::*;

type Canonical = BTreeMap<TripleKey, (u64, BTreeSet<AssertionId>)>;

fn canonical(triples: &[Triple]) -> Canonical {
    triples
        .iter()
        .map(|t| {
            (
                t.key.clone(),
                (t.count, t.assertion_ids.iter().copied().collect()),
            )
        })
        .collect()
}

fn keyed_records() -> impl Strategy<Value = Vec<KeyedAssertion>> {
    prop::collection::vec((0u8..4, 0u8..4), 0..120).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (p, o))| KeyedAssertion {
                key: TripleKey::new("cat", format!("p{p}"), format!("o{o}"), "primary", "cat"),
                assertion_id: AssertionId::new(0, 0, i as u64),
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn shard_order_does_not_change_aggregate(records in keyed_records(), split in 1usize..6) {
        let shards: Vec<Vec<KeyedAssertion>> =
            records.chunks(split).map(|c| c.to_vec()).collect();
        let mut reversed = shards.clone();
        reversed.reverse();

        let a = aggregate_shards(shards);
        let b = aggregate_shards(reversed);
        prop_assert_eq!(canonical(&a), canonical(&b));
    }

    #[test]
    fn partial_merge_is_associative(records in keyed_records(), split in 1usize..6) {
        let whole: TripleAggregator = records.iter().cloned().collect();
        let partials: Vec<Vec<Triple>> = records
            .chunks(split)
            .map(|c| c.iter().cloned().collect::<TripleAggregator>().into_triples())
            .collect();
        let mut rev = partials.clone();
        rev.reverse();
        prop_assert_eq!(canonical(whole.triples()), canonical(&merge_partials(partials)));
        prop_assert_eq!(canonical(whole.triples()), canonical(&merge_partials(rev)));
    }

    #[test]
    fn count_equals_id_list_length(records in keyed_records()) {
        let agg: TripleAggregator = records.into_iter().collect();
        for t in agg.triples() {
            prop_assert_eq!(t.count as usize, t.assertion_ids.len());
        }
    }

    #[test]
    fn threshold_is_monotone(records in keyed_records(), lo in 0u64..10, delta in 1u64..10) {
        let triples = aggregate_shards(vec![records]);
        let loose: BTreeSet<TripleKey> =
            filter_by_frequency(triples.clone(), lo).into_iter().map(|t| t.key).collect();
        let strict: BTreeSet<TripleKey> =
            filter_by_frequency(triples, lo + delta).into_iter().map(|t| t.key).collect();
        prop_assert!(strict.is_subset(&loose));
    }
}
