//! Exact-key aggregation of assertions into triples.
//!
//! Triples keep first-seen order so downstream batching is reproducible for a
//! fixed input order.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use tracing::debug;

use kbforge_core::errors::{GroupingError, KbResult};
use kbforge_core::models::{KeyedAssertion, Triple, TripleKey};

/// Accumulates triples keyed by their 5-tuple.
#[derive(Debug, Default, Clone)]
pub struct TripleAggregator {
    index: HashMap<TripleKey, usize>,
    triples: Vec<Triple>,
}

impl TripleAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one keyed assertion.
    pub fn add(&mut self, keyed: KeyedAssertion) {
        match self.index.get(&keyed.key) {
            Some(&i) => {
                let t = &mut self.triples[i];
                t.assertion_ids.push(keyed.assertion_id);
                t.count += 1;
            }
            None => {
                self.index.insert(keyed.key.clone(), self.triples.len());
                self.triples.push(Triple::new(keyed.key, vec![keyed.assertion_id]));
            }
        }
    }

    /// Fold a partial aggregate in: ids concatenated, counts summed.
    pub fn merge_triple(&mut self, triple: Triple) {
        match self.index.get(&triple.key) {
            Some(&i) => {
                let t = &mut self.triples[i];
                t.count += triple.count;
                t.assertion_ids.extend(triple.assertion_ids);
            }
            None => {
                self.index.insert(triple.key.clone(), self.triples.len());
                self.triples.push(triple);
            }
        }
    }

    pub fn merge(&mut self, other: TripleAggregator) {
        for t in other.triples {
            self.merge_triple(t);
        }
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    pub fn into_triples(self) -> Vec<Triple> {
        self.triples
    }
}

impl FromIterator<KeyedAssertion> for TripleAggregator {
    fn from_iter<I: IntoIterator<Item = KeyedAssertion>>(iter: I) -> Self {
        let mut agg = TripleAggregator::new();
        for k in iter {
            agg.add(k);
        }
        agg
    }
}

/// Aggregate every shard in parallel, then merge the partial maps in shard order.
pub fn aggregate_shards(shards: Vec<Vec<KeyedAssertion>>) -> Vec<Triple> {
    let partials: Vec<TripleAggregator> = shards
        .into_par_iter()
        .map(|shard| shard.into_iter().collect())
        .collect();
    let mut total = TripleAggregator::new();
    for p in partials {
        total.merge(p);
    }
    debug!(triples = total.len(), "shards aggregated");
    total.into_triples()
}

/// Merge partial aggregates read back from per-shard files.
pub fn merge_partials(partials: Vec<Vec<Triple>>) -> Vec<Triple> {
    let mut total = TripleAggregator::new();
    for t in partials.into_iter().flatten() {
        total.merge_triple(t);
    }
    total.into_triples()
}

/// Fail on a repeated key or an assertion id listed twice in one triple.
///
/// One assertion may back several triples when its subject has several senses.
pub fn validate_aggregate(triples: &[Triple]) -> KbResult<()> {
    let mut keys = HashSet::with_capacity(triples.len());
    for t in triples {
        if !keys.insert(&t.key) {
            return Err(GroupingError::DuplicateTripleKey {
                key: t.key.to_string(),
            }
            .into());
        }
        let mut ids = HashSet::with_capacity(t.assertion_ids.len());
        for id in &t.assertion_ids {
            if !ids.insert(*id) {
                return Err(GroupingError::DuplicateAssertionId {
                    id: id.to_string(),
                    key: t.key.to_string(),
                }
                .into());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kbforge_core::models::AssertionId;

    fn keyed(object: &str, seq: u64) -> KeyedAssertion {
        KeyedAssertion {
            key: TripleKey::new("cat", "chase", object, "primary", "cat"),
            assertion_id: AssertionId::new(0, 0, seq),
        }
    }

    #[test]
    fn same_key_accumulates() {
        let agg: TripleAggregator = vec![keyed("mice", 1), keyed("birds", 2), keyed("mice", 3)]
            .into_iter()
            .collect();
        assert_eq!(agg.len(), 2);
        assert_eq!(agg.triples()[0].key.object, "mice");
        assert_eq!(agg.triples()[0].count, 2);
        assert_eq!(agg.triples()[1].count, 1);
    }

    #[test]
    fn partial_merge_sums_counts() {
        let a = vec![Triple::new(keyed("mice", 1).key, vec![AssertionId::new(0, 0, 1)])];
        let b = vec![Triple::new(
            keyed("mice", 2).key,
            vec![AssertionId::new(1, 0, 2), AssertionId::new(1, 0, 3)],
        )];
        let merged = merge_partials(vec![a, b]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].count, 3);
        assert_eq!(merged[0].assertion_ids.len(), 3);
    }

    #[test]
    fn duplicate_key_is_fatal() {
        let t = Triple::new(keyed("mice", 1).key, vec![AssertionId::new(0, 0, 1)]);
        let u = Triple::new(keyed("mice", 2).key, vec![AssertionId::new(0, 0, 2)]);
        assert!(validate_aggregate(&[t, u]).is_err());
    }

    #[test]
    fn repeated_assertion_id_within_triple_is_fatal() {
        let id = AssertionId::new(0, 0, 1);
        let t = Triple::new(keyed("mice", 1).key, vec![id, id]);
        assert!(validate_aggregate(&[t]).is_err());
    }

    #[test]
    fn assertion_may_back_several_senses() {
        let id = AssertionId::new(0, 0, 1);
        let t = Triple::new(keyed("mice", 1).key, vec![id]);
        let u = Triple::new(
            TripleKey::new("cat", "chase", "mice", "subgroup", "pet"),
            vec![id],
        );
        assert!(validate_aggregate(&[t, u]).is_ok());
    }
}
