//! Exact-match denylists over objects, predicates, pairs and relations.

use std::collections::{HashMap, HashSet};

use kbforge_core::lexicon::{IGNORED_OBJECTS, IGNORED_PREDICATES, IGNORED_PREDICATE_OBJECT_PAIRS};
use kbforge_core::models::{relation, Cluster, ScoreField};

use crate::rule::FilterRule;

fn owned_set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Rejects when either the raw object or the predicted object is denylisted.
#[derive(Debug, Clone)]
pub struct IgnoreObjectRule {
    objects: HashSet<String>,
}

impl IgnoreObjectRule {
    pub fn new(objects: impl IntoIterator<Item = String>) -> Self {
        Self {
            objects: objects.into_iter().collect(),
        }
    }
}

impl Default for IgnoreObjectRule {
    fn default() -> Self {
        Self {
            objects: owned_set(IGNORED_OBJECTS),
        }
    }
}

impl FilterRule for IgnoreObjectRule {
    fn name(&self) -> String {
        format!("IgnoreObjectRule - {} objects", self.objects.len())
    }

    fn requires(&self) -> &[ScoreField] {
        &[ScoreField::PredictedObject]
    }

    fn validate(&self, cluster: &Cluster) -> bool {
        !self.objects.contains(cluster.predicted_object()) && !self.objects.contains(cluster.object())
    }
}

/// Rejects modal, auxiliary and otherwise noisy raw predicates.
#[derive(Debug, Clone)]
pub struct IgnorePredicateRule {
    predicates: HashSet<String>,
}

impl IgnorePredicateRule {
    pub fn new(predicates: impl IntoIterator<Item = String>) -> Self {
        Self {
            predicates: predicates.into_iter().collect(),
        }
    }
}

impl Default for IgnorePredicateRule {
    fn default() -> Self {
        Self {
            predicates: owned_set(IGNORED_PREDICATES),
        }
    }
}

impl FilterRule for IgnorePredicateRule {
    fn name(&self) -> String {
        format!("IgnorePredicateRule - {} predicates", self.predicates.len())
    }

    fn validate(&self, cluster: &Cluster) -> bool {
        !self.predicates.contains(cluster.predicate())
    }
}

/// Rejects idiomatic raw (predicate, object) pairs.
#[derive(Debug, Clone)]
pub struct IgnorePredicateObjectRule {
    /// predicate -> objects
    pairs: HashMap<String, HashSet<String>>,
}

impl IgnorePredicateObjectRule {
    pub fn new(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut map: HashMap<String, HashSet<String>> = HashMap::new();
        for (p, o) in pairs {
            map.entry(p).or_default().insert(o);
        }
        Self { pairs: map }
    }
}

impl Default for IgnorePredicateObjectRule {
    fn default() -> Self {
        Self::new(
            IGNORED_PREDICATE_OBJECT_PAIRS
                .iter()
                .map(|&(p, o)| (p.to_string(), o.to_string())),
        )
    }
}

impl FilterRule for IgnorePredicateObjectRule {
    fn name(&self) -> String {
        let n: usize = self.pairs.values().map(HashSet::len).sum();
        format!("IgnorePredicateObjectRule - {n} pairs")
    }

    fn validate(&self, cluster: &Cluster) -> bool {
        !self
            .pairs
            .get(cluster.predicate())
            .is_some_and(|objects| objects.contains(cluster.object()))
    }
}

/// Relation kinds that never make informative commonsense assertions.
pub const IGNORED_RELATIONS: &[&str] = &[
    relation::ANTONYM,
    relation::SYNONYM,
    relation::MANNER_OF,
    relation::LOCATED_NEAR,
    relation::DISTINCT_FROM,
];

/// Rejects globally excluded predicted relations.
#[derive(Debug, Clone)]
pub struct IgnoreRelationRule {
    relations: HashSet<String>,
}

impl IgnoreRelationRule {
    pub fn new(relations: impl IntoIterator<Item = String>) -> Self {
        Self {
            relations: relations.into_iter().collect(),
        }
    }
}

impl Default for IgnoreRelationRule {
    fn default() -> Self {
        Self {
            relations: owned_set(IGNORED_RELATIONS),
        }
    }
}

impl FilterRule for IgnoreRelationRule {
    fn name(&self) -> String {
        format!("IgnoreRelationRule - {} relations", self.relations.len())
    }

    fn requires(&self) -> &[ScoreField] {
        &[ScoreField::PredictedRelation]
    }

    fn validate(&self, cluster: &Cluster) -> bool {
        !self.relations.contains(cluster.predicted_relation())
    }
}
