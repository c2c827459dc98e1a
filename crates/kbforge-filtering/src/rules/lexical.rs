//! Token-level rules over the predicate and the predicted object.

use std::collections::{HashMap, HashSet};

use kbforge_core::models::{relation, Cluster, ScoreField};
use kbforge_core::text::contains_token;

use crate::rule::FilterRule;

const NEGATIONS: &[&str] = &["not", "no"];

/// Rejects negated statements: "not" or "no" as a token of the predicate
/// or of the predicted object.
#[derive(Debug, Clone, Copy, Default)]
pub struct NegationRule;

impl FilterRule for NegationRule {
    fn name(&self) -> String {
        "NegationRule".to_string()
    }

    fn requires(&self) -> &[ScoreField] {
        &[ScoreField::PredictedObject]
    }

    fn validate(&self, cluster: &Cluster) -> bool {
        !NEGATIONS.iter().any(|neg| {
            contains_token(cluster.predicted_object(), neg) || contains_token(cluster.predicate(), neg)
        })
    }
}

/// Pronouns, demonstratives, wh-words and vague nouns that make an object unusable.
pub const BAD_OBJECT_WORDS: &[&str] = &[
    "my", "mine", "your", "yours", "his", "her", "its",
    "you", "us", "me",
    "this", "that", "these", "those", "which", "whom", "what", "how", "when", "where", "why",
    "etc", "named",
    "something", "anything", "nothing", "everything",
];

/// Rejects predicted objects containing any bad word token.
#[derive(Debug, Clone)]
pub struct ObjectContainsWordRule {
    words: HashSet<String>,
}

impl ObjectContainsWordRule {
    pub fn new(words: impl IntoIterator<Item = String>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }
}

impl Default for ObjectContainsWordRule {
    fn default() -> Self {
        Self::new(BAD_OBJECT_WORDS.iter().map(|w| w.to_string()))
    }
}

impl FilterRule for ObjectContainsWordRule {
    fn name(&self) -> String {
        format!("ObjectContainsWordRule - {} bad words", self.words.len())
    }

    fn requires(&self) -> &[ScoreField] {
        &[ScoreField::PredictedObject]
    }

    fn validate(&self, cluster: &Cluster) -> bool {
        !cluster
            .predicted_object()
            .split_whitespace()
            .any(|t| self.words.contains(t))
    }
}

/// Object words known to produce low-quality assertions under one relation.
pub const RELATION_OBJECT_WORDS: &[(&str, &[&str])] = &[
    (
        relation::AT_LOCATION,
        &[
            "position", "positions", "condition", "conditions", "location", "locations",
            "situation", "situations", "case", "cases", "same", "demand", "supply", "process",
            "form", "shape", "mode", "talk",
        ],
    ),
    (
        relation::HAS_A,
        &[
            "time", "chance", "place", "problem", "idea", "advantage", "disadvantage", "ability",
            "access", "fun", "plan", "choice", "reason", "comment", "interest", "trouble", "way",
            "name", "difficulty", "tendency",
        ],
    ),
    (relation::HAS_PROPERTY, &["of"]),
    (relation::SIMILAR_TO, &["same"]),
    (relation::IS_A, &["any", "only", "first", "last"]),
    (
        relation::USED_FOR,
        &[
            "minute", "minutes", "hour", "hours", "day", "days", "month", "months", "year",
            "years", "century", "centuries", "use", "used",
        ],
    ),
];

/// Rejects a predicted object containing a word denylisted for its predicted relation.
#[derive(Debug, Clone)]
pub struct RelationObjectWordRule {
    words: HashMap<String, HashSet<String>>,
}

impl RelationObjectWordRule {
    pub fn new(table: impl IntoIterator<Item = (String, Vec<String>)>) -> Self {
        let mut words: HashMap<String, HashSet<String>> = HashMap::new();
        for (rel, ws) in table {
            words.entry(rel).or_default().extend(ws);
        }
        Self { words }
    }

    /// The built-in table with every relation label moved into `namespace`.
    pub fn with_namespace(namespace: &str) -> Self {
        Self::new(RELATION_OBJECT_WORDS.iter().map(|&(rel, ws)| {
            (
                super::rebase(rel, namespace),
                ws.iter().map(|w| w.to_string()).collect(),
            )
        }))
    }
}

impl Default for RelationObjectWordRule {
    fn default() -> Self {
        Self::with_namespace(kbforge_core::config::defaults::DEFAULT_RELATION_NAMESPACE)
    }
}

impl FilterRule for RelationObjectWordRule {
    fn name(&self) -> String {
        format!("RelationObjectWordRule - {} relations", self.words.len())
    }

    fn requires(&self) -> &[ScoreField] {
        &[ScoreField::PredictedRelation, ScoreField::PredictedObject]
    }

    fn validate(&self, cluster: &Cluster) -> bool {
        let Some(words) = self.words.get(cluster.predicted_relation()) else {
            return true;
        };
        !cluster
            .predicted_object()
            .split_whitespace()
            .any(|t| words.contains(t))
    }
}
