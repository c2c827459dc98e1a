use serde::{Deserialize, Serialize};

use crate::errors::KbResult;
use crate::models::Sentiment;

/// Input to the relation classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationQuery {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

/// Maps a (subject, predicate, object) triple to a relation label of the taxonomy.
pub trait IRelationClassifier: Send + Sync {
    /// One label per query, in query order.
    fn predict(&self, queries: &[RelationQuery]) -> KbResult<Vec<String>>;

    fn name(&self) -> &str;
}

/// Sentence-level three-way sentiment model.
pub trait ISentimentClassifier: Send + Sync {
    /// One distribution per sentence, in input order.
    fn classify(&self, sentences: &[String]) -> KbResult<Vec<Sentiment>>;

    fn name(&self) -> &str;
}
