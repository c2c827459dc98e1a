use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AssertionId, ClusterId, SubjectKey, SubjectType};

/// Aggregation key: the 5-tuple that makes a triple unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TripleKey {
    pub subject: String,
    pub predicate: String,
    pub object: String,
    pub subject_type: SubjectType,
    pub super_subject: String,
}

impl TripleKey {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
        subject_type: impl Into<SubjectType>,
        super_subject: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            subject_type: subject_type.into(),
            super_subject: super_subject.into(),
        }
    }

    pub fn subject_key(&self) -> SubjectKey {
        SubjectKey {
            subject: self.subject.clone(),
            subject_type: self.subject_type.clone(),
            super_subject: self.super_subject.clone(),
        }
    }

    /// Text handed to the embedding model.
    pub fn sentence(&self) -> String {
        format!("{} {} {}", self.subject, self.predicate, self.object)
    }

    /// Stable content hash of the key fields, used for shard routing.
    pub fn content_hash(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        for field in [
            self.subject.as_str(),
            self.predicate.as_str(),
            self.object.as_str(),
            self.subject_type.as_str(),
            self.super_subject.as_str(),
        ] {
            hasher.update(&(field.len() as u64).to_le_bytes());
            hasher.update(field.as_bytes());
        }
        hasher.finalize()
    }
}

impl fmt::Display for TripleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}) [{} of {}]",
            self.subject, self.predicate, self.object, self.subject_type, self.super_subject
        )
    }
}

/// Stable per-batch triple id, `triple-BBB-OOOOOOO`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripleId(pub String);

impl TripleId {
    pub fn from_position(batch: usize, offset: usize) -> Self {
        TripleId(format!("triple-{batch:03}-{offset:07}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TripleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An assertion projected onto one fine-grained subject, ready for aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyedAssertion {
    pub key: TripleKey,
    pub assertion_id: AssertionId,
}

/// A deduplicated fact with its supporting assertions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triple {
    /// Assigned once, when aggregated triples are re-sharded.
    #[serde(default)]
    pub id: Option<TripleId>,
    #[serde(flatten)]
    pub key: TripleKey,
    pub count: u64,
    pub assertion_ids: Vec<AssertionId>,
    /// Cluster this triple was folded into, once clustering has run.
    #[serde(default)]
    pub cluster_id: Option<ClusterId>,
}

impl Triple {
    pub fn new(key: TripleKey, assertion_ids: Vec<AssertionId>) -> Self {
        Self {
            id: None,
            key,
            count: assertion_ids.len() as u64,
            assertion_ids,
            cluster_id: None,
        }
    }
}
