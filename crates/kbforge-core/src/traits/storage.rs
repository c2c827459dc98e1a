use serde::{Deserialize, Serialize};

use crate::errors::{KbResult, StorageError};
use crate::models::{
    Assertion, AssertionId, Cluster, ClusterId, ScorePatch, Sentiment, Triple, TripleId,
};

/// Per-record failure inside an unordered bulk write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteFailure {
    pub id: String,
    pub reason: String,
}

/// Outcome of an unordered bulk write. Failed records never roll back applied ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkWriteReport {
    pub applied: usize,
    pub failures: Vec<WriteFailure>,
}

impl BulkWriteReport {
    pub fn merge(&mut self, other: BulkWriteReport) {
        self.applied += other.applied;
        self.failures.extend(other.failures);
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Assign a triple to the cluster it was folded into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripleUpdate {
    pub triple_id: TripleId,
    pub cluster_id: ClusterId,
}

/// Attach one score field to a cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterUpdate {
    pub cluster_id: ClusterId,
    pub patch: ScorePatch,
}

/// Fail with `IdCountMismatch` unless every requested id was fetched.
pub fn ensure_complete<T>(collection: &str, requested: usize, fetched: Vec<T>) -> KbResult<Vec<T>> {
    if fetched.len() != requested {
        return Err(StorageError::IdCountMismatch {
            collection: collection.to_string(),
            expected: requested,
            actual: fetched.len(),
        }
        .into());
    }
    Ok(fetched)
}

/// Raw assertions, keyed by id.
pub trait IAssertionStore: Send + Sync {
    fn insert_bulk(&self, assertions: Vec<Assertion>) -> KbResult<usize>;

    /// Fetch the given ids; unknown ids are skipped.
    fn get_bulk(&self, ids: &[AssertionId]) -> KbResult<Vec<Assertion>>;

    /// Attach sentiment distributions, unordered.
    fn set_sentiments(&self, updates: Vec<(AssertionId, Sentiment)>) -> BulkWriteReport;

    /// Ids of every stored assertion, ascending.
    fn ids(&self) -> KbResult<Vec<AssertionId>>;

    /// Fetch the given ids, failing if any is missing.
    fn get_exact(&self, ids: &[AssertionId]) -> KbResult<Vec<Assertion>> {
        ensure_complete("assertions", ids.len(), self.get_bulk(ids)?)
    }
}

/// Aggregated triples, keyed by triple id.
pub trait ITripleStore: Send + Sync {
    /// Store triples; each must carry an id.
    fn insert_bulk(&self, triples: Vec<Triple>) -> KbResult<usize>;

    fn get_bulk(&self, ids: &[TripleId]) -> KbResult<Vec<Triple>>;

    fn assign_clusters(&self, updates: Vec<TripleUpdate>) -> BulkWriteReport;

    fn get_exact(&self, ids: &[TripleId]) -> KbResult<Vec<Triple>> {
        ensure_complete("triples", ids.len(), self.get_bulk(ids)?)
    }
}

/// Clusters, keyed by cluster id.
pub trait IClusterStore: Send + Sync {
    fn insert_bulk(&self, clusters: Vec<Cluster>) -> KbResult<usize>;

    fn get_bulk(&self, ids: &[ClusterId]) -> KbResult<Vec<Cluster>>;

    /// Every stored cluster id, ascending.
    fn ids(&self) -> KbResult<Vec<ClusterId>>;

    /// Apply score patches, unordered.
    fn apply(&self, updates: Vec<ClusterUpdate>) -> BulkWriteReport;

    fn get_exact(&self, ids: &[ClusterId]) -> KbResult<Vec<Cluster>> {
        ensure_complete("clusters", ids.len(), self.get_bulk(ids)?)
    }
}
