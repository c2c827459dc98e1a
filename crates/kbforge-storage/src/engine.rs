//! StorageEngine: concurrent in-memory collections implementing every store trait.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use kbforge_core::errors::{KbResult, StorageError};
use kbforge_core::models::{Assertion, AssertionId, Cluster, ClusterId, Sentiment, Triple, TripleId};
use kbforge_core::traits::{
    BulkWriteReport, ClusterUpdate, IAssertionStore, IClusterStore, ITripleStore, TripleUpdate,
    WriteFailure,
};

/// Thread-safe record store. Writes to distinct keys never contend.
#[derive(Clone, Default)]
pub struct StorageEngine {
    assertions: Arc<DashMap<AssertionId, Assertion>>,
    triples: Arc<DashMap<TripleId, Triple>>,
    clusters: Arc<DashMap<ClusterId, Cluster>>,
}

impl StorageEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assertion_count(&self) -> usize {
        self.assertions.len()
    }

    pub fn triple_count(&self) -> usize {
        self.triples.len()
    }

    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    /// Every stored triple, ordered by id.
    pub fn all_triples(&self) -> Vec<Triple> {
        let mut out: Vec<Triple> = self.triples.iter().map(|r| r.value().clone()).collect();
        out.sort_by(|a, b| a.id.cmp(&b.id));
        out
    }

    /// Every stored cluster, ordered by id.
    pub fn all_clusters(&self) -> Vec<Cluster> {
        let mut out: Vec<Cluster> = self.clusters.iter().map(|r| r.value().clone()).collect();
        out.sort_by(|a, b| a.id.cmp(&b.id));
        out
    }
}

fn failure(id: impl ToString, reason: impl Into<String>) -> WriteFailure {
    WriteFailure {
        id: id.to_string(),
        reason: reason.into(),
    }
}

fn finish(collection: &str, report: BulkWriteReport) -> BulkWriteReport {
    debug!(
        collection,
        applied = report.applied,
        failed = report.failures.len(),
        "bulk write finished"
    );
    report
}

impl IAssertionStore for StorageEngine {
    fn insert_bulk(&self, assertions: Vec<Assertion>) -> KbResult<usize> {
        let n = assertions.len();
        for a in assertions {
            self.assertions.insert(a.id, a);
        }
        Ok(n)
    }

    fn get_bulk(&self, ids: &[AssertionId]) -> KbResult<Vec<Assertion>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.assertions.get(id).map(|r| r.value().clone()))
            .collect())
    }

    fn set_sentiments(&self, updates: Vec<(AssertionId, Sentiment)>) -> BulkWriteReport {
        let mut report = BulkWriteReport::default();
        for (id, sentiment) in updates {
            match self.assertions.get_mut(&id) {
                Some(mut entry) => {
                    entry.sentiment = Some(sentiment);
                    report.applied += 1;
                }
                None => report.failures.push(failure(id, "assertion not found")),
            }
        }
        finish("assertions", report)
    }

    fn ids(&self) -> KbResult<Vec<AssertionId>> {
        let mut ids: Vec<AssertionId> = self.assertions.iter().map(|r| *r.key()).collect();
        ids.sort();
        Ok(ids)
    }
}

impl ITripleStore for StorageEngine {
    fn insert_bulk(&self, triples: Vec<Triple>) -> KbResult<usize> {
        let n = triples.len();
        for t in triples {
            let id = t.id.clone().ok_or_else(|| StorageError::MalformedRecord {
                path: "triples".to_string(),
                line: 0,
                reason: format!("triple {} has no id", t.key),
            })?;
            self.triples.insert(id, t);
        }
        Ok(n)
    }

    fn get_bulk(&self, ids: &[TripleId]) -> KbResult<Vec<Triple>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.triples.get(id).map(|r| r.value().clone()))
            .collect())
    }

    fn assign_clusters(&self, updates: Vec<TripleUpdate>) -> BulkWriteReport {
        let mut report = BulkWriteReport::default();
        for update in updates {
            match self.triples.get_mut(&update.triple_id) {
                Some(mut entry) => {
                    entry.cluster_id = Some(update.cluster_id);
                    report.applied += 1;
                }
                None => report
                    .failures
                    .push(failure(&update.triple_id, "triple not found")),
            }
        }
        finish("triples", report)
    }
}

impl IClusterStore for StorageEngine {
    fn insert_bulk(&self, clusters: Vec<Cluster>) -> KbResult<usize> {
        let n = clusters.len();
        for c in clusters {
            self.clusters.insert(c.id.clone(), c);
        }
        Ok(n)
    }

    fn get_bulk(&self, ids: &[ClusterId]) -> KbResult<Vec<Cluster>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.clusters.get(id).map(|r| r.value().clone()))
            .collect())
    }

    fn ids(&self) -> KbResult<Vec<ClusterId>> {
        let mut ids: Vec<ClusterId> = self.clusters.iter().map(|r| r.key().clone()).collect();
        ids.sort();
        Ok(ids)
    }

    fn apply(&self, updates: Vec<ClusterUpdate>) -> BulkWriteReport {
        let mut report = BulkWriteReport::default();
        for update in updates {
            match self.clusters.get_mut(&update.cluster_id) {
                Some(mut entry) => {
                    update.patch.apply(&mut entry.scores);
                    report.applied += 1;
                }
                None => report
                    .failures
                    .push(failure(&update.cluster_id, "cluster not found")),
            }
        }
        finish("clusters", report)
    }
}
