//! Per-subject clustering; clusters are stored and member triples point back
//! at their cluster.

use kbforge_clustering::ClusteringEngine;
use kbforge_core::errors::KbResult;
use kbforge_core::models::{ClusterId, Triple};
use kbforge_core::traits::{IClusterStore, ITripleStore};
use kbforge_observability::tracing_setup::events;
use kbforge_observability::PipelineMetrics;

use super::names;

/// Cluster ids of each subject, subjects in first-seen order and each
/// subject's clusters by descending count.
pub fn cluster(
    engine: &ClusteringEngine,
    triples: Vec<Triple>,
    triple_store: &dyn ITripleStore,
    cluster_store: &dyn IClusterStore,
    metrics: &mut PipelineMetrics,
) -> KbResult<Vec<Vec<ClusterId>>> {
    let input = triples.len();
    triple_store.insert_bulk(triples.clone())?;
    let results = engine.cluster_all(triples)?;

    let mut subjects = Vec::with_capacity(results.len());
    let mut clusters = Vec::new();
    let mut updates = Vec::new();
    for r in results {
        events::subject_clustered(&r.subject.to_string(), r.triple_updates.len(), r.clusters.len());
        subjects.push(r.clusters.iter().map(|c| c.id.clone()).collect());
        clusters.extend(r.clusters);
        updates.extend(r.triple_updates);
    }
    metrics.record_stage(names::CLUSTERING, input, clusters.len());

    let stored = cluster_store.insert_bulk(clusters)?;
    events::bulk_write_completed("clusters", stored, 0);
    let report = triple_store.assign_clusters(updates);
    events::bulk_write_completed("triples", report.applied, report.failures.len());
    metrics.record_write_failures(report.failures.len());
    Ok(subjects)
}
