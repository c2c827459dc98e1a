//! Sentiment annotation of the backing assertions, then every cluster score,
//! one subject at a time so log frequency normalises per subject.

use kbforge_core::errors::KbResult;
use kbforge_core::models::ClusterId;
use kbforge_core::traits::{BulkWriteReport, IAssertionStore, IClusterStore, ITripleStore};
use kbforge_observability::tracing_setup::events;
use kbforge_observability::PipelineMetrics;
use kbforge_ranking::RankingEngine;

pub fn score(
    engine: &RankingEngine,
    subjects: &[Vec<ClusterId>],
    assertions: &dyn IAssertionStore,
    triples: &dyn ITripleStore,
    clusters: &dyn IClusterStore,
    metrics: &mut PipelineMetrics,
) -> KbResult<BulkWriteReport> {
    let assertion_ids = assertions.ids()?;
    let annotated = engine.annotate_assertions(assertions, &assertion_ids)?;
    events::bulk_write_completed("assertions", annotated.applied, annotated.failures.len());
    metrics.record_write_failures(annotated.failures.len());

    let mut report = BulkWriteReport::default();
    let mut scored = 0;
    for ids in subjects {
        let batch = clusters.get_exact(ids)?;
        let updates = engine.score(&batch, triples, assertions)?;
        scored += batch.len();
        report.merge(clusters.apply(updates));
    }
    events::scores_attached("all", scored, report.failures.len());
    events::bulk_write_completed("clusters", report.applied, report.failures.len());
    metrics.record_write_failures(report.failures.len());
    Ok(report)
}
