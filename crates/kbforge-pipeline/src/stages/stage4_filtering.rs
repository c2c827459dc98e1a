//! The rule chain over scored clusters, with per-rule audit.

use kbforge_core::errors::KbResult;
use kbforge_core::models::Cluster;
use kbforge_filtering::{FilterPipeline, FilterReport};
use kbforge_observability::tracing_setup::events;
use kbforge_observability::PipelineMetrics;

use super::names;

pub fn filter(
    pipeline: &FilterPipeline,
    clusters: Vec<Cluster>,
    metrics: &mut PipelineMetrics,
) -> KbResult<(Vec<Cluster>, FilterReport)> {
    let outcome = pipeline.apply(clusters)?;
    let report = outcome.report;
    for r in &report.rules {
        events::filter_applied(&r.rule, report.evaluated, r.rejected);
        metrics.record_rejections(&r.rule, r.rejected);
    }
    metrics.record_stage(names::FILTERING, report.evaluated, report.kept);
    Ok((outcome.kept, report))
}
