//! Per-subject top-N and output projection.

use kbforge_core::config::KbConfig;
use kbforge_core::errors::KbResult;
use kbforge_core::models::Cluster;
use kbforge_observability::tracing_setup::events;
use kbforge_observability::PipelineMetrics;
use kbforge_selection::{KnowledgeBase, Selector};

use super::names;

pub fn select(
    selector: &Selector,
    clusters: Vec<Cluster>,
    config: &KbConfig,
    metrics: &mut PipelineMetrics,
) -> KbResult<KnowledgeBase> {
    let input = clusters.len();
    let selection = selector.select(clusters);
    metrics.record_stage(names::SELECTION, input, selection.kept.len());
    events::subjects_selected(selection.subjects, input, selection.kept.len());
    KnowledgeBase::from_selection(
        &selection,
        config.selection.aspects,
        config.selection.keep_namespace,
        &config.filtering.relation_namespace,
    )
}
