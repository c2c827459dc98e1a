//! Relevance selection per input shard, key-routed aggregation, frequency
//! threshold, and stable triple ids.

use rayon::prelude::*;

use kbforge_core::config::GroupingConfig;
use kbforge_core::errors::KbResult;
use kbforge_core::models::Triple;
use kbforge_core::partition::batch_ranges;
use kbforge_grouping::{
    aggregate_shards, assign_triple_ids, filter_by_frequency, route_to_shards, select_relevant,
    validate_aggregate, RelevanceOutcome,
};
use kbforge_observability::tracing_setup::events;
use kbforge_observability::PipelineMetrics;

use super::names;
use crate::inputs::BuildInputs;

/// Thresholded triples with ids assigned.
pub fn aggregate(
    inputs: &BuildInputs,
    config: &GroupingConfig,
    metrics: &mut PipelineMetrics,
) -> KbResult<Vec<Triple>> {
    let shards = batch_ranges(inputs.assertions.len(), config.num_batches)?;
    let outcomes: Vec<RelevanceOutcome> = shards
        .into_par_iter()
        .map(|range| {
            select_relevant(
                &inputs.assertions[range],
                &inputs.catalog,
                &inputs.urls,
                config.max_object_tokens,
            )
        })
        .collect();

    let mut invalid = 0;
    let mut uncatalogued = 0;
    let mut no_document = 0;
    let mut keyed = Vec::new();
    for o in outcomes {
        invalid += o.invalid;
        uncatalogued += o.uncatalogued;
        no_document += o.no_document;
        keyed.extend(o.keyed);
    }
    metrics.record_stage(names::RELEVANCE, inputs.assertions.len(), keyed.len());

    let keyed_count = keyed.len();
    let triples = aggregate_shards(route_to_shards(keyed, config.num_batches)?);
    validate_aggregate(&triples)?;
    metrics.record_stage(names::AGGREGATION, keyed_count, triples.len());
    events::triples_aggregated(
        inputs.assertions.len(),
        invalid,
        uncatalogued,
        no_document,
        triples.len(),
    );

    let before = triples.len();
    let mut triples = filter_by_frequency(triples, config.min_freq);
    metrics.record_stage(names::THRESHOLD, before, triples.len());
    events::triples_thresholded(before, triples.len(), config.min_freq);

    assign_triple_ids(&mut triples, config.num_batches)?;
    Ok(triples)
}
