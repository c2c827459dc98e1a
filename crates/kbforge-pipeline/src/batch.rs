//! One scoring step over one partition of an id file.

use std::path::Path;

use tracing::info;

use kbforge_core::errors::KbResult;
use kbforge_core::models::ClusterId;
use kbforge_core::partition::BatchPartition;
use kbforge_core::traits::{BulkWriteReport, IClusterStore};
use kbforge_observability::tracing_setup::events;
use kbforge_ranking::ScoreStep;
use kbforge_storage::{read_id_file, write_id_file, StorageEngine};

use crate::builder::KnowledgeBaseBuilder;

/// Write every stored cluster id, one per line, in id order.
pub fn write_cluster_ids(store: &StorageEngine, path: impl AsRef<Path>) -> KbResult<usize> {
    let ids = IClusterStore::ids(store)?;
    write_id_file(path, ids.iter().map(ClusterId::as_str))?;
    Ok(ids.len())
}

/// Run `step` over batch `batch_index` of `num_batches` of the ids in `id_file`.
///
/// Fails with `IdCountMismatch` when any id of the batch is missing from the
/// store; nothing is written in that case.
pub fn run_id_batch(
    builder: &KnowledgeBaseBuilder,
    step: ScoreStep,
    id_file: impl AsRef<Path>,
    batch_index: usize,
    num_batches: usize,
    store: &StorageEngine,
) -> KbResult<BulkWriteReport> {
    let ids = read_id_file(id_file.as_ref())?;
    let partition = BatchPartition::new(batch_index, num_batches, ids.len())?;
    let batch: Vec<ClusterId> = partition
        .slice(&ids)
        .iter()
        .map(|id| ClusterId(id.clone()))
        .collect();
    info!(
        step = step.as_str(),
        batch_index,
        num_batches,
        range = ?partition.range(),
        "id batch started"
    );
    let report = builder.ranking().run_step(step, &batch, store, store, store)?;
    events::scores_attached(step.as_str(), batch.len(), report.failures.len());
    Ok(report)
}
