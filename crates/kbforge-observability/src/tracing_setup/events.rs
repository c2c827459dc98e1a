//! Structured log events for each pipeline stage.
//!
//! Each function emits a `tracing` event with an `event` name field.

pub fn triples_aggregated(
    assertions: usize,
    invalid: usize,
    uncatalogued: usize,
    no_document: usize,
    triples: usize,
) {
    tracing::info!(
        event = "triples_aggregated",
        assertions,
        invalid,
        uncatalogued,
        no_document,
        triples,
        "triples aggregated"
    );
}

pub fn triples_thresholded(before: usize, after: usize, min_freq: u64) {
    tracing::info!(
        event = "triples_thresholded",
        before,
        after,
        min_freq,
        "frequency threshold applied"
    );
}

/// Log the outcome of clustering one subject.
pub fn subject_clustered(subject: &str, triples: usize, clusters: usize) {
    tracing::debug!(
        event = "subject_clustered",
        subject = %subject,
        triples,
        clusters,
        "subject clustered"
    );
}

/// Log one filter rule's rejections.
pub fn filter_applied(rule: &str, evaluated: usize, rejected: usize) {
    tracing::info!(
        event = "filter_applied",
        rule = %rule,
        evaluated,
        rejected,
        "filter rule applied"
    );
}

pub fn scores_attached(step: &str, clusters: usize, failures: usize) {
    tracing::info!(
        event = "scores_attached",
        step = %step,
        clusters,
        failures,
        "scores attached"
    );
}

pub fn subjects_selected(subjects: usize, clusters: usize, kept: usize) {
    tracing::info!(
        event = "subjects_selected",
        subjects,
        clusters,
        kept,
        "subjects selected"
    );
}

/// Bulk writes with failures are logged at warn.
pub fn bulk_write_completed(collection: &str, applied: usize, failures: usize) {
    if failures > 0 {
        tracing::warn!(
            event = "bulk_write_completed",
            collection = %collection,
            applied,
            failures,
            "bulk write completed with failures"
        );
    } else {
        tracing::info!(
            event = "bulk_write_completed",
            collection = %collection,
            applied,
            failures,
            "bulk write completed"
        );
    }
}
