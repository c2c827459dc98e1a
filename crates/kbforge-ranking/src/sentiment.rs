//! Per-assertion sentiment annotation and per-cluster combination.

use tracing::debug;

use kbforge_core::errors::{KbResult, ScoringError};
use kbforge_core::models::{Assertion, AssertionId, Cluster, Sentiment};
use kbforge_core::traits::ISentimentClassifier;

/// Classify each assertion's source sentence, `batch_size` sentences per call.
pub fn annotate_sentiments(
    classifier: &dyn ISentimentClassifier,
    assertions: &[Assertion],
    batch_size: usize,
) -> KbResult<Vec<(AssertionId, Sentiment)>> {
    let mut out = Vec::with_capacity(assertions.len());
    for (i, chunk) in assertions.chunks(batch_size.max(1)).enumerate() {
        let sentences: Vec<String> = chunk.iter().map(|a| a.provenance.sentence.clone()).collect();
        let scores = classifier.classify(&sentences)?;
        if scores.len() != chunk.len() {
            return Err(ScoringError::BatchSizeMismatch {
                model: classifier.name().to_string(),
                expected: chunk.len(),
                actual: scores.len(),
            }
            .into());
        }
        debug!(batch = i, size = chunk.len(), "sentiment batch classified");
        out.extend(chunk.iter().map(|a| a.id).zip(scores));
    }
    Ok(out)
}

/// Component-wise mean sentiment of the assertions stating exactly the
/// cluster's (predicate, object). `None` when none of them is annotated.
pub fn combine_sentiment(cluster: &Cluster, assertions: &[Assertion]) -> Option<Sentiment> {
    Sentiment::mean(
        assertions
            .iter()
            .filter(|a| a.has_predicate_object(cluster.predicate(), cluster.object()))
            .filter_map(|a| a.sentiment.as_ref()),
    )
}
