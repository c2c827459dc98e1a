use serde::{Deserialize, Serialize};

use super::defaults;

/// Aggregation and frequency-threshold configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    /// Triples supported by fewer assertions are dropped.
    pub min_freq: u64,
    /// Number of output shards when re-sharding aggregated triples.
    pub num_batches: usize,
    /// Minimum subject/URL similarity for an assertion's document to count.
    pub url_similarity_threshold: f64,
    /// Objects with more tokens than this fail the validity check.
    pub max_object_tokens: usize,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            min_freq: defaults::DEFAULT_MIN_FREQ,
            num_batches: defaults::DEFAULT_NUM_BATCHES,
            url_similarity_threshold: defaults::DEFAULT_URL_SIMILARITY_THRESHOLD,
            max_object_tokens: defaults::DEFAULT_MAX_OBJECT_TOKENS,
        }
    }
}
