use serde::{Deserialize, Serialize};

use super::defaults;

/// Score computation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Modifier polarity assigned when a cluster carries no facet or quantifier.
    pub default_polarity: f64,
    pub sentiment_batch_size: usize,
    pub relation_batch_size: usize,
    /// Token stride of the perplexity sliding window.
    pub perplexity_stride: usize,
    /// Context length of the language model behind the perplexity scorer.
    pub perplexity_max_length: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            default_polarity: defaults::DEFAULT_POLARITY,
            sentiment_batch_size: defaults::DEFAULT_SENTIMENT_BATCH_SIZE,
            relation_batch_size: defaults::DEFAULT_RELATION_BATCH_SIZE,
            perplexity_stride: defaults::DEFAULT_PERPLEXITY_STRIDE,
            perplexity_max_length: defaults::DEFAULT_PERPLEXITY_MAX_LENGTH,
        }
    }
}
