use crate::errors::KbResult;

/// Causal language model fluency scorer.
pub trait IPerplexityScorer: Send + Sync {
    /// Perplexity of a sentence; lower is more fluent.
    fn perplexity(&self, sentence: &str) -> KbResult<f64>;

    fn name(&self) -> &str;
}
