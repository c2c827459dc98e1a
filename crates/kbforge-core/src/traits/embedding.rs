use crate::errors::KbResult;

/// Sentence embedding model.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text.
    fn embed(&self, text: &str) -> KbResult<Vec<f32>>;

    /// Embed a batch of texts, one vector per input, in input order.
    fn embed_batch(&self, texts: &[String]) -> KbResult<Vec<Vec<f32>>>;

    /// Dimensionality of every produced vector.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
