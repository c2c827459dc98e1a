/// Similarity clustering errors.
#[derive(Debug, thiserror::Error)]
pub enum ClusteringError {
    #[error("{subject}: {triples} triples but {embeddings} embeddings")]
    EmbeddingCountMismatch {
        subject: String,
        triples: usize,
        embeddings: usize,
    },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid distance threshold {threshold}: must be finite and positive")]
    InvalidThreshold { threshold: f64 },

    #[error("embedding provider failed: {reason}")]
    EmbeddingFailed { reason: String },

    #[error("triple {key} has no id; assign triple ids before clustering")]
    MissingTripleId { key: String },
}
