/// Errors from score computation and the external models behind it.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("{model} returned {actual} results for {expected} inputs")]
    BatchSizeMismatch {
        model: String,
        expected: usize,
        actual: usize,
    },

    #[error("{model} inference failed: {reason}")]
    InferenceFailed { model: String, reason: String },

    #[error("triple {triple_id} referenced by cluster {cluster_id} not found")]
    MissingTriple {
        cluster_id: String,
        triple_id: String,
    },

    #[error("invalid sliding window: max_length {max_length}, stride {stride}")]
    InvalidWindow { max_length: usize, stride: usize },
}
