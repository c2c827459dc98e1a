mod clustering_error;
mod filtering_error;
mod grouping_error;
mod partition_error;
mod scoring_error;
mod storage_error;

pub use clustering_error::ClusteringError;
pub use filtering_error::FilteringError;
pub use grouping_error::GroupingError;
pub use partition_error::PartitionError;
pub use scoring_error::ScoringError;
pub use storage_error::StorageError;

/// Convenience alias used throughout the workspace.
pub type KbResult<T> = Result<T, KbError>;

/// Top-level error for every kbforge subsystem.
#[derive(Debug, thiserror::Error)]
pub enum KbError {
    #[error("invalid assertion id '{raw}': {reason}")]
    InvalidAssertionId { raw: String, reason: String },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("build already in progress")]
    BuildInProgress,

    #[error(transparent)]
    GroupingError(#[from] GroupingError),

    #[error(transparent)]
    ClusteringError(#[from] ClusteringError),

    #[error(transparent)]
    FilteringError(#[from] FilteringError),

    #[error(transparent)]
    ScoringError(#[from] ScoringError),

    #[error(transparent)]
    StorageError(#[from] StorageError),

    #[error(transparent)]
    PartitionError(#[from] PartitionError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}
