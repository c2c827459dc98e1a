/// Aggregation and re-sharding errors.
#[derive(Debug, thiserror::Error)]
pub enum GroupingError {
    #[error("duplicate triple key after aggregation: {key}")]
    DuplicateTripleKey { key: String },

    #[error("assertion {id} contributed twice to triple {key}")]
    DuplicateAssertionId { id: String, key: String },

    #[error("shard count must be positive")]
    ZeroShards,
}
