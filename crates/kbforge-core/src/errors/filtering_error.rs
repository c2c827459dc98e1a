/// Filtering pipeline errors.
#[derive(Debug, thiserror::Error)]
pub enum FilteringError {
    #[error("rule '{rule}' reads {field} but cluster {cluster_id} has none attached")]
    MissingScore {
        rule: String,
        field: String,
        cluster_id: String,
    },

    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("hyponym table line {line}: {reason}")]
    MalformedHyponymTable { line: usize, reason: String },
}
