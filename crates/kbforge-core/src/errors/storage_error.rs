/// Record store errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("{collection} record not found: {id}")]
    NotFound { collection: String, id: String },

    #[error("{collection}: requested {expected} ids but fetched {actual} records")]
    IdCountMismatch {
        collection: String,
        expected: usize,
        actual: usize,
    },

    #[error("{path} line {line}: {reason}")]
    MalformedRecord {
        path: String,
        line: usize,
        reason: String,
    },
}
