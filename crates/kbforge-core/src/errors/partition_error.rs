/// Invalid batch partition parameters.
#[derive(Debug, thiserror::Error)]
pub enum PartitionError {
    #[error("number of batches must be positive")]
    ZeroBatches,

    #[error("batch index {batch_index} out of range for {num_batches} batches")]
    IndexOutOfRange {
        batch_index: usize,
        num_batches: usize,
    },
}
