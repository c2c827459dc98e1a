//! Contiguous batch partitioning of a flat, ordered item list.
//!
//! Batch `i` of `B` over `T` items covers `[i * s, min((i + 1) * s, T))` where
//! `s = ceil(T / B)`. Trailing batches may be empty.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::errors::{KbResult, PartitionError};

/// One batch of a partitioned item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchPartition {
    pub batch_index: usize,
    pub num_batches: usize,
    pub total: usize,
}

impl BatchPartition {
    pub fn new(batch_index: usize, num_batches: usize, total: usize) -> KbResult<Self> {
        if num_batches == 0 {
            return Err(PartitionError::ZeroBatches.into());
        }
        if batch_index >= num_batches {
            return Err(PartitionError::IndexOutOfRange {
                batch_index,
                num_batches,
            }
            .into());
        }
        Ok(Self {
            batch_index,
            num_batches,
            total,
        })
    }

    /// Items per batch; every batch except possibly the last trailing ones is this size.
    pub fn batch_size(&self) -> usize {
        batch_size(self.total, self.num_batches)
    }

    /// Half-open index range of this batch.
    pub fn range(&self) -> Range<usize> {
        let size = self.batch_size();
        let start = (self.batch_index * size).min(self.total);
        let end = ((self.batch_index + 1) * size).min(self.total);
        start..end
    }

    /// The batch's slice of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        &items[range.start.min(end)..end]
    }
}

/// `ceil(total / num_batches)`; zero batches yield zero.
pub fn batch_size(total: usize, num_batches: usize) -> usize {
    if num_batches == 0 {
        return 0;
    }
    total.div_ceil(num_batches)
}

/// All batch ranges, in order.
pub fn batch_ranges(total: usize, num_batches: usize) -> KbResult<Vec<Range<usize>>> {
    (0..num_batches.max(1))
        .map(|i| BatchPartition::new(i, num_batches, total).map(|p| p.range()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_batch_is_short() {
        let ranges = batch_ranges(10, 3).unwrap();
        assert_eq!(ranges, vec![0..4, 4..8, 8..10]);
    }

    #[test]
    fn exact_division() {
        let ranges = batch_ranges(9, 3).unwrap();
        assert_eq!(ranges, vec![0..3, 3..6, 6..9]);
    }

    #[test]
    fn more_batches_than_items() {
        let ranges = batch_ranges(2, 4).unwrap();
        assert_eq!(ranges, vec![0..1, 1..2, 2..2, 2..2]);
    }

    #[test]
    fn zero_batches_rejected() {
        assert!(BatchPartition::new(0, 0, 10).is_err());
        assert!(batch_ranges(10, 0).is_err());
    }

    #[test]
    fn index_out_of_range_rejected() {
        assert!(BatchPartition::new(3, 3, 10).is_err());
    }
}
