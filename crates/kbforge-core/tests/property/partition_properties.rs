use kbforge_core::partition::{batch_ranges, batch_size, BatchPartition};
use proptest::prelude::*;

proptest! {
    #[test]
    fn batches_cover_every_index_exactly_once(total in 0usize..5_000, n in 1usize..200) {
        let ranges = batch_ranges(total, n).unwrap();
        prop_assert_eq!(ranges.len(), n);
        let mut next = 0usize;
        for r in &ranges {
            prop_assert_eq!(r.start, next);
            prop_assert!(r.end >= r.start);
            next = r.end;
        }
        prop_assert_eq!(next, total);
    }

    #[test]
    fn no_batch_exceeds_ceiling_size(total in 0usize..5_000, n in 1usize..200) {
        let size = batch_size(total, n);
        for r in batch_ranges(total, n).unwrap() {
            prop_assert!(r.len() <= size);
        }
    }

    #[test]
    fn slices_concatenate_to_input(items in prop::collection::vec(any::<u16>(), 0..300), n in 1usize..20) {
        let mut joined = Vec::new();
        for i in 0..n {
            let p = BatchPartition::new(i, n, items.len()).unwrap();
            joined.extend_from_slice(p.slice(&items));
        }
        prop_assert_eq!(joined, items);
    }
}
