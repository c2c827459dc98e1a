//! Shard routing for aggregation and contiguous re-sharding with stable triple ids.

use tracing::info;

use kbforge_core::errors::{GroupingError, KbResult};
use kbforge_core::models::{KeyedAssertion, Triple, TripleId, TripleKey};
use kbforge_core::partition::{batch_ranges, batch_size};

/// Deterministic shard of a key among `num_shards`.
pub fn shard_for_key(key: &TripleKey, num_shards: usize) -> KbResult<usize> {
    if num_shards == 0 {
        return Err(GroupingError::ZeroShards.into());
    }
    let hash = key.content_hash();
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&hash.as_bytes()[..8]);
    Ok((u64::from_le_bytes(prefix) % num_shards as u64) as usize)
}

/// Route keyed assertions so every occurrence of a key lands in the same shard.
pub fn route_to_shards(
    keyed: Vec<KeyedAssertion>,
    num_shards: usize,
) -> KbResult<Vec<Vec<KeyedAssertion>>> {
    if num_shards == 0 {
        return Err(GroupingError::ZeroShards.into());
    }
    let mut shards: Vec<Vec<KeyedAssertion>> = vec![Vec::new(); num_shards];
    for k in keyed {
        let s = shard_for_key(&k.key, num_shards)?;
        shards[s].push(k);
    }
    Ok(shards)
}

/// Give every id-less triple the id of its position in the contiguous batching.
///
/// Triples that already carry an id keep it. Returns the number of ids assigned.
pub fn assign_triple_ids(triples: &mut [Triple], num_batches: usize) -> KbResult<usize> {
    let ranges = batch_ranges(triples.len(), num_batches)?;
    let mut assigned = 0;
    for (batch, range) in ranges.into_iter().enumerate() {
        for (i, t) in triples[range].iter_mut().enumerate() {
            if t.id.is_none() {
                t.id = Some(TripleId::from_position(batch, i));
                assigned += 1;
            }
        }
    }
    info!(
        triples = triples.len(),
        num_batches,
        batch_size = batch_size(triples.len(), num_batches),
        assigned,
        "triple ids assigned"
    );
    Ok(assigned)
}

/// Split triples into `num_batches` contiguous batches, assigning ids first.
pub fn reshard(mut triples: Vec<Triple>, num_batches: usize) -> KbResult<Vec<Vec<Triple>>> {
    assign_triple_ids(&mut triples, num_batches)?;
    let ranges = batch_ranges(triples.len(), num_batches)?;
    let mut iter = triples.into_iter();
    Ok(ranges
        .into_iter()
        .map(|r| iter.by_ref().take(r.len()).collect())
        .collect())
}
