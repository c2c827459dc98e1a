//! # kbforge-grouping
//!
//! Turns raw assertions into deduplicated triples:
//! validity check → subject relevance → sharded aggregation → re-sharding with
//! stable ids → frequency threshold.

pub mod aggregator;
pub mod relevance;
pub mod sharding;
pub mod threshold;
pub mod validity;

pub use aggregator::{aggregate_shards, merge_partials, validate_aggregate, TripleAggregator};
pub use relevance::{select_relevant, RelevanceOutcome, SubjectCatalog, UrlSimilarityTable};
pub use sharding::{assign_triple_ids, reshard, route_to_shards, shard_for_key};
pub use threshold::filter_by_frequency;
pub use validity::is_likely_valid;
