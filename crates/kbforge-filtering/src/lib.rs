//! # kbforge-filtering
//!
//! Accept/reject clusters through an ordered chain of independent rules.
//! A cluster is kept iff every rule accepts it; the chain short-circuits on
//! the first rejection and counts which rule removed what.
//!
//! ## Rules
//! - perplexity threshold
//! - hyponym consistency for `IsA`
//! - object, predicate, predicate–object and relation denylists
//! - negation
//! - object-contains-bad-word
//! - noise regexes, global and per relation
//! - per-relation object words

pub mod pipeline;
pub mod rule;
pub mod rules;

pub use pipeline::{default_pipeline, FilterOutcome, FilterPipeline, FilterReport, RuleRejections};
pub use rule::FilterRule;
pub use rules::hyponym::{HyponymRecord, HyponymTable};
