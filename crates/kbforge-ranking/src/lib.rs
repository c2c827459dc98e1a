//! # kbforge-ranking
//!
//! Derived scores attached to clusters, each computed independently:
//! predicted relation and object, normalised log-frequency, modifier
//! polarity, combined sentiment, canonical sentence, and perplexity.
//! Scores are emitted as additive `ClusterUpdate` patches and written with
//! unordered bulk semantics.

pub mod engine;
pub mod evidence;
pub mod log_freq;
pub mod modifier;
pub mod perplexity;
pub mod relation;
pub mod sentence;
pub mod sentiment;

pub use engine::{RankingEngine, ScoreStep};
pub use evidence::load_evidence;
pub use log_freq::{log_freq_updates, normalized_log_freq};
pub use modifier::modifier_polarity;
pub use perplexity::{perplexity_from_windows, sliding_windows, Window};
pub use relation::{apply_overrides, postprocess_object, predict_relations};
pub use sentence::canonical_sentence;
pub use sentiment::{annotate_sentiments, combine_sentiment};
