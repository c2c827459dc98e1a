//! # kbforge-selection
//!
//! Final stage: cap each subject at its `top_n` most frequent distinct
//! (relation, object) pairs and project clusters into output records.

pub mod normalize;
pub mod output;
pub mod selector;

pub use normalize::normalize_object;
pub use output::{project, AspectsOutput, KbRecord, KnowledgeBase, Metadata};
pub use selector::{AspectIndex, Selection, Selector};
