//! Build stages, in run order.
//!
//! Stage 1: Aggregation → Stage 2: Clustering → Stage 3: Scoring →
//! Stage 4: Filtering → Stage 5: Selection

pub mod stage1_aggregation;
pub mod stage2_clustering;
pub mod stage3_scoring;
pub mod stage4_filtering;
pub mod stage5_selection;

/// Stage names used as metric keys.
pub mod names {
    pub const RELEVANCE: &str = "relevance";
    pub const AGGREGATION: &str = "aggregation";
    pub const THRESHOLD: &str = "threshold";
    pub const CLUSTERING: &str = "clustering";
    pub const FILTERING: &str = "filtering";
    pub const SELECTION: &str = "selection";
}
