//! # kbforge-clustering
//!
//! Per-subject near-duplicate clustering: embed → L2-normalise →
//! threshold agglomerative clustering → representative selection.

pub mod algorithms;
pub mod engine;

pub use algorithms::agglomerative::{cluster_by_threshold, AgglomerativeOutcome, ClusteringStats};
pub use engine::{group_by_subject, ClusteringEngine, SubjectClustering};
