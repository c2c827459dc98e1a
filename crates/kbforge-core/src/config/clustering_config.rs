use serde::{Deserialize, Serialize};

use super::defaults;

/// Linkage criterion for agglomerative clustering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Linkage {
    /// Minimum variance merge (the default).
    Ward,
    Average,
    Complete,
    Single,
}

impl Linkage {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "ward" => Some(Self::Ward),
            "average" => Some(Self::Average),
            "complete" => Some(Self::Complete),
            "single" => Some(Self::Single),
            _ => None,
        }
    }
}

impl Default for Linkage {
    fn default() -> Self {
        Linkage::parse(defaults::DEFAULT_LINKAGE).unwrap_or(Linkage::Ward)
    }
}

/// Similarity clustering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Merging stops once the next merge distance reaches this value.
    pub distance_threshold: f64,
    /// Triples beyond this many per subject are not clustered.
    pub max_triples_per_subject: usize,
    pub linkage: Linkage,
    /// Triple sentences embedded per provider call.
    pub embedding_batch_size: usize,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            distance_threshold: defaults::DEFAULT_DISTANCE_THRESHOLD,
            max_triples_per_subject: defaults::DEFAULT_MAX_TRIPLES_PER_SUBJECT,
            linkage: Linkage::default(),
            embedding_batch_size: defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
        }
    }
}
