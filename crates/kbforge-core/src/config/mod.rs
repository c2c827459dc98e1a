pub mod defaults;

mod clustering_config;
mod filtering_config;
mod grouping_config;
mod observability_config;
mod ranking_config;
mod selection_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use clustering_config::{ClusteringConfig, Linkage};
pub use filtering_config::FilteringConfig;
pub use grouping_config::GroupingConfig;
pub use observability_config::ObservabilityConfig;
pub use ranking_config::RankingConfig;
pub use selection_config::SelectionConfig;

use crate::errors::{KbError, KbResult};

/// Full configuration for one knowledge-base build.
///
/// Every section falls back to its defaults, so an empty TOML document is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KbConfig {
    pub grouping: GroupingConfig,
    pub clustering: ClusteringConfig,
    pub filtering: FilteringConfig,
    pub ranking: RankingConfig,
    pub selection: SelectionConfig,
    pub observability: ObservabilityConfig,
}

impl KbConfig {
    /// Parse a TOML document.
    pub fn from_toml(input: &str) -> KbResult<Self> {
        let config: KbConfig =
            toml::from_str(input).map_err(|e| KbError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> KbResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Reject values no stage can run with.
    pub fn validate(&self) -> KbResult<()> {
        if self.grouping.num_batches == 0 {
            return Err(KbError::ConfigError(
                "grouping.num_batches must be positive".to_string(),
            ));
        }
        let threshold = self.clustering.distance_threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(KbError::ConfigError(format!(
                "clustering.distance_threshold must be positive, got {threshold}"
            )));
        }
        if self.clustering.max_triples_per_subject == 0 {
            return Err(KbError::ConfigError(
                "clustering.max_triples_per_subject must be positive".to_string(),
            ));
        }
        if self.clustering.embedding_batch_size == 0
            || self.ranking.sentiment_batch_size == 0
            || self.ranking.relation_batch_size == 0
        {
            return Err(KbError::ConfigError(
                "batch sizes must be positive".to_string(),
            ));
        }
        if self.ranking.perplexity_stride == 0
            || self.ranking.perplexity_stride > self.ranking.perplexity_max_length
        {
            return Err(KbError::ConfigError(format!(
                "ranking.perplexity_stride must be in 1..={}",
                self.ranking.perplexity_max_length
            )));
        }
        Ok(())
    }
}
