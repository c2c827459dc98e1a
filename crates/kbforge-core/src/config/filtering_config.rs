use serde::{Deserialize, Serialize};

use super::defaults;

/// Filtering pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilteringConfig {
    /// Clusters whose canonical sentence perplexity exceeds this are rejected.
    pub perplexity_threshold: f64,
    /// Newline-delimited JSON `{subject, hyponyms}` table. No hyponym rule when unset.
    pub hyponyms_path: Option<String>,
    /// Prefix shared by every relation label.
    pub relation_namespace: String,
}

impl Default for FilteringConfig {
    fn default() -> Self {
        Self {
            perplexity_threshold: defaults::DEFAULT_PERPLEXITY_THRESHOLD,
            hyponyms_path: None,
            relation_namespace: defaults::DEFAULT_RELATION_NAMESPACE.to_string(),
        }
    }
}
