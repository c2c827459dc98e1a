use serde::{Deserialize, Serialize};

use super::defaults;

/// Per-subject selection and output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Distinct (relation, object) pairs kept per subject.
    pub top_n: usize,
    /// Keep the namespace prefix on relation labels in the output.
    pub keep_namespace: bool,
    /// Emit plain triples plus subject-has-aspect edges instead of full records.
    pub aspects: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            top_n: defaults::DEFAULT_TOP_N,
            keep_namespace: defaults::DEFAULT_KEEP_NAMESPACE,
            aspects: defaults::DEFAULT_ASPECTS,
        }
    }
}
