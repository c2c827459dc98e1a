use kbforge_core::models::{Cluster, ScoreField};

use crate::rule::FilterRule;

/// Rejects clusters whose canonical sentence is not fluent enough.
#[derive(Debug, Clone)]
pub struct PerplexityRule {
    threshold: f64,
}

impl PerplexityRule {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl FilterRule for PerplexityRule {
    fn name(&self) -> String {
        format!("PerplexityRule - threshold = {}", self.threshold)
    }

    fn requires(&self) -> &[ScoreField] {
        &[ScoreField::Perplexity]
    }

    fn validate(&self, cluster: &Cluster) -> bool {
        cluster
            .scores
            .perplexity
            .is_some_and(|p| p <= self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kbforge_core::models::{ClusterId, ClusterScores, TripleKey};

    fn with_perplexity(p: f64) -> Cluster {
        Cluster {
            id: ClusterId("c".into()),
            key: TripleKey::new("dog", "bark", "loudly", "primary", "dog"),
            count: 3,
            triples: Vec::new(),
            variants: Vec::new(),
            scores: ClusterScores {
                perplexity: Some(p),
                ..ClusterScores::default()
            },
        }
    }

    #[test]
    fn threshold_is_inclusive() {
        let rule = PerplexityRule::new(500.0);
        assert!(rule.validate(&with_perplexity(500.0)));
        assert!(!rule.validate(&with_perplexity(500.5)));
        assert!(rule.validate(&with_perplexity(12.0)));
    }
}
