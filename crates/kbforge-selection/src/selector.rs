//! Per-subject top-N selection with (relation, object) deduplication.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use tracing::{debug, info};

use kbforge_core::config::SelectionConfig;
use kbforge_core::models::{Cluster, SubjectKey};

use crate::normalize::normalize_object;

/// super_subject → aspect subjects seen among surviving clusters.
pub type AspectIndex = BTreeMap<String, BTreeSet<String>>;

/// Clusters kept per subject, subjects in first-seen order, each subject's
/// clusters by descending count.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub kept: Vec<Cluster>,
    pub aspects: AspectIndex,
    pub subjects: usize,
}

pub struct Selector {
    config: SelectionConfig,
}

impl Selector {
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Keep each subject's `top_n` most frequent distinct pairs.
    ///
    /// Aspect edges are collected from every input cluster, before the cut.
    pub fn select(&self, clusters: Vec<Cluster>) -> Selection {
        let total = clusters.len();
        let mut aspects = AspectIndex::new();
        let mut order: Vec<Vec<Cluster>> = Vec::new();
        let mut index: HashMap<SubjectKey, usize> = HashMap::new();

        for c in clusters {
            if c.subject_type().is_aspect() {
                aspects
                    .entry(c.key.super_subject.clone())
                    .or_default()
                    .insert(c.subject().to_string());
            }
            let i = *index.entry(c.subject_key()).or_insert_with(|| {
                order.push(Vec::new());
                order.len() - 1
            });
            order[i].push(c);
        }

        let subjects = order.len();
        let mut kept = Vec::new();
        for mut group in order {
            // Stable: equal counts keep input order.
            group.sort_by(|a, b| b.count.cmp(&a.count));
            let before = group.len();
            let mut seen: HashSet<(String, String)> = HashSet::new();
            let mut taken = 0usize;
            for c in group {
                if taken >= self.config.top_n {
                    break;
                }
                let pair = (
                    c.predicted_relation().to_string(),
                    normalize_object(c.predicted_object()),
                );
                if seen.insert(pair) {
                    kept.push(c);
                    taken += 1;
                }
            }
            debug!(before, kept = taken, "subject selected");
        }

        info!(
            clusters = total,
            subjects,
            kept = kept.len(),
            aspects = aspects.values().map(BTreeSet::len).sum::<usize>(),
            "selection finished"
        );
        Selection {
            kept,
            aspects,
            subjects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kbforge_core::models::{ClusterId, ClusterScores, TripleKey};

    fn c(subject: &str, object: &str, count: u64) -> Cluster {
        Cluster {
            id: ClusterId(format!("{subject}-{object}")),
            key: TripleKey::new(subject, "be", object, "primary", subject),
            count,
            triples: Vec::new(),
            variants: Vec::new(),
            scores: ClusterScores {
                predicted_relation: Some("/r/HasProperty".into()),
                predicted_object: Some(object.into()),
                ..ClusterScores::default()
            },
        }
    }

    #[test]
    fn determiner_variants_collapse_to_most_frequent() {
        let sel = Selector::new(SelectionConfig::default()).select(vec![
            c("ball", "a red ball", 2),
            c("ball", "red ball", 5),
            c("ball", "round", 3),
        ]);
        let objects: Vec<&str> = sel.kept.iter().map(|c| c.object()).collect();
        assert_eq!(objects, vec!["red ball", "round"]);
    }

    #[test]
    fn zero_top_n_keeps_nothing() {
        let config = SelectionConfig {
            top_n: 0,
            ..SelectionConfig::default()
        };
        assert!(Selector::new(config).select(vec![c("a", "b", 1)]).kept.is_empty());
    }
}
