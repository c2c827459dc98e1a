//! ClusteringEngine: embeds each subject's triples, clusters them, and builds
//! ranked clusters with one representative each.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::{debug, info};

use kbforge_core::config::ClusteringConfig;
use kbforge_core::errors::{ClusteringError, KbError, KbResult};
use kbforge_core::models::{
    Cluster, ClusterId, ClusterScores, ClusterVariant, SubjectKey, Triple, TripleId,
};
use kbforge_core::traits::{IEmbeddingProvider, TripleUpdate};

use crate::algorithms::agglomerative::{cluster_by_threshold, ClusteringStats};
use crate::algorithms::normalize::normalized;

/// Clusters of one subject, ordered by descending count.
#[derive(Debug, Clone)]
pub struct SubjectClustering {
    pub subject: SubjectKey,
    pub clusters: Vec<Cluster>,
    /// Cluster assignment for every clustered triple.
    pub triple_updates: Vec<TripleUpdate>,
    /// Triples beyond the per-subject cap, left out of every cluster.
    pub excluded: usize,
    pub stats: ClusteringStats,
}

impl SubjectClustering {
    fn empty(subject: SubjectKey) -> Self {
        Self {
            subject,
            clusters: Vec::new(),
            triple_updates: Vec::new(),
            excluded: 0,
            stats: ClusteringStats::default(),
        }
    }
}

/// Group triples by subject sense, keeping first-seen subject order and input order within.
pub fn group_by_subject(triples: Vec<Triple>) -> Vec<(SubjectKey, Vec<Triple>)> {
    let mut index: HashMap<SubjectKey, usize> = HashMap::new();
    let mut groups: Vec<(SubjectKey, Vec<Triple>)> = Vec::new();
    for t in triples {
        let key = t.key.subject_key();
        match index.get(&key) {
            Some(&i) => groups[i].1.push(t),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![t]));
            }
        }
    }
    groups
}

/// Per-subject similarity clustering over an injected embedding model.
pub struct ClusteringEngine {
    config: ClusteringConfig,
    embedder: Box<dyn IEmbeddingProvider>,
}

impl ClusteringEngine {
    pub fn new(config: ClusteringConfig, embedder: Box<dyn IEmbeddingProvider>) -> KbResult<Self> {
        let threshold = config.distance_threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ClusteringError::InvalidThreshold { threshold }.into());
        }
        Ok(Self { config, embedder })
    }

    pub fn config(&self) -> &ClusteringConfig {
        &self.config
    }

    /// Embed triple sentences in provider batches, one vector per triple.
    pub fn embed_triples(&self, subject: &SubjectKey, triples: &[Triple]) -> KbResult<Vec<Vec<f32>>> {
        let sentences: Vec<String> = triples.iter().map(|t| t.key.sentence()).collect();
        let mut vectors = Vec::with_capacity(sentences.len());
        for chunk in sentences.chunks(self.config.embedding_batch_size.max(1)) {
            vectors.extend(self.embedder.embed_batch(chunk)?);
        }
        if vectors.len() != triples.len() {
            return Err(ClusteringError::EmbeddingCountMismatch {
                subject: subject.to_string(),
                triples: triples.len(),
                embeddings: vectors.len(),
            }
            .into());
        }
        let expected = self.embedder.dimensions();
        if let Some(bad) = vectors.iter().find(|v| v.len() != expected) {
            return Err(ClusteringError::DimensionMismatch {
                expected,
                actual: bad.len(),
            }
            .into());
        }
        Ok(vectors)
    }

    /// Cluster one subject's triples, embedding them first.
    pub fn cluster_subject(&self, subject: &SubjectKey, triples: &[Triple]) -> KbResult<SubjectClustering> {
        let capped = &triples[..triples.len().min(self.config.max_triples_per_subject)];
        // One triple needs no similarity at all.
        let embeddings = if capped.len() <= 1 {
            vec![Vec::new(); capped.len()]
        } else {
            self.embed_triples(subject, capped)?
        };
        self.cluster_with_embeddings(subject, triples, &embeddings)
    }

    /// Cluster one subject's triples with precomputed embeddings for the
    /// first `min(len, cap)` triples.
    pub fn cluster_with_embeddings(
        &self,
        subject: &SubjectKey,
        triples: &[Triple],
        embeddings: &[Vec<f32>],
    ) -> KbResult<SubjectClustering> {
        let cap = self.config.max_triples_per_subject;
        let excluded = triples.len().saturating_sub(cap);
        let triples = &triples[..triples.len().min(cap)];
        if embeddings.len() < triples.len() {
            return Err(ClusteringError::EmbeddingCountMismatch {
                subject: subject.to_string(),
                triples: triples.len(),
                embeddings: embeddings.len(),
            }
            .into());
        }

        let ids = triples
            .iter()
            .map(|t| {
                t.id.clone().ok_or_else(|| {
                    KbError::from(ClusteringError::MissingTripleId {
                        key: t.key.to_string(),
                    })
                })
            })
            .collect::<KbResult<Vec<TripleId>>>()?;

        let mut result = SubjectClustering::empty(subject.clone());
        result.excluded = excluded;
        if triples.is_empty() {
            return Ok(result);
        }

        let groups: Vec<Vec<usize>> = if triples.len() == 1 {
            result.stats.points = 1;
            vec![vec![0]]
        } else {
            let points = normalized(&embeddings[..triples.len()]);
            let outcome =
                cluster_by_threshold(&points, self.config.distance_threshold, self.config.linkage)?;
            result.stats = outcome.stats;
            outcome.groups()
        };

        let mut clusters: Vec<(u64, usize, Vec<usize>)> = groups
            .into_iter()
            .map(|mut members| {
                let first = members[0];
                // Stable: equal counts keep input order.
                members.sort_by(|&a, &b| triples[b].count.cmp(&triples[a].count));
                let count = members.iter().map(|&m| triples[m].count).sum();
                (count, first, members)
            })
            .collect();
        clusters.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        for (rank, (count, _, members)) in clusters.into_iter().enumerate() {
            let id = ClusterId::for_subject(subject, rank);
            let representative = &triples[members[0]];
            let variants: Vec<ClusterVariant> = members
                .iter()
                .map(|&m| ClusterVariant {
                    triple_id: ids[m].clone(),
                    predicate: triples[m].key.predicate.clone(),
                    object: triples[m].key.object.clone(),
                    count: triples[m].count,
                })
                .collect();
            result
                .triple_updates
                .extend(members.iter().map(|&m| TripleUpdate {
                    triple_id: ids[m].clone(),
                    cluster_id: id.clone(),
                }));
            result.clusters.push(Cluster {
                id,
                key: representative.key.clone(),
                count,
                triples: members.iter().map(|&m| ids[m].clone()).collect(),
                variants,
                scores: ClusterScores::default(),
            });
        }

        debug!(
            subject = %subject,
            triples = triples.len(),
            excluded,
            clusters = result.clusters.len(),
            distance_evaluations = result.stats.distance_evaluations,
            "subject clustered"
        );
        Ok(result)
    }

    /// Cluster every subject in parallel. Output follows first-seen subject order.
    pub fn cluster_all(&self, triples: Vec<Triple>) -> KbResult<Vec<SubjectClustering>> {
        let groups = group_by_subject(triples);
        let results = groups
            .par_iter()
            .map(|(subject, ts)| self.cluster_subject(subject, ts))
            .collect::<KbResult<Vec<_>>>()?;
        info!(
            subjects = results.len(),
            clusters = results.iter().map(|r| r.clusters.len()).sum::<usize>(),
            excluded = results.iter().map(|r| r.excluded).sum::<usize>(),
            "clustering finished"
        );
        Ok(results)
    }
}
