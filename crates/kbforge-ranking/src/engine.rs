//! RankingEngine: computes every cluster score over injected models and
//! writes them back as unordered score patches.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use kbforge_core::config::RankingConfig;
use kbforge_core::errors::{KbError, KbResult, ScoringError};
use kbforge_core::models::{Assertion, AssertionId, Cluster, ClusterId, ScorePatch};
use kbforge_core::traits::{
    BulkWriteReport, ClusterUpdate, IAssertionStore, IClusterStore, IPerplexityScorer,
    IRelationClassifier, ISentimentClassifier, ITripleStore, RelationQuery,
};

use crate::evidence::load_evidence;
use crate::log_freq::log_freq_updates;
use crate::modifier::modifier_polarity;
use crate::relation::{apply_overrides, postprocess_object, predict_relations};
use crate::sentence::canonical_sentence;
use crate::sentiment::{annotate_sentiments, combine_sentiment};

/// One independently runnable scoring step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStep {
    Relation,
    LogFreq,
    Modifier,
    Sentiment,
    Sentence,
    Perplexity,
}

impl ScoreStep {
    /// Every step, in an order that satisfies their data dependencies.
    pub const ALL: [ScoreStep; 6] = [
        ScoreStep::Relation,
        ScoreStep::LogFreq,
        ScoreStep::Modifier,
        ScoreStep::Sentiment,
        ScoreStep::Sentence,
        ScoreStep::Perplexity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreStep::Relation => "relation",
            ScoreStep::LogFreq => "log_freq",
            ScoreStep::Modifier => "modifier",
            ScoreStep::Sentiment => "sentiment",
            ScoreStep::Sentence => "sentence",
            ScoreStep::Perplexity => "perplexity",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.as_str() == s)
    }

    /// Whether the step reads the raw assertions behind each cluster.
    fn needs_evidence(&self) -> bool {
        matches!(
            self,
            ScoreStep::Relation | ScoreStep::Modifier | ScoreStep::Sentiment | ScoreStep::Sentence
        )
    }
}

/// Scores clusters with the injected relation, sentiment and perplexity models.
pub struct RankingEngine {
    config: RankingConfig,
    relations: Box<dyn IRelationClassifier>,
    sentiments: Box<dyn ISentimentClassifier>,
    perplexity: Box<dyn IPerplexityScorer>,
}

impl RankingEngine {
    pub fn new(
        config: RankingConfig,
        relations: Box<dyn IRelationClassifier>,
        sentiments: Box<dyn ISentimentClassifier>,
        perplexity: Box<dyn IPerplexityScorer>,
    ) -> KbResult<Self> {
        let (max_length, stride) = (config.perplexity_max_length, config.perplexity_stride);
        if stride == 0 || max_length == 0 || stride > max_length {
            return Err(ScoringError::InvalidWindow { max_length, stride }.into());
        }
        Ok(Self {
            config,
            relations,
            sentiments,
            perplexity,
        })
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Classify the sentence of every given assertion and store the result.
    pub fn annotate_assertions(
        &self,
        store: &dyn IAssertionStore,
        ids: &[AssertionId],
    ) -> KbResult<BulkWriteReport> {
        let assertions = store.get_exact(ids)?;
        let sentiments =
            annotate_sentiments(self.sentiments.as_ref(), &assertions, self.config.sentiment_batch_size)?;
        let report = store.set_sentiments(sentiments);
        info!(
            assertions = assertions.len(),
            applied = report.applied,
            failed = report.failures.len(),
            model = self.sentiments.name(),
            "assertion sentiments attached"
        );
        Ok(report)
    }

    /// Predicted relation and object for each cluster.
    pub fn relation_updates(
        &self,
        clusters: &[Cluster],
        evidence: &[Vec<Assertion>],
    ) -> KbResult<Vec<ClusterUpdate>> {
        let queries: Vec<RelationQuery> = clusters
            .iter()
            .map(|c| RelationQuery {
                subject: c.subject().to_string(),
                predicate: c.predicate().to_string(),
                object: c.object().to_string(),
            })
            .collect();
        let labels = predict_relations(self.relations.as_ref(), &queries, self.config.relation_batch_size)?;

        Ok(clusters
            .iter()
            .zip(labels)
            .zip(evidence)
            .map(|((c, label), assertions)| {
                let relation = apply_overrides(&label, c.predicate(), c.object(), assertions);
                let object = postprocess_object(c.predicate(), c.object(), &relation);
                ClusterUpdate {
                    cluster_id: c.id.clone(),
                    patch: ScorePatch::Relation { relation, object },
                }
            })
            .collect())
    }

    fn perplexity_update(&self, cluster_id: &ClusterId, sentence: &str) -> KbResult<ClusterUpdate> {
        let p = self.perplexity.perplexity(sentence)?;
        Ok(ClusterUpdate {
            cluster_id: cluster_id.clone(),
            patch: ScorePatch::Perplexity(p),
        })
    }

    /// Updates for one step. `evidence` must be aligned with `clusters` for
    /// steps that read assertions.
    pub fn step_updates(
        &self,
        step: ScoreStep,
        clusters: &[Cluster],
        evidence: &[Vec<Assertion>],
    ) -> KbResult<Vec<ClusterUpdate>> {
        if step.needs_evidence() && evidence.len() != clusters.len() {
            return Err(KbError::from(ScoringError::BatchSizeMismatch {
                model: "evidence".to_string(),
                expected: clusters.len(),
                actual: evidence.len(),
            }));
        }
        let per_cluster = clusters.par_iter().zip(evidence.par_iter());
        let updates = match step {
            ScoreStep::Relation => self.relation_updates(clusters, evidence)?,
            ScoreStep::LogFreq => log_freq_updates(clusters),
            ScoreStep::Modifier => per_cluster
                .map(|(c, a)| ClusterUpdate {
                    cluster_id: c.id.clone(),
                    patch: ScorePatch::Modifier(modifier_polarity(a, self.config.default_polarity)),
                })
                .collect(),
            ScoreStep::Sentiment => per_cluster
                .filter_map(|(c, a)| {
                    combine_sentiment(c, a).map(|s| ClusterUpdate {
                        cluster_id: c.id.clone(),
                        patch: ScorePatch::Sentiment(s),
                    })
                })
                .collect(),
            ScoreStep::Sentence => per_cluster
                .filter_map(|(c, a)| {
                    canonical_sentence(c, a).map(|s| ClusterUpdate {
                        cluster_id: c.id.clone(),
                        patch: ScorePatch::TripleSentence(s),
                    })
                })
                .collect(),
            ScoreStep::Perplexity => clusters
                .par_iter()
                .filter_map(|c| {
                    let sentence = c.scores.triple_sentence.as_deref()?;
                    Some(self.perplexity_update(&c.id, sentence))
                })
                .collect::<KbResult<Vec<_>>>()?,
        };
        debug!(step = step.as_str(), clusters = clusters.len(), updates = updates.len(), "step scored");
        Ok(updates)
    }

    /// Every score for `clusters`. Perplexity is computed on the sentence
    /// chosen in the same pass. Log frequency is normalised within the given
    /// clusters, so pass whole subjects.
    pub fn score(
        &self,
        clusters: &[Cluster],
        triples: &dyn ITripleStore,
        assertions: &dyn IAssertionStore,
    ) -> KbResult<Vec<ClusterUpdate>> {
        let evidence = load_evidence(clusters, triples, assertions)?;
        let mut updates = Vec::new();
        for step in [
            ScoreStep::Relation,
            ScoreStep::LogFreq,
            ScoreStep::Modifier,
            ScoreStep::Sentiment,
        ] {
            updates.extend(self.step_updates(step, clusters, &evidence)?);
        }

        let sentences = self.step_updates(ScoreStep::Sentence, clusters, &evidence)?;
        let perplexities = sentences
            .par_iter()
            .filter_map(|u| match &u.patch {
                ScorePatch::TripleSentence(s) => Some(self.perplexity_update(&u.cluster_id, s)),
                _ => None,
            })
            .collect::<KbResult<Vec<_>>>()?;
        updates.extend(sentences);
        updates.extend(perplexities);

        info!(clusters = clusters.len(), updates = updates.len(), "scores computed");
        Ok(updates)
    }

    /// Fetch `ids`, run one step, and write its updates back.
    pub fn run_step(
        &self,
        step: ScoreStep,
        ids: &[ClusterId],
        clusters: &dyn IClusterStore,
        triples: &dyn ITripleStore,
        assertions: &dyn IAssertionStore,
    ) -> KbResult<BulkWriteReport> {
        let batch = clusters.get_exact(ids)?;
        let evidence = if step.needs_evidence() {
            load_evidence(&batch, triples, assertions)?
        } else {
            Vec::new()
        };
        let updates = self.step_updates(step, &batch, &evidence)?;
        let report = clusters.apply(updates);
        info!(
            step = step.as_str(),
            clusters = batch.len(),
            applied = report.applied,
            failed = report.failures.len(),
            "scores attached"
        );
        Ok(report)
    }
}
