//! KnowledgeBaseBuilder: owns every stage engine, Arc<AtomicBool> is_running guard.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use kbforge_clustering::ClusteringEngine;
use kbforge_core::config::KbConfig;
use kbforge_core::constants::VERSION;
use kbforge_core::errors::{KbError, KbResult};
use kbforge_core::models::{Assertion, AssertionId};
use kbforge_core::traits::{
    IAssertionStore, IClusterStore, IEmbeddingProvider, IPerplexityScorer, IRelationClassifier,
    ISentimentClassifier,
};
use kbforge_filtering::{default_pipeline, FilterPipeline, HyponymTable};
use kbforge_observability::PipelineMetrics;
use kbforge_ranking::RankingEngine;
use kbforge_selection::Selector;
use kbforge_storage::StorageEngine;

use crate::inputs::BuildInputs;
use crate::report::BuildReport;
use crate::stages::{
    stage1_aggregation, stage2_clustering, stage3_scoring, stage4_filtering, stage5_selection,
};

/// The external models a build delegates to.
pub struct Models {
    pub embedder: Box<dyn IEmbeddingProvider>,
    pub relations: Box<dyn IRelationClassifier>,
    pub sentiments: Box<dyn ISentimentClassifier>,
    pub perplexity: Box<dyn IPerplexityScorer>,
}

/// Runs a whole knowledge-base build.
///
/// Enforces a single-execution guard: a second `build` while one is running
/// fails with `BuildInProgress`.
pub struct KnowledgeBaseBuilder {
    /// Guard: only one build can run at a time.
    is_running: Arc<AtomicBool>,
    config: KbConfig,
    clustering: ClusteringEngine,
    ranking: RankingEngine,
    filters: FilterPipeline,
    selector: Selector,
}

impl KnowledgeBaseBuilder {
    /// Hyponyms come from `config.filtering.hyponyms_path` when it is set.
    pub fn new(config: KbConfig, models: Models) -> KbResult<Self> {
        Self::assemble(config, models, None)
    }

    /// Use an in-memory hyponym table instead of the configured path.
    pub fn with_hyponyms(config: KbConfig, models: Models, hyponyms: HyponymTable) -> KbResult<Self> {
        Self::assemble(config, models, Some(hyponyms))
    }

    fn assemble(config: KbConfig, models: Models, hyponyms: Option<HyponymTable>) -> KbResult<Self> {
        config.validate()?;
        let clustering = ClusteringEngine::new(config.clustering.clone(), models.embedder)?;
        let ranking = RankingEngine::new(
            config.ranking.clone(),
            models.relations,
            models.sentiments,
            models.perplexity,
        )?;
        let filters = default_pipeline(&config.filtering, hyponyms)?;
        let selector = Selector::new(config.selection.clone());
        info!(
            rules = ?filters.rule_names(),
            min_freq = config.grouping.min_freq,
            top_n = config.selection.top_n,
            "knowledge base builder ready"
        );
        Ok(Self {
            is_running: Arc::new(AtomicBool::new(false)),
            config,
            clustering,
            ranking,
            filters,
            selector,
        })
    }

    /// Replace the standard rule chain.
    pub fn with_filters(mut self, filters: FilterPipeline) -> Self {
        self.filters = filters;
        self
    }

    pub fn config(&self) -> &KbConfig {
        &self.config
    }

    pub fn ranking(&self) -> &RankingEngine {
        &self.ranking
    }

    pub fn filters(&self) -> &FilterPipeline {
        &self.filters
    }

    /// Check if a build is currently running.
    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    /// Run every stage over `inputs`, writing intermediate records to `store`.
    pub fn build(&self, inputs: &BuildInputs, store: &StorageEngine) -> KbResult<BuildReport> {
        if self
            .is_running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(KbError::BuildInProgress);
        }

        let result = self.run(inputs, store);

        self.is_running.store(false, Ordering::SeqCst);
        result
    }

    fn run(&self, inputs: &BuildInputs, store: &StorageEngine) -> KbResult<BuildReport> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let mut metrics = PipelineMetrics::new();
        info!(%run_id, assertions = inputs.assertions.len(), "build started");

        let triples = stage1_aggregation::aggregate(inputs, &self.config.grouping, &mut metrics)?;
        // Only assertions backing a surviving triple are stored.
        let backing: HashSet<AssertionId> = triples
            .iter()
            .flat_map(|t| t.assertion_ids.iter().copied())
            .collect();
        let assertions: Vec<Assertion> = inputs
            .assertions
            .iter()
            .filter(|a| backing.contains(&a.id))
            .cloned()
            .collect();
        IAssertionStore::insert_bulk(store, assertions)?;

        let subjects = stage2_clustering::cluster(&self.clustering, triples, store, store, &mut metrics)?;
        stage3_scoring::score(&self.ranking, &subjects, store, store, store, &mut metrics)?;

        let ordered: Vec<_> = subjects.iter().flatten().cloned().collect();
        let scored = IClusterStore::get_exact(store, &ordered)?;
        let (kept, filter) = stage4_filtering::filter(&self.filters, scored, &mut metrics)?;
        let output = stage5_selection::select(&self.selector, kept, &self.config, &mut metrics)?;

        let report = BuildReport {
            run_id,
            version: VERSION.to_string(),
            started_at,
            finished_at: Utc::now(),
            metrics,
            filter,
            output,
        };
        info!(
            %run_id,
            records = report.output.len(),
            elapsed_ms = report.duration().num_milliseconds(),
            "build finished"
        );
        Ok(report)
    }
}
