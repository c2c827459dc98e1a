//! FilterPipeline: ordered AND over the rule catalog with per-rule audit counts.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use kbforge_core::config::FilteringConfig;
use kbforge_core::errors::{FilteringError, KbResult};
use kbforge_core::models::{relation, Cluster};

use crate::rule::FilterRule;
use crate::rules::{
    rebase, HyponymRule, HyponymTable, IgnoreObjectRule, IgnorePredicateObjectRule,
    IgnorePredicateRule, IgnoreRelationRule, NegationRule, ObjectContainsWordRule, PerplexityRule,
    RegexRule, RelationObjectWordRule,
};

/// How many clusters one rule removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRejections {
    pub rule: String,
    pub rejected: usize,
}

/// Audit summary of one filtering pass.
///
/// A cluster is attributed to the first rule (in registration order) that rejected it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterReport {
    pub evaluated: usize,
    pub kept: usize,
    pub rules: Vec<RuleRejections>,
}

impl FilterReport {
    pub fn rejected(&self) -> usize {
        self.evaluated - self.kept
    }

    /// Fraction of evaluated clusters removed by `rule`.
    pub fn fraction_removed_by(&self, rule: &str) -> f64 {
        if self.evaluated == 0 {
            return 0.0;
        }
        self.rules
            .iter()
            .find(|r| r.rule == rule)
            .map_or(0.0, |r| r.rejected as f64 / self.evaluated as f64)
    }
}

/// Surviving clusters, in input order, plus the audit report.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub kept: Vec<Cluster>,
    pub report: FilterReport,
}

/// An ordered chain of rules; a cluster is kept iff every rule accepts it.
#[derive(Default)]
pub struct FilterPipeline {
    rules: Vec<Box<dyn FilterRule>>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: impl FilterRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn push(&mut self, rule: Box<dyn FilterRule>) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rule_names(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// The same rules evaluated last-to-first.
    pub fn reversed(mut self) -> Self {
        self.rules.reverse();
        self
    }

    /// Every score field any rule reads must already be attached, unless the
    /// cluster lacks that field's prerequisite. Such clusters reach the rule,
    /// which rejects what it cannot score.
    pub fn check_requirements(&self, cluster: &Cluster) -> KbResult<()> {
        for rule in &self.rules {
            if let Some(field) = rule
                .requires()
                .iter()
                .find(|&&f| !cluster.has_score(f) && !cluster.is_unscorable(f))
            {
                return Err(FilteringError::MissingScore {
                    rule: rule.name(),
                    field: field.to_string(),
                    cluster_id: cluster.id.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Index of the first rule rejecting `cluster`, or `None` if all accept.
    pub fn evaluate(&self, cluster: &Cluster) -> KbResult<Option<usize>> {
        self.check_requirements(cluster)?;
        Ok(self.rules.iter().position(|r| !r.validate(cluster)))
    }

    pub fn should_keep(&self, cluster: &Cluster) -> KbResult<bool> {
        Ok(self.evaluate(cluster)?.is_none())
    }

    /// Filter a batch in parallel. Output keeps input order.
    pub fn apply(&self, clusters: Vec<Cluster>) -> KbResult<FilterOutcome> {
        let verdicts = clusters
            .par_iter()
            .map(|c| self.evaluate(c))
            .collect::<KbResult<Vec<_>>>()?;

        let mut counts = vec![0usize; self.rules.len()];
        let evaluated = clusters.len();
        let mut kept = Vec::with_capacity(evaluated);
        for (cluster, verdict) in clusters.into_iter().zip(verdicts) {
            match verdict {
                Some(rule) => {
                    counts[rule] += 1;
                    debug!(cluster = %cluster.id, rule = rule, "cluster rejected");
                }
                None => kept.push(cluster),
            }
        }

        let rules: Vec<RuleRejections> = self
            .rules
            .iter()
            .zip(counts)
            .map(|(r, rejected)| RuleRejections {
                rule: r.name(),
                rejected,
            })
            .collect();
        for r in &rules {
            info!(rule = %r.rule, rejected = r.rejected, evaluated, "filter rule applied");
        }
        let report = FilterReport {
            evaluated,
            kept: kept.len(),
            rules,
        };
        info!(evaluated, kept = report.kept, "filtering finished");
        Ok(FilterOutcome { kept, report })
    }
}

/// The standard rule chain.
///
/// The hyponym rule is registered when `hyponyms` is given or
/// `config.hyponyms_path` is set; an explicit table wins over the path.
pub fn default_pipeline(
    config: &FilteringConfig,
    hyponyms: Option<HyponymTable>,
) -> KbResult<FilterPipeline> {
    let ns = config.relation_namespace.as_str();
    let hyponym_rule = match (hyponyms, config.hyponyms_path.as_deref()) {
        (Some(table), _) => Some(HyponymRule::new(table, "in-memory")),
        (None, Some(path)) => Some(HyponymRule::new(HyponymTable::load(path)?, path)),
        (None, None) => None,
    };

    let mut pipeline = FilterPipeline::new().with_rule(PerplexityRule::new(config.perplexity_threshold));
    if let Some(rule) = hyponym_rule {
        pipeline = pipeline.with_rule(rule.with_is_a_label(rebase(relation::IS_A, ns)));
    }
    let ignored_relations = crate::rules::denylist::IGNORED_RELATIONS
        .iter()
        .map(|r| rebase(r, ns));
    Ok(pipeline
        .with_rule(IgnoreObjectRule::default())
        .with_rule(IgnorePredicateObjectRule::default())
        .with_rule(IgnorePredicateRule::default())
        .with_rule(IgnoreRelationRule::new(ignored_relations))
        .with_rule(NegationRule)
        .with_rule(ObjectContainsWordRule::default())
        .with_rule(RegexRule::standard(ns)?)
        .with_rule(RelationObjectWordRule::with_namespace(ns)))
}
