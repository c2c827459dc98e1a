//! Output records: a fixed projection from scored clusters.

use serde::{Deserialize, Serialize};

use kbforge_core::constants::ASPECT_RELATION;
use kbforge_core::errors::KbResult;
use kbforge_core::models::relation::strip_namespace;
use kbforge_core::models::{Cluster, ClusterVariant};

use crate::selector::Selection;

/// Serialised into the `metadata` column as a JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub triple_cluster: Vec<ClusterVariant>,
    pub facets: Vec<String>,
}

/// One knowledge-base row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KbRecord {
    pub id: String,
    pub subject: String,
    pub predicate: String,
    pub object: String,
    pub subject_type: String,
    pub super_subject: String,
    pub count: u64,
    pub predicted_relation: String,
    pub predicted_object: String,
    pub log_freq: Option<f64>,
    pub mod_pol: Option<f64>,
    pub num_mod: Option<usize>,
    pub perplexity: Option<f64>,
    pub triple_sentence: Option<String>,
    pub negative: Option<f64>,
    pub neutral: Option<f64>,
    pub positive: Option<f64>,
    pub metadata: String,
}

/// Project a cluster. Member triple ids are dropped; the namespace prefix of
/// the relation is stripped unless `keep_namespace`.
pub fn project(cluster: &Cluster, keep_namespace: bool, namespace: &str) -> KbResult<KbRecord> {
    let s = &cluster.scores;
    let relation = cluster.predicted_relation();
    let metadata = Metadata {
        triple_cluster: cluster.variants.clone(),
        facets: s.modifier.as_ref().map(|m| m.facets.clone()).unwrap_or_default(),
    };
    Ok(KbRecord {
        id: cluster.id.to_string(),
        subject: cluster.subject().to_string(),
        predicate: cluster.predicate().to_string(),
        object: cluster.object().to_string(),
        subject_type: cluster.subject_type().to_string(),
        super_subject: cluster.key.super_subject.clone(),
        count: cluster.count,
        predicted_relation: if keep_namespace {
            relation.to_string()
        } else {
            strip_namespace(relation, namespace).to_string()
        },
        predicted_object: cluster.predicted_object().to_string(),
        log_freq: s.log_freq,
        mod_pol: s.modifier.as_ref().map(|m| m.mod_pol),
        num_mod: s.modifier.as_ref().map(|m| m.num_mod),
        perplexity: s.perplexity,
        triple_sentence: s.triple_sentence.clone(),
        negative: s.sentiment.map(|x| x.negative),
        neutral: s.sentiment.map(|x| x.neutral),
        positive: s.sentiment.map(|x| x.positive),
        metadata: serde_json::to_string(&metadata)?,
    })
}

/// Aspects mode: raw triples plus `(super_subject, "has", aspect)` edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectsOutput {
    pub triples: Vec<(String, String, String)>,
    pub aspects: Vec<(String, String, String)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KnowledgeBase {
    Records(Vec<KbRecord>),
    Aspects(AspectsOutput),
}

impl KnowledgeBase {
    pub fn from_selection(
        selection: &Selection,
        aspects: bool,
        keep_namespace: bool,
        namespace: &str,
    ) -> KbResult<Self> {
        if !aspects {
            let records = selection
                .kept
                .iter()
                .map(|c| project(c, keep_namespace, namespace))
                .collect::<KbResult<Vec<_>>>()?;
            return Ok(KnowledgeBase::Records(records));
        }
        let triples = selection
            .kept
            .iter()
            .map(|c| {
                (
                    c.subject().to_string(),
                    c.predicate().to_string(),
                    c.object().to_string(),
                )
            })
            .collect();
        let aspects = selection
            .aspects
            .iter()
            .flat_map(|(subject, aspects)| {
                aspects
                    .iter()
                    .map(move |a| (subject.clone(), ASPECT_RELATION.to_string(), a.clone()))
            })
            .collect();
        Ok(KnowledgeBase::Aspects(AspectsOutput { triples, aspects }))
    }

    /// Number of output rows.
    pub fn len(&self) -> usize {
        match self {
            KnowledgeBase::Records(r) => r.len(),
            KnowledgeBase::Aspects(a) => a.triples.len() + a.aspects.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
