use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Sentiment, SubjectKey, SubjectType, TripleId, TripleKey};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterId(pub String);

impl ClusterId {
    /// Derive the id of the `rank`-th cluster of a subject.
    pub fn for_subject(subject: &SubjectKey, rank: usize) -> Self {
        let mut hasher = blake3::Hasher::new();
        for field in [
            subject.subject.as_str(),
            subject.subject_type.as_str(),
            subject.super_subject.as_str(),
        ] {
            hasher.update(&(field.len() as u64).to_le_bytes());
            hasher.update(field.as_bytes());
        }
        let hex = hasher.finalize().to_hex();
        ClusterId(format!("cluster-{}-{rank:05}", &hex.as_str()[..12]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One member triple of a cluster as it appears in the cluster metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterVariant {
    pub triple_id: TripleId,
    pub predicate: String,
    pub object: String,
    pub count: u64,
}

/// Averaged frequency-adverb and quantifier signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierPolarity {
    pub mod_pol: f64,
    pub num_mod: usize,
    /// Facet statements that contributed, in discovery order.
    #[serde(default)]
    pub facets: Vec<String>,
}

/// Scores attached by the ranking stage. Fields are only ever added.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterScores {
    pub predicted_relation: Option<String>,
    pub predicted_object: Option<String>,
    pub log_freq: Option<f64>,
    pub modifier: Option<ModifierPolarity>,
    pub sentiment: Option<Sentiment>,
    pub triple_sentence: Option<String>,
    pub perplexity: Option<f64>,
}

/// Names of the attachable score fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreField {
    PredictedRelation,
    PredictedObject,
    LogFreq,
    ModifierPolarity,
    Sentiment,
    TripleSentence,
    Perplexity,
}

impl ScoreField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreField::PredictedRelation => "predicted_relation",
            ScoreField::PredictedObject => "predicted_object",
            ScoreField::LogFreq => "log_freq",
            ScoreField::ModifierPolarity => "mod_pol",
            ScoreField::Sentiment => "sentiment",
            ScoreField::TripleSentence => "triple_sentence",
            ScoreField::Perplexity => "perplexity",
        }
    }

    /// The field this one is computed from, if any. Perplexity is scored on
    /// the canonical sentence, so a cluster without a sentence never gets one.
    pub fn prerequisite(&self) -> Option<ScoreField> {
        match self {
            ScoreField::Perplexity => Some(ScoreField::TripleSentence),
            _ => None,
        }
    }
}

impl fmt::Display for ScoreField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A group of near-duplicate triples of one subject with a representative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: ClusterId,
    /// Representative (highest-count member) key.
    #[serde(flatten)]
    pub key: TripleKey,
    /// Sum of member counts.
    pub count: u64,
    /// Member triple ids, descending by count.
    pub triples: Vec<TripleId>,
    /// Member details, same order as `triples`.
    #[serde(default)]
    pub variants: Vec<ClusterVariant>,
    #[serde(default)]
    pub scores: ClusterScores,
}

impl Cluster {
    pub fn subject_key(&self) -> SubjectKey {
        self.key.subject_key()
    }

    pub fn subject(&self) -> &str {
        &self.key.subject
    }

    pub fn predicate(&self) -> &str {
        &self.key.predicate
    }

    pub fn object(&self) -> &str {
        &self.key.object
    }

    pub fn subject_type(&self) -> &SubjectType {
        &self.key.subject_type
    }

    /// Predicted relation label, or "" before relation prediction.
    pub fn predicted_relation(&self) -> &str {
        self.scores.predicted_relation.as_deref().unwrap_or("")
    }

    /// Predicted object, falling back to the raw object.
    pub fn predicted_object(&self) -> &str {
        self.scores
            .predicted_object
            .as_deref()
            .unwrap_or(&self.key.object)
    }

    /// Whether `field` is absent only because its prerequisite is absent,
    /// e.g. no assertion states the cluster's exact (predicate, object).
    pub fn is_unscorable(&self, field: ScoreField) -> bool {
        field.prerequisite().is_some_and(|p| !self.has_score(p))
    }

    pub fn has_score(&self, field: ScoreField) -> bool {
        let s = &self.scores;
        match field {
            ScoreField::PredictedRelation => s.predicted_relation.is_some(),
            ScoreField::PredictedObject => s.predicted_object.is_some(),
            ScoreField::LogFreq => s.log_freq.is_some(),
            ScoreField::ModifierPolarity => s.modifier.is_some(),
            ScoreField::Sentiment => s.sentiment.is_some(),
            ScoreField::TripleSentence => s.triple_sentence.is_some(),
            ScoreField::Perplexity => s.perplexity.is_some(),
        }
    }
}

/// One additive field assignment on a cluster's scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ScorePatch {
    Relation { relation: String, object: String },
    LogFreq(f64),
    Modifier(ModifierPolarity),
    Sentiment(Sentiment),
    TripleSentence(String),
    Perplexity(f64),
}

impl ScorePatch {
    pub fn apply(self, scores: &mut ClusterScores) {
        match self {
            ScorePatch::Relation { relation, object } => {
                scores.predicted_relation = Some(relation);
                scores.predicted_object = Some(object);
            }
            ScorePatch::LogFreq(v) => scores.log_freq = Some(v),
            ScorePatch::Modifier(m) => scores.modifier = Some(m),
            ScorePatch::Sentiment(s) => scores.sentiment = Some(s),
            ScorePatch::TripleSentence(s) => scores.triple_sentence = Some(s),
            ScorePatch::Perplexity(p) => scores.perplexity = Some(p),
        }
    }
}
