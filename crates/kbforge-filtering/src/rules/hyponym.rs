//! Lexical hyponym consistency for `IsA` clusters.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use kbforge_core::errors::{FilteringError, KbResult};
use kbforge_core::models::{relation, Cluster, ScoreField};

use crate::rule::FilterRule;

/// One line of the subject→hyponyms table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyponymRecord {
    pub subject: String,
    pub hyponyms: Vec<String>,
}

/// Known hyponyms (more general terms) per subject.
#[derive(Debug, Clone, Default)]
pub struct HyponymTable {
    subjects: HashMap<String, Vec<String>>,
}

impl HyponymTable {
    pub fn from_records(records: impl IntoIterator<Item = HyponymRecord>) -> Self {
        let mut table = Self::default();
        for r in records {
            // Later lines replace earlier ones for the same subject.
            table.subjects.insert(r.subject, r.hyponyms);
        }
        table
    }

    /// Parse newline-delimited JSON records. Blank lines are skipped.
    pub fn from_jsonl(text: &str) -> KbResult<Self> {
        let mut records = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let record: HyponymRecord =
                serde_json::from_str(line).map_err(|e| FilteringError::MalformedHyponymTable {
                    line: idx + 1,
                    reason: e.to_string(),
                })?;
            records.push(record);
        }
        Ok(Self::from_records(records))
    }

    pub fn load(path: impl AsRef<Path>) -> KbResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_jsonl(&text)
    }

    pub fn hyponyms(&self, subject: &str) -> Option<&[String]> {
        self.subjects.get(subject).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

/// For `IsA` clusters of a catalogued subject, the predicted object must
/// contain a known hyponym token, bare or pluralised with `s`/`es`.
/// Other relations and unknown subjects pass.
#[derive(Debug, Clone)]
pub struct HyponymRule {
    table: HyponymTable,
    source: String,
    is_a: String,
}

impl HyponymRule {
    pub fn new(table: HyponymTable, source: impl Into<String>) -> Self {
        Self {
            table,
            source: source.into(),
            is_a: relation::IS_A.to_string(),
        }
    }

    /// Match `IsA` under a different relation label.
    pub fn with_is_a_label(mut self, label: impl Into<String>) -> Self {
        self.is_a = label.into();
        self
    }
}

impl FilterRule for HyponymRule {
    fn name(&self) -> String {
        format!("HyponymRule - \"{}\"", self.source)
    }

    fn requires(&self) -> &[ScoreField] {
        &[ScoreField::PredictedRelation, ScoreField::PredictedObject]
    }

    fn validate(&self, cluster: &Cluster) -> bool {
        if cluster.predicted_relation() != self.is_a {
            return true;
        }
        let Some(hyponyms) = self.table.hyponyms(cluster.subject()) else {
            return true;
        };
        let tokens: Vec<&str> = cluster.predicted_object().split_whitespace().collect();
        hyponyms.iter().any(|h| {
            tokens.iter().any(|&t| {
                t.strip_prefix(h.as_str())
                    .is_some_and(|rest| rest.is_empty() || rest == "s" || rest == "es")
            })
        })
    }
}
