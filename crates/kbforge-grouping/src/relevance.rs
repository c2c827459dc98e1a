//! Subject relevance: which assertions describe a catalogued subject, and under which senses.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use kbforge_core::models::{Assertion, KeyedAssertion, SubjectType, TripleKey};
use kbforge_core::text::strip_nul;

use crate::validity::is_likely_valid;

/// One catalog row: a subject string and one of its senses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRecord {
    pub subject: String,
    #[serde(rename = "type")]
    pub subject_type: SubjectType,
    pub super_subject: String,
}

/// Subject string → its (subject_type, super_subject) senses.
#[derive(Debug, Clone, Default)]
pub struct SubjectCatalog {
    senses: HashMap<String, Vec<(SubjectType, String)>>,
}

impl SubjectCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = SubjectRecord>) -> Self {
        let mut catalog = Self::new();
        for r in records {
            catalog.add(r.subject, r.subject_type, r.super_subject);
        }
        catalog
    }

    /// Register a sense. Repeated senses are kept once.
    pub fn add(
        &mut self,
        subject: impl Into<String>,
        subject_type: impl Into<SubjectType>,
        super_subject: impl Into<String>,
    ) {
        let sense = (subject_type.into(), super_subject.into());
        let entry = self.senses.entry(subject.into()).or_default();
        if !entry.contains(&sense) {
            entry.push(sense);
        }
    }

    pub fn senses(&self, subject: &str) -> &[(SubjectType, String)] {
        self.senses.get(subject).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.senses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }
}

/// One precomputed similarity between a super-subject and a source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlSimilarityRecord {
    pub subject: String,
    pub url: String,
    #[serde(default)]
    pub count: u64,
    pub similarity: f64,
}

/// (super_subject, document) pairs considered on-topic.
#[derive(Debug, Clone, Default)]
pub struct UrlSimilarityTable {
    documents: HashMap<String, HashSet<String>>,
}

impl UrlSimilarityTable {
    /// Keep rows whose similarity reaches `threshold`.
    pub fn from_records(
        records: impl IntoIterator<Item = UrlSimilarityRecord>,
        threshold: f64,
    ) -> Self {
        let mut table = Self::default();
        for r in records.into_iter().filter(|r| r.similarity >= threshold) {
            table.insert(r.subject, r.url);
        }
        table
    }

    pub fn insert(&mut self, super_subject: impl Into<String>, url: impl Into<String>) {
        self.documents
            .entry(super_subject.into())
            .or_default()
            .insert(url.into());
    }

    pub fn contains(&self, super_subject: &str, url: &str) -> bool {
        self.documents
            .get(super_subject)
            .is_some_and(|urls| urls.contains(url))
    }

    /// Number of (super_subject, document) pairs.
    pub fn len(&self) -> usize {
        self.documents.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Keyed assertions of one input shard plus what was skipped.
#[derive(Debug, Clone, Default)]
pub struct RelevanceOutcome {
    pub keyed: Vec<KeyedAssertion>,
    pub invalid: usize,
    pub uncatalogued: usize,
    /// Catalogued subjects from assertions with no source document.
    pub no_document: usize,
}

/// Validity-check assertions and project each onto every relevant sense of its subject.
pub fn select_relevant(
    assertions: &[Assertion],
    catalog: &SubjectCatalog,
    urls: &UrlSimilarityTable,
    max_object_tokens: usize,
) -> RelevanceOutcome {
    let mut outcome = RelevanceOutcome::default();
    for a in assertions {
        if !is_likely_valid(a, max_object_tokens) {
            outcome.invalid += 1;
            continue;
        }
        let senses = catalog.senses(&a.subject);
        if senses.is_empty() {
            outcome.uncatalogued += 1;
            continue;
        }
        let Some(document) = a.provenance.document.as_deref() else {
            outcome.no_document += 1;
            continue;
        };
        for (subject_type, super_subject) in senses {
            if !urls.contains(super_subject, document) {
                continue;
            }
            outcome.keyed.push(KeyedAssertion {
                key: TripleKey::new(
                    strip_nul(&a.subject),
                    strip_nul(&a.predicate),
                    strip_nul(&a.object),
                    subject_type.clone(),
                    super_subject.clone(),
                ),
                assertion_id: a.id,
            });
        }
    }
    debug!(
        assertions = assertions.len(),
        keyed = outcome.keyed.len(),
        invalid = outcome.invalid,
        uncatalogued = outcome.uncatalogued,
        no_document = outcome.no_document,
        "relevance selection finished"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_deduplicates_senses() {
        let mut c = SubjectCatalog::new();
        c.add("jaguar", "primary", "jaguar");
        c.add("jaguar", "primary", "jaguar");
        c.add("jaguar", "subgroup", "car");
        assert_eq!(c.senses("jaguar").len(), 2);
        assert!(c.senses("puma").is_empty());
    }

    #[test]
    fn url_table_applies_threshold() {
        let rows = vec![
            UrlSimilarityRecord {
                subject: "cat".into(),
                url: "a".into(),
                count: 1,
                similarity: 0.7,
            },
            UrlSimilarityRecord {
                subject: "cat".into(),
                url: "b".into(),
                count: 1,
                similarity: 0.2,
            },
        ];
        let t = UrlSimilarityTable::from_records(rows, 0.6);
        assert!(t.contains("cat", "a"));
        assert!(!t.contains("cat", "b"));
    }
}
