//! Precomputed inputs of one build.

use std::path::Path;

use kbforge_core::errors::KbResult;
use kbforge_core::models::Assertion;
use kbforge_grouping::relevance::{SubjectRecord, UrlSimilarityRecord};
use kbforge_grouping::{SubjectCatalog, UrlSimilarityTable};
use kbforge_storage::read_jsonl;

pub const ASSERTIONS_FILE: &str = "assertions.jsonl";
pub const SUBJECTS_FILE: &str = "subjects.jsonl";
pub const URL_SIMILARITY_FILE: &str = "url_similarity.jsonl";

/// Raw assertions plus the subject catalog and on-topic document table.
#[derive(Debug, Clone, Default)]
pub struct BuildInputs {
    pub assertions: Vec<Assertion>,
    pub catalog: SubjectCatalog,
    pub urls: UrlSimilarityTable,
}

impl BuildInputs {
    pub fn new(assertions: Vec<Assertion>, catalog: SubjectCatalog, urls: UrlSimilarityTable) -> Self {
        Self {
            assertions,
            catalog,
            urls,
        }
    }

    /// Read the three JSONL input files from `dir`, keeping url rows whose
    /// similarity reaches `url_similarity_threshold`.
    pub fn load(dir: impl AsRef<Path>, url_similarity_threshold: f64) -> KbResult<Self> {
        let dir = dir.as_ref();
        let assertions: Vec<Assertion> = read_jsonl(dir.join(ASSERTIONS_FILE))?;
        let subjects: Vec<SubjectRecord> = read_jsonl(dir.join(SUBJECTS_FILE))?;
        let urls: Vec<UrlSimilarityRecord> = read_jsonl(dir.join(URL_SIMILARITY_FILE))?;
        Ok(Self {
            assertions,
            catalog: SubjectCatalog::from_records(subjects),
            urls: UrlSimilarityTable::from_records(urls, url_similarity_threshold),
        })
    }
}
