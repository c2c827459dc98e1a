//! Shared fixtures for kbforge tests: record builders, deterministic stand-ins
//! for the external models, and loaders for the files under `data/`.

pub mod builders;
pub mod models;

use serde::de::DeserializeOwned;
use std::path::PathBuf;

pub use builders::{assertion, cluster, triple, AssertionBuilder, ClusterBuilder};
pub use models::{
    FailingEmbedder, FixedPerplexity, HashEmbedder, KeywordRelationClassifier, KeywordSentiment,
    TableEmbedder,
};

/// Root directory of the fixture data files.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load a newline-delimited JSON fixture file.
///
/// # Panics
/// Panics on a missing file or a malformed line.
pub fn load_jsonl_fixture<T: DeserializeOwned>(relative_path: &str) -> Vec<T> {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .enumerate()
        .map(|(i, line)| {
            serde_json::from_str(line).unwrap_or_else(|e| {
                panic!("Failed to parse {} line {}: {}", path.display(), i + 1, e)
            })
        })
        .collect()
}
