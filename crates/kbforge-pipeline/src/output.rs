//! Knowledge-base files.

use std::path::{Path, PathBuf};

use serde::Serialize;

use kbforge_core::errors::KbResult;
use kbforge_selection::KnowledgeBase;
use kbforge_storage::write_jsonl;

pub const RECORDS_FILE: &str = "kb.jsonl";
pub const TRIPLES_FILE: &str = "triples.jsonl";
pub const ASPECTS_FILE: &str = "aspects.jsonl";

#[derive(Serialize)]
struct Edge<'a> {
    subject: &'a str,
    predicate: &'a str,
    object: &'a str,
}

fn edges(rows: &[(String, String, String)]) -> Vec<Edge<'_>> {
    rows.iter()
        .map(|(s, p, o)| Edge {
            subject: s,
            predicate: p,
            object: o,
        })
        .collect()
}

/// Write the knowledge base under `dir` as JSONL. Records mode writes
/// `kb.jsonl`; aspects mode writes `triples.jsonl` and `aspects.jsonl`.
/// Returns the written paths.
pub fn write_knowledge_base(kb: &KnowledgeBase, dir: impl AsRef<Path>) -> KbResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;
    match kb {
        KnowledgeBase::Records(records) => {
            let path = dir.join(RECORDS_FILE);
            write_jsonl(&path, records)?;
            Ok(vec![path])
        }
        KnowledgeBase::Aspects(out) => {
            let triples = dir.join(TRIPLES_FILE);
            let aspects = dir.join(ASPECTS_FILE);
            write_jsonl(&triples, &edges(&out.triples))?;
            write_jsonl(&aspects, &edges(&out.aspects))?;
            Ok(vec![triples, aspects])
        }
    }
}
