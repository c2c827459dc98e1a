//! # kbforge-storage
//!
//! Record stores for assertions, triples and clusters, plus the JSONL and
//! id-file formats records travel in between pipeline stages.

pub mod engine;
pub mod files;

pub use engine::StorageEngine;
pub use files::{read_id_file, read_jsonl, write_id_file, write_jsonl};
