//! # kbforge-pipeline
//!
//! Runs every stage of a knowledge-base build over one set of inputs:
//! relevance → aggregation → frequency threshold → clustering → scoring →
//! filtering → selection. Also runs single scoring steps over id-file
//! partitions.

pub mod batch;
pub mod builder;
pub mod inputs;
pub mod output;
pub mod report;
pub mod stages;

pub use batch::{run_id_batch, write_cluster_ids};
pub use builder::{KnowledgeBaseBuilder, Models};
pub use inputs::BuildInputs;
pub use output::write_knowledge_base;
pub use report::BuildReport;
