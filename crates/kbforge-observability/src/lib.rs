//! # kbforge-observability
//!
//! Structured tracing with one named event per pipeline stage, and a
//! serialisable collector of per-stage counts.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{PipelineMetrics, StageCounts};
