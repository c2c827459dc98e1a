//! Pipeline metrics registry.

pub mod pipeline_metrics;

pub use pipeline_metrics::{PipelineMetrics, StageCounts};
