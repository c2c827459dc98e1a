//! Outcome of one build.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kbforge_core::errors::KbResult;
use kbforge_filtering::FilterReport;
use kbforge_observability::PipelineMetrics;
use kbforge_selection::KnowledgeBase;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReport {
    pub run_id: Uuid,
    /// kbforge version that produced the output.
    pub version: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub metrics: PipelineMetrics,
    /// Per-rule rejections of the filtering stage.
    pub filter: FilterReport,
    pub output: KnowledgeBase,
}

impl BuildReport {
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }

    /// Persist the report, output included, as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> KbResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    pub fn read_json(path: impl AsRef<Path>) -> KbResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&content)?)
    }
}
