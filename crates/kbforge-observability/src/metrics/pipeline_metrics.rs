//! Per-stage input/output counts and per-rule rejections for one build.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Records in and out of one stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCounts {
    pub input: usize,
    pub output: usize,
}

impl StageCounts {
    /// Fraction of the input that did not survive (0.0 for empty input).
    pub fn drop_ratio(&self) -> f64 {
        if self.input == 0 {
            return 0.0;
        }
        self.input.saturating_sub(self.output) as f64 / self.input as f64
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineMetrics {
    /// Stage name → counts, in stage-name order.
    stages: BTreeMap<String, StageCounts>,
    /// Filter rule name → clusters it rejected.
    rule_rejections: BTreeMap<String, usize>,
    /// Records dropped from bulk writes.
    pub write_failures: usize,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a stage; repeated stages (one per batch) accumulate.
    pub fn record_stage(&mut self, stage: &str, input: usize, output: usize) {
        let counts = self.stages.entry(stage.to_string()).or_default();
        counts.input += input;
        counts.output += output;
    }

    pub fn record_rejections(&mut self, rule: &str, rejected: usize) {
        *self.rule_rejections.entry(rule.to_string()).or_default() += rejected;
    }

    pub fn record_write_failures(&mut self, failures: usize) {
        self.write_failures += failures;
    }

    pub fn stage(&self, stage: &str) -> Option<StageCounts> {
        self.stages.get(stage).copied()
    }

    pub fn stages(&self) -> &BTreeMap<String, StageCounts> {
        &self.stages
    }

    pub fn rejections(&self, rule: &str) -> usize {
        self.rule_rejections.get(rule).copied().unwrap_or(0)
    }

    pub fn rule_rejections(&self) -> &BTreeMap<String, usize> {
        &self.rule_rejections
    }

    /// Fold another build's metrics into this one.
    pub fn merge(&mut self, other: PipelineMetrics) {
        for (stage, counts) in other.stages {
            self.record_stage(&stage, counts.input, counts.output);
        }
        for (rule, rejected) in other.rule_rejections {
            self.record_rejections(&rule, rejected);
        }
        self.write_failures += other.write_failures;
    }

    /// Reset all metrics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
