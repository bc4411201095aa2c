//! Declarative evaluation spec and scored-data schema

use crate::eval::{BinaryLabels, Metric, MetricSet, PerformanceOptions, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_labels() -> [i64; 2] {
    [0, 1]
}

/// Evaluation specification loaded from YAML or JSON
///
/// ```yaml
/// data: scores.json
/// threshold: 0.5
/// labels: [0, 1]
/// metrics: [bal_acc, youden, auroc]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalSpec {
    /// Scored data file (relative paths resolve against the spec's directory)
    pub data: PathBuf,

    /// Cut-point applied to scores
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Negative and positive label values, in that order
    #[serde(default = "default_labels")]
    pub labels: [i64; 2],

    /// Optional metrics to compute
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<Metric>,
}

impl EvalSpec {
    /// Spec for `data` with default threshold, labels and no optional metrics
    pub fn new(data: impl Into<PathBuf>) -> Self {
        Self {
            data: data.into(),
            threshold: default_threshold(),
            labels: default_labels(),
            metrics: Vec::new(),
        }
    }

    /// Options for [`crate::eval::evaluate`]
    pub fn options(&self) -> PerformanceOptions<i64> {
        PerformanceOptions::new(BinaryLabels::from(self.labels))
            .with_threshold(self.threshold)
            .with_metrics(self.metrics.iter().copied().collect::<MetricSet>())
    }
}

/// Ground truth and scores, positionally aligned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredData {
    /// Ground-truth labels
    pub y_true: Vec<i64>,
    /// Positive-class scores
    pub y_score: Vec<f64>,
}
