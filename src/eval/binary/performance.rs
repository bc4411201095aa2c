//! Performance aggregation at a single cut-point

use super::auroc::roc_auc;
use super::confusion::BinaryConfusion;
use super::labels::BinaryLabels;
use super::selection::{Metric, MetricSet};
use super::threshold::{predict_labels, DEFAULT_THRESHOLD};
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Youden's J-statistic, `sens + spec - 1`
pub fn youdens_jstats(sens: f64, spec: f64) -> f64 {
    sens + spec - 1.0
}

/// Options of a performance evaluation
#[derive(Clone, Debug, PartialEq)]
pub struct PerformanceOptions<L> {
    /// Scores strictly above this value are predicted positive
    pub threshold: f64,
    /// Negative and positive label values
    pub labels: BinaryLabels<L>,
    /// Optional metrics to compute
    pub metrics: MetricSet,
}

impl<L: From<u8>> Default for PerformanceOptions<L> {
    fn default() -> Self {
        Self::new(BinaryLabels::default())
    }
}

impl<L> PerformanceOptions<L> {
    /// Options with the default threshold and no optional metrics
    pub fn new(labels: BinaryLabels<L>) -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            labels,
            metrics: MetricSet::none(),
        }
    }

    /// Set the cut-point
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the label values
    pub fn with_labels(mut self, labels: BinaryLabels<L>) -> Self {
        self.labels = labels;
        self
    }

    /// Request one optional metric
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metrics.insert(metric);
        self
    }

    /// Replace the requested optional metrics
    pub fn with_metrics(mut self, metrics: MetricSet) -> Self {
        self.metrics = metrics;
        self
    }
}

/// Metrics of one evaluation
///
/// Optional metrics are `None` when not requested and `Some(NaN)` when
/// requested but undefined for the input (e.g. AUROC on one class).
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct BinaryMetrics {
    /// Accuracy
    pub acc: f64,
    /// Sensitivity (true-positive rate)
    pub sens: f64,
    /// Specificity (true-negative rate)
    pub spec: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bal_acc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youden: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auroc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bal_err_rate: Option<f64>,
}

impl BinaryMetrics {
    /// Value of an optional metric, `None` if it was not requested
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::BalancedAccuracy => self.bal_acc,
            Metric::Youden => self.youden,
            Metric::Auroc => self.auroc,
            Metric::ErrorRate => self.err_rate,
            Metric::BalancedErrorRate => self.bal_err_rate,
        }
    }

    /// Flat `key -> value` view holding only the computed metrics
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        let mut map = BTreeMap::new();
        map.insert("acc", self.acc);
        map.insert("sens", self.sens);
        map.insert("spec", self.spec);
        for metric in Metric::ALL {
            if let Some(value) = self.get(metric) {
                map.insert(metric.key(), value);
            }
        }
        map
    }

    /// Bitwise equality, treating NaN as equal to itself
    pub fn bit_eq(&self, other: &Self) -> bool {
        let same = |a: f64, b: f64| a.to_bits() == b.to_bits();
        let same_opt = |a: Option<f64>, b: Option<f64>| match (a, b) {
            (Some(a), Some(b)) => same(a, b),
            (None, None) => true,
            _ => false,
        };
        same(self.acc, other.acc)
            && same(self.sens, other.sens)
            && same(self.spec, other.spec)
            && Metric::ALL
                .iter()
                .all(|&m| same_opt(self.get(m), other.get(m)))
    }
}

/// Full outcome of evaluating one threshold
#[derive(Clone, Debug, Serialize)]
pub struct BinaryEvaluation {
    /// Cut-point used
    pub threshold: f64,
    /// Confusion tally at the cut-point
    pub confusion: BinaryConfusion,
    /// Derived metrics
    pub metrics: BinaryMetrics,
}

fn validate_inputs<L: PartialEq + fmt::Debug>(
    y_true: &[L],
    y_score: &[f64],
    options: &PerformanceOptions<L>,
) -> Result<()> {
    if options.threshold.is_nan() {
        return Err(Error::InvalidThreshold(options.threshold));
    }
    if options.labels.negative == options.labels.positive {
        return Err(Error::IdenticalLabels {
            label: format!("{:?}", options.labels.negative),
        });
    }
    if y_true.len() != y_score.len() {
        return Err(Error::LengthMismatch {
            labels: y_true.len(),
            scores: y_score.len(),
        });
    }
    if let Some((index, label)) = y_true
        .iter()
        .enumerate()
        .find(|(_, label)| !options.labels.contains(label))
    {
        return Err(Error::UnknownLabel {
            index,
            label: format!("{label:?}"),
        });
    }
    if let Some(index) = y_score.iter().position(|s| s.is_nan()) {
        return Err(Error::NanScore { index });
    }
    Ok(())
}

/// Evaluate scores against ground truth at the configured cut-point
///
/// Returns the confusion tally together with the metrics. See
/// [`performance`] for the metric definitions.
pub fn evaluate<L>(
    y_true: &[L],
    y_score: &[f64],
    options: &PerformanceOptions<L>,
) -> Result<BinaryEvaluation>
where
    L: Clone + PartialEq + fmt::Debug,
{
    validate_inputs(y_true, y_score, options)?;

    let y_pred = predict_labels(y_score, options.threshold, &options.labels);
    let confusion = BinaryConfusion::from_labels(y_true, &y_pred, &options.labels)?;

    let acc = confusion.accuracy();
    let sens = confusion.sensitivity();
    let spec = confusion.specificity();
    let wanted = &options.metrics;

    let balanced = (wanted.bal_acc || wanted.bal_err_rate).then(|| confusion.balanced_accuracy());

    let auroc = wanted.auroc.then(|| {
        let mut rest = y_true.iter();
        let first = rest.next();
        match first {
            Some(first) if rest.any(|label| label != first) => {
                roc_auc(y_true, y_score, &options.labels.positive)
            }
            _ => f64::NAN,
        }
    });

    let metrics = BinaryMetrics {
        acc,
        sens,
        spec,
        bal_acc: balanced.filter(|_| wanted.bal_acc),
        youden: wanted.youden.then(|| youdens_jstats(sens, spec)),
        auroc,
        err_rate: wanted.err_rate.then(|| 1.0 - acc),
        bal_err_rate: balanced.filter(|_| wanted.bal_err_rate).map(|b| 1.0 - b),
    };

    Ok(BinaryEvaluation {
        threshold: options.threshold,
        confusion,
        metrics,
    })
}

/// Compute binary classification metrics at a cut-point
///
/// Accuracy, sensitivity and specificity are always computed; the metrics
/// in `options.metrics` are added on request. Undefined ratios (no positive
/// or no negative samples) are NaN. AUROC is NaN when the ground truth holds
/// a single class.
///
/// # Errors
/// Fails on a NaN threshold, identical label values, mismatched lengths,
/// ground-truth values outside the two labels, or NaN scores.
///
/// # Example
/// ```
/// use binperf::{performance, Metric, PerformanceOptions};
///
/// let y_true = vec![0, 0, 1, 1];
/// let y_score = vec![0.1, 0.4, 0.6, 0.9];
/// let options = PerformanceOptions::default().with_metric(Metric::Auroc);
/// let metrics = performance(&y_true, &y_score, &options)?;
///
/// assert_eq!(metrics.acc, 1.0);
/// assert_eq!(metrics.auroc, Some(1.0));
/// # Ok::<(), binperf::Error>(())
/// ```
pub fn performance<L>(
    y_true: &[L],
    y_score: &[f64],
    options: &PerformanceOptions<L>,
) -> Result<BinaryMetrics>
where
    L: Clone + PartialEq + fmt::Debug,
{
    evaluate(y_true, y_score, options).map(|evaluation| evaluation.metrics)
}
