//! Confusion tally for binary classification

use super::labels::BinaryLabels;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 2x2 confusion counts over a negative and a positive label
///
/// Ratios with a zero denominator are NaN rather than a panic, so a tally
/// without positive (or negative) samples still yields its defined metrics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BinaryConfusion {
    /// True negatives
    pub tn: usize,
    /// False positives
    pub fp: usize,
    /// False negatives
    #[serde(rename = "fn")]
    pub fn_: usize,
    /// True positives
    pub tp: usize,
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        f64::NAN
    } else {
        numerator as f64 / denominator as f64
    }
}

impl BinaryConfusion {
    /// Create from the four counts in `tn, fp, fn, tp` order
    pub fn new(tn: usize, fp: usize, fn_: usize, tp: usize) -> Self {
        Self { tn, fp, fn_, tp }
    }

    /// Tally predicted against true labels
    ///
    /// Pairs where either label is outside `labels` are not counted.
    pub fn from_labels<L: PartialEq>(
        y_true: &[L],
        y_pred: &[L],
        labels: &BinaryLabels<L>,
    ) -> Result<Self> {
        if y_true.len() != y_pred.len() {
            return Err(Error::PredictionLengthMismatch {
                truth: y_true.len(),
                predicted: y_pred.len(),
            });
        }

        let mut cm = Self::default();
        for (truth, pred) in y_true.iter().zip(y_pred.iter()) {
            if !labels.contains(truth) || !labels.contains(pred) {
                continue;
            }
            match (labels.is_positive(truth), labels.is_positive(pred)) {
                (false, false) => cm.tn += 1,
                (false, true) => cm.fp += 1,
                (true, false) => cm.fn_ += 1,
                (true, true) => cm.tp += 1,
            }
        }

        Ok(cm)
    }

    /// Counts flattened row-major: `[tn, fp, fn, tp]`
    pub fn ravel(&self) -> [usize; 4] {
        [self.tn, self.fp, self.fn_, self.tp]
    }

    /// Total number of tallied samples
    pub fn total(&self) -> usize {
        self.tn + self.fp + self.fn_ + self.tp
    }

    /// Samples whose true label is positive
    pub fn positives(&self) -> usize {
        self.tp + self.fn_
    }

    /// Samples whose true label is negative
    pub fn negatives(&self) -> usize {
        self.tn + self.fp
    }

    /// `(TN + TP) / total`
    pub fn accuracy(&self) -> f64 {
        ratio(self.tn + self.tp, self.total())
    }

    /// True-positive rate, `TP / (TP + FN)`
    pub fn sensitivity(&self) -> f64 {
        ratio(self.tp, self.positives())
    }

    /// True-negative rate, `TN / (TN + FP)`
    pub fn specificity(&self) -> f64 {
        ratio(self.tn, self.negatives())
    }

    /// Mean recall over the classes present in the ground truth
    ///
    /// A class without true samples has no recall and is left out of the
    /// mean. NaN when nothing was tallied.
    pub fn balanced_accuracy(&self) -> f64 {
        let recalls: Vec<f64> = [self.sensitivity(), self.specificity()]
            .into_iter()
            .filter(|r| !r.is_nan())
            .collect();
        if recalls.is_empty() {
            f64::NAN
        } else {
            recalls.iter().sum::<f64>() / recalls.len() as f64
        }
    }
}

impl fmt::Display for BinaryConfusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;
        writeln!(f, "          {:>8} {:>8}", "Pred neg", "Pred pos")?;
        writeln!(f, "True neg  {:>8} {:>8}", self.tn, self.fp)?;
        writeln!(f, "True pos  {:>8} {:>8}", self.fn_, self.tp)?;
        Ok(())
    }
}

/// Compute the binary confusion tally from true and predicted labels
///
/// # Example
/// ```
/// use binperf::{confusion_matrix, BinaryLabels};
///
/// let y_true = vec![0, 0, 1, 1];
/// let y_pred = vec![0, 1, 1, 1];
/// let cm = confusion_matrix(&y_true, &y_pred, &BinaryLabels::default()).unwrap();
///
/// assert_eq!(cm.ravel(), [1, 1, 0, 2]);
/// ```
pub fn confusion_matrix<L: PartialEq>(
    y_true: &[L],
    y_pred: &[L],
    labels: &BinaryLabels<L>,
) -> Result<BinaryConfusion> {
    BinaryConfusion::from_labels(y_true, y_pred, labels)
}
