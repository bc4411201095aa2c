//! Score thresholding

use super::labels::BinaryLabels;

/// Default cut-point applied to positive-class scores
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Convert continuous scores into 0/1 class indices
///
/// A score maps to `1` only when it is strictly greater than `threshold`;
/// a score equal to the threshold is classified negative.
///
/// # Example
/// ```
/// use binperf::threshold_argmax;
///
/// let y_pred = threshold_argmax(&[0.1, 0.5, 0.7], 0.5);
/// assert_eq!(y_pred, vec![0, 0, 1]);
/// ```
pub fn threshold_argmax(y_score: &[f64], threshold: f64) -> Vec<usize> {
    y_score
        .iter()
        .map(|&score| usize::from(score > threshold))
        .collect()
}

/// Convert continuous scores into label values
///
/// Same rule as [`threshold_argmax`], mapping `1` to `labels.positive` and
/// `0` to `labels.negative`.
pub fn predict_labels<L: Clone>(y_score: &[f64], threshold: f64, labels: &BinaryLabels<L>) -> Vec<L> {
    y_score
        .iter()
        .map(|&score| {
            if score > threshold {
                labels.positive.clone()
            } else {
                labels.negative.clone()
            }
        })
        .collect()
}
