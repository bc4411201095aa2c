//! Binary classification performance at a cut-point
//!
//! Provides:
//! - Score thresholding into predicted labels
//! - 2x2 confusion tally over two label values
//! - Accuracy, sensitivity, specificity and, on request, balanced
//!   accuracy, Youden's J, AUROC and error rates
//! - Plain-text performance reports

mod auroc;
mod confusion;
mod labels;
mod performance;
mod report;
mod selection;
mod threshold;

#[cfg(test)]
mod sklearn_parity_tests;

pub use auroc::roc_auc;
pub use confusion::{confusion_matrix, BinaryConfusion};
pub use labels::BinaryLabels;
pub use performance::{
    evaluate, performance, youdens_jstats, BinaryEvaluation, BinaryMetrics, PerformanceOptions,
};
pub use report::performance_report;
pub use selection::{Metric, MetricSet};
pub use threshold::{predict_labels, threshold_argmax, DEFAULT_THRESHOLD};
