//! binperf: binary classification performance at a cut-point
//!
//! Thresholds continuous scores, tallies the 2x2 confusion matrix against
//! ground truth and derives accuracy, sensitivity and specificity, plus
//! balanced accuracy, Youden's J, AUROC and error rates on request.
//!
//! All computations are pure functions of their inputs; evaluating many
//! thresholds concurrently needs no coordination.

pub mod cli;
pub mod config;
pub mod error;
pub mod eval;

pub use error::{Error, Result};
pub use eval::{
    confusion_matrix, evaluate, performance, performance_report, predict_labels, roc_auc,
    threshold_argmax, youdens_jstats, BinaryConfusion, BinaryEvaluation, BinaryLabels,
    BinaryMetrics, Metric, MetricSet, PerformanceOptions, DEFAULT_THRESHOLD,
};
