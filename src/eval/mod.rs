//! Model evaluation
//!
//! ## Architecture
//!
//! - `binary`: thresholded binary-classification metrics, confusion tally, AUROC, reports
//!
//! ## Example
//!
//! ```
//! use binperf::eval::{performance, Metric, PerformanceOptions};
//!
//! let options = PerformanceOptions::default()
//!     .with_threshold(0.5)
//!     .with_metric(Metric::Youden);
//! let metrics = performance(&[0, 0, 1, 1], &[0.1, 0.4, 0.6, 0.9], &options)?;
//! println!("Youden's J: {:.2}", metrics.youden.unwrap_or(f64::NAN));
//! # Ok::<(), binperf::Error>(())
//! ```

pub mod binary;

pub use binary::{
    confusion_matrix, evaluate, performance, performance_report, predict_labels, roc_auc,
    threshold_argmax, youdens_jstats, BinaryConfusion, BinaryEvaluation, BinaryLabels,
    BinaryMetrics, Metric, MetricSet, PerformanceOptions, DEFAULT_THRESHOLD,
};
