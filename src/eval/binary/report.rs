//! Text report of a binary evaluation

use super::performance::BinaryEvaluation;
use super::selection::Metric;

fn format_value(value: f64) -> String {
    if value.is_nan() {
        "undefined".to_string()
    } else {
        format!("{value:.4}")
    }
}

/// Render an evaluation as a plain-text report
///
/// # Example
/// ```
/// use binperf::{evaluate, performance_report, PerformanceOptions};
///
/// let evaluation = evaluate(&[0, 1], &[0.2, 0.8], &PerformanceOptions::default())?;
/// let report = performance_report(&evaluation);
/// assert!(report.contains("Accuracy"));
/// # Ok::<(), binperf::Error>(())
/// ```
pub fn performance_report(evaluation: &BinaryEvaluation) -> String {
    let metrics = &evaluation.metrics;
    let mut report = String::new();

    report.push_str(&format!(
        "Threshold: {}  (n = {})\n\n",
        evaluation.threshold,
        evaluation.confusion.total()
    ));
    report.push_str(&evaluation.confusion.to_string());
    report.push('\n');

    report.push_str(&format!("{:>20} {:>10}\n", "metric", "value"));
    report.push_str(&"-".repeat(31));
    report.push('\n');

    let base = [
        ("Accuracy", metrics.acc),
        ("Sensitivity", metrics.sens),
        ("Specificity", metrics.spec),
    ];
    for (name, value) in base {
        report.push_str(&format!("{:>20} {:>10}\n", name, format_value(value)));
    }
    for metric in Metric::ALL {
        if let Some(value) = metrics.get(metric) {
            report.push_str(&format!(
                "{:>20} {:>10}\n",
                metric.name(),
                format_value(value)
            ));
        }
    }

    report
}
