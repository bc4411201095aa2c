//! sklearn parity tests for binary performance metrics
//!
//! Reference values follow sklearn's `confusion_matrix`,
//! `balanced_accuracy_score` and `roc_auc_score`:
//! ```python
//! from sklearn.metrics import (balanced_accuracy_score, confusion_matrix,
//!                              roc_auc_score)
//! ```

#[cfg(test)]
mod tests {
    use crate::eval::binary::{evaluate, performance, MetricSet, PerformanceOptions};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sklearn_parity_tied_scores() {
        // roc_auc_score([0, 0, 1, 1, 0, 1, 0, 1],
        //               [0.1, 0.35, 0.35, 0.8, 0.6, 0.6, 0.2, 0.9]) = 0.875
        let y_true = vec![0, 0, 1, 1, 0, 1, 0, 1];
        let y_score = vec![0.1, 0.35, 0.35, 0.8, 0.6, 0.6, 0.2, 0.9];
        let options = PerformanceOptions::default().with_metrics(MetricSet::all());
        let evaluation = evaluate(&y_true, &y_score, &options).unwrap();
        let metrics = evaluation.metrics;

        // confusion_matrix(y_true, y_pred, labels=[0, 1]).ravel() = [3, 1, 1, 3]
        assert_eq!(evaluation.confusion.ravel(), [3, 1, 1, 3]);
        assert_abs_diff_eq!(metrics.acc, 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(metrics.sens, 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(metrics.spec, 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(metrics.bal_acc.unwrap(), 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(metrics.youden.unwrap(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(metrics.auroc.unwrap(), 0.875, epsilon = 1e-12);
    }

    #[test]
    fn test_sklearn_parity_imbalanced() {
        // y_true = [0, 0, 0, 0, 0, 0, 1, 1, 1, 0]
        // y_pred = [0, 0, 1, 0, 1, 0, 1, 0, 1, 0]  (threshold 0.5)
        //
        // TN=5, FP=2, FN=1, TP=2
        // balanced_accuracy_score = (2/3 + 5/7) / 2 = 0.6904761904761905
        // roc_auc_score = 18/21 = 0.8571428571428571
        let y_true = vec![0, 0, 0, 0, 0, 0, 1, 1, 1, 0];
        let y_score = vec![0.05, 0.2, 0.55, 0.3, 0.7, 0.1, 0.65, 0.45, 0.9, 0.15];
        let options = PerformanceOptions::default().with_metrics(MetricSet::all());
        let evaluation = evaluate(&y_true, &y_score, &options).unwrap();
        let metrics = evaluation.metrics;

        assert_eq!(evaluation.confusion.ravel(), [5, 2, 1, 2]);
        assert_abs_diff_eq!(metrics.acc, 0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(metrics.sens, 2.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(metrics.spec, 5.0 / 7.0, epsilon = 1e-12);
        assert_abs_diff_eq!(metrics.bal_acc.unwrap(), 0.6904761904761905, epsilon = 1e-12);
        assert_abs_diff_eq!(metrics.youden.unwrap(), 0.38095238095238093, epsilon = 1e-12);
        assert_abs_diff_eq!(metrics.auroc.unwrap(), 0.8571428571428571, epsilon = 1e-12);
        assert_abs_diff_eq!(metrics.bal_err_rate.unwrap(), 0.30952380952380953, epsilon = 1e-12);
    }

    #[test]
    fn test_sklearn_parity_balanced_accuracy_single_class() {
        // balanced_accuracy_score([0, 0, 0, 0], [0, 1, 0, 1]) = 0.5
        // (recall of the absent class is dropped with a warning)
        let y_true = vec![0, 0, 0, 0];
        let y_score = vec![0.1, 0.9, 0.3, 0.8];
        let options = PerformanceOptions::default().with_metrics(MetricSet::all());
        let metrics = performance(&y_true, &y_score, &options).unwrap();

        assert_abs_diff_eq!(metrics.bal_acc.unwrap(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(metrics.bal_err_rate.unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_sklearn_parity_auroc_independent_of_threshold() {
        let y_true = vec![0, 0, 1, 1, 0, 1, 0, 1];
        let y_score = vec![0.1, 0.35, 0.35, 0.8, 0.6, 0.6, 0.2, 0.9];

        for threshold in [-1.0, 0.0, 0.3, 0.5, 0.85, 2.0] {
            let options = PerformanceOptions::default()
                .with_threshold(threshold)
                .with_metrics(MetricSet::all());
            let metrics = performance(&y_true, &y_score, &options).unwrap();
            assert_abs_diff_eq!(metrics.auroc.unwrap(), 0.875, epsilon = 1e-12);
        }
    }
}
