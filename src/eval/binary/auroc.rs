//! Area under the ROC curve from raw scores

use std::cmp::Ordering;

/// Rank-based AUROC (Mann-Whitney U normalised by `P * N`)
///
/// Tied scores share their average rank, which makes the result equal to
/// the trapezoidal area under the ROC curve. Samples equal to `positive`
/// form the positive class, everything else the negative class.
///
/// Returns NaN when either class is empty. Scores must not be NaN.
pub fn roc_auc<L: PartialEq>(y_true: &[L], y_score: &[f64], positive: &L) -> f64 {
    let mut items: Vec<(f64, bool)> = y_score
        .iter()
        .copied()
        .zip(y_true.iter().map(|label| label == positive))
        .collect();
    let n = items.len();
    let n_pos = items.iter().filter(|(_, is_pos)| *is_pos).count();
    let n_neg = n - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return f64::NAN;
    }

    items.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let mut rank_sum_pos = 0.0;
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && items[j].0 == items[i].0 {
            j += 1;
        }
        // 1-based ranks i+1..=j share their mean
        let avg_rank = (i + 1 + j) as f64 / 2.0;
        let tied_pos = items[i..j].iter().filter(|(_, is_pos)| *is_pos).count();
        rank_sum_pos += avg_rank * tied_pos as f64;
        i = j;
    }

    let p = n_pos as f64;
    let q = n_neg as f64;
    (rank_sum_pos - p * (p + 1.0) / 2.0) / (p * q)
}
