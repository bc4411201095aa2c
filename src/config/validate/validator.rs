//! Spec validation logic
//!
//! Validates evaluation specs before any data is read.

use super::error::ValidationError;
use crate::config::schema::EvalSpec;
use std::collections::HashSet;

/// Validate an evaluation specification
///
/// Checks:
/// - The data path exists
/// - The threshold is a number
/// - The two labels differ
/// - No metric is listed twice
pub fn validate_spec(spec: &EvalSpec) -> Result<(), ValidationError> {
    if !spec.data.exists() {
        return Err(ValidationError::DataNotFound(
            spec.data.display().to_string(),
        ));
    }

    if spec.threshold.is_nan() {
        return Err(ValidationError::InvalidThreshold(spec.threshold));
    }

    let [negative, positive] = spec.labels;
    if negative == positive {
        return Err(ValidationError::IdenticalLabels(negative));
    }

    let mut seen = HashSet::new();
    for metric in &spec.metrics {
        if !seen.insert(*metric) {
            return Err(ValidationError::DuplicateMetric(metric.key().to_string()));
        }
    }

    Ok(())
}
