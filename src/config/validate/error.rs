//! Validation error types
//!
//! Defines all validation error variants for evaluation specs.

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Data path does not exist: {0}")]
    DataNotFound(String),

    #[error("Invalid threshold: {0} (must not be NaN)")]
    InvalidThreshold(f64),

    #[error("Invalid labels: [{0}, {0}] (negative and positive labels must differ)")]
    IdenticalLabels(i64),

    #[error("Metric listed more than once: {0}")]
    DuplicateMetric(String),
}
