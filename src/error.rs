//! Error types with actionable diagnostics.
//!
//! Every variant carries enough context to locate the offending input
//! without re-running the computation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for binperf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while evaluating a binary classifier.
#[derive(Error, Debug)]
pub enum Error {
    /// Label and score vectors are not positionally aligned.
    #[error("Length mismatch: {labels} labels vs {scores} scores\n  → Every score needs exactly one ground-truth label")]
    LengthMismatch { labels: usize, scores: usize },

    /// True and predicted label vectors differ in length.
    #[error("Length mismatch: {truth} true labels vs {predicted} predicted labels\n  → Predict exactly one label per ground-truth sample")]
    PredictionLengthMismatch { truth: usize, predicted: usize },

    /// A ground-truth label is neither the negative nor the positive value.
    #[error("Unknown label {label} at index {index}\n  → Ground truth may only contain the two configured label values")]
    UnknownLabel { index: usize, label: String },

    /// The negative and positive label values are the same.
    #[error("Negative and positive labels are identical ({label})\n  → Configure two distinct label values")]
    IdenticalLabels { label: String },

    /// A score is NaN and cannot be thresholded or ranked.
    #[error("Score at index {index} is NaN\n  → Drop or impute missing scores before evaluation")]
    NanScore { index: usize },

    /// Threshold is NaN.
    #[error("Invalid threshold: {0}\n  → Use a finite cut-point such as 0.5")]
    InvalidThreshold(f64),

    /// Configuration could not be read, parsed or validated.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Data file not found.
    #[error("Data file not found: {path}\n  → Check the `data` entry of the config or pass --data")]
    DataNotFound { path: PathBuf },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
