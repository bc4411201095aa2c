//! Unit tests for spec validation

use super::error::ValidationError;
use super::validator::validate_spec;
use crate::config::schema::EvalSpec;
use crate::eval::Metric;
use tempfile::NamedTempFile;

fn create_valid_spec(data: &NamedTempFile) -> EvalSpec {
    let mut spec = EvalSpec::new(data.path());
    spec.metrics = vec![Metric::Auroc, Metric::Youden];
    spec
}

#[test]
fn test_valid_spec() {
    let data = NamedTempFile::new().unwrap();
    let spec = create_valid_spec(&data);
    assert!(validate_spec(&spec).is_ok());
}

#[test]
fn test_missing_data_path() {
    let spec = EvalSpec::new("/nonexistent/scores.json");
    let err = validate_spec(&spec).unwrap_err();
    assert!(matches!(err, ValidationError::DataNotFound(_)));
    assert!(err.to_string().contains("scores.json"));
}

#[test]
fn test_nan_threshold() {
    let data = NamedTempFile::new().unwrap();
    let mut spec = create_valid_spec(&data);
    spec.threshold = f64::NAN;
    let err = validate_spec(&spec).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidThreshold(_)));
}

#[test]
fn test_infinite_threshold_is_allowed() {
    let data = NamedTempFile::new().unwrap();
    let mut spec = create_valid_spec(&data);
    spec.threshold = f64::INFINITY;
    assert!(validate_spec(&spec).is_ok());
}

#[test]
fn test_identical_labels() {
    let data = NamedTempFile::new().unwrap();
    let mut spec = create_valid_spec(&data);
    spec.labels = [3, 3];
    let err = validate_spec(&spec).unwrap_err();
    assert!(matches!(err, ValidationError::IdenticalLabels(3)));
}

#[test]
fn test_duplicate_metric() {
    let data = NamedTempFile::new().unwrap();
    let mut spec = create_valid_spec(&data);
    spec.metrics.push(Metric::Auroc);
    let err = validate_spec(&spec).unwrap_err();
    assert!(matches!(err, ValidationError::DuplicateMetric(ref m) if m == "auroc"));
}
