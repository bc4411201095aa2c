//! Property-based tests for spec validation

use super::error::ValidationError;
use super::validator::validate_spec;
use crate::config::schema::EvalSpec;
use proptest::prelude::*;
use tempfile::NamedTempFile;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_distinct_labels_and_numeric_threshold_pass(
        threshold in -1e6f64..1e6,
        negative in any::<i64>(),
        offset in 1i64..1000,
    ) {
        let data = NamedTempFile::new().unwrap();
        let mut spec = EvalSpec::new(data.path());
        spec.threshold = threshold;
        spec.labels = [negative, negative.wrapping_add(offset)];
        prop_assert!(validate_spec(&spec).is_ok());
    }

    #[test]
    fn prop_equal_labels_fail(label in any::<i64>()) {
        let data = NamedTempFile::new().unwrap();
        let mut spec = EvalSpec::new(data.path());
        spec.labels = [label, label];
        prop_assert!(matches!(
            validate_spec(&spec),
            Err(ValidationError::IdenticalLabels(l)) if l == label
        ));
    }
}
