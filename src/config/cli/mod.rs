//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! binperf eval spec.yaml
//! binperf eval spec.yaml --threshold 0.3 --metric auroc --format json
//! binperf validate spec.yaml
//! ```

mod args;
mod types;

pub use args::{apply_overrides, parse_args, Cli, Command, EvalArgs, ValidateArgs};
pub use types::OutputFormat;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvalSpec;
    use crate::eval::Metric;
    use std::path::PathBuf;

    #[test]
    fn test_parse_eval_command() {
        let cli = parse_args(["binperf", "eval", "spec.yaml"]).unwrap();
        match cli.command {
            Command::Eval(args) => {
                assert_eq!(args.config, PathBuf::from("spec.yaml"));
                assert_eq!(args.threshold, None);
                assert!(args.metrics.is_empty());
                assert_eq!(args.format, OutputFormat::Text);
            }
            _ => panic!("Expected Eval command"),
        }
    }

    #[test]
    fn test_parse_eval_with_overrides() {
        let cli = parse_args([
            "binperf",
            "eval",
            "spec.yaml",
            "--threshold",
            "-0.25",
            "--metric",
            "auroc",
            "-m",
            "youden",
            "--format",
            "json",
            "--data",
            "other.json",
        ])
        .unwrap();

        match cli.command {
            Command::Eval(args) => {
                assert_eq!(args.threshold, Some(-0.25));
                assert_eq!(args.metrics, vec![Metric::Auroc, Metric::Youden]);
                assert_eq!(args.format, OutputFormat::Json);
                assert_eq!(args.data, Some(PathBuf::from("other.json")));
            }
            _ => panic!("Expected Eval command"),
        }
    }

    #[test]
    fn test_parse_unknown_metric_fails() {
        assert!(parse_args(["binperf", "eval", "spec.yaml", "--metric", "f1"]).is_err());
    }

    #[test]
    fn test_parse_validate_with_global_flags() {
        let cli = parse_args(["binperf", "validate", "spec.yaml", "--quiet"]).unwrap();
        assert!(cli.quiet);
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Command::Validate(_)));
    }

    #[test]
    fn test_apply_overrides() {
        let cli = parse_args([
            "binperf",
            "eval",
            "spec.yaml",
            "-t",
            "0.7",
            "-m",
            "auroc",
            "-m",
            "err_rate",
        ])
        .unwrap();
        let Command::Eval(args) = cli.command else {
            panic!("Expected Eval command");
        };

        let mut spec = EvalSpec::new("scores.json");
        spec.metrics = vec![Metric::Auroc];
        apply_overrides(&mut spec, &args);

        assert_eq!(spec.threshold, 0.7);
        assert_eq!(spec.metrics, vec![Metric::Auroc, Metric::ErrorRate]);
        assert_eq!(spec.data, PathBuf::from("scores.json"));
    }

    #[test]
    fn test_apply_all_metrics() {
        let cli = parse_args(["binperf", "eval", "spec.yaml", "--all-metrics"]).unwrap();
        let Command::Eval(args) = cli.command else {
            panic!("Expected Eval command");
        };

        let mut spec = EvalSpec::new("scores.json");
        apply_overrides(&mut spec, &args);
        assert_eq!(spec.metrics, Metric::ALL.to_vec());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
