//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_data, load_spec, EvalSpec, ValidateArgs};
use crate::eval::evaluate;

/// Format a spec as an indented summary
pub fn format_spec_info(spec: &EvalSpec) -> String {
    let metrics = if spec.metrics.is_empty() {
        "(base only)".to_string()
    } else {
        spec.metrics
            .iter()
            .map(|m| m.key())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "  Data: {}\n  Threshold: {}\n  Labels: negative={} positive={}\n  Metrics: {}",
        spec.data.display(),
        spec.threshold,
        spec.labels[0],
        spec.labels[1],
        metrics
    )
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let spec = load_spec(&args.config).map_err(|e| e.to_string())?;
    let data = load_data(&spec.data).map_err(|e| e.to_string())?;
    // Same input checks as `eval`; the metrics themselves are discarded
    evaluate(&data.y_true, &data.y_score, &spec.options())
        .map_err(|e| format!("Validation failed for {}: {e}", spec.data.display()))?;

    log(level, LogLevel::Normal, "Configuration is valid");
    log(level, LogLevel::Verbose, &format_spec_info(&spec));

    Ok(())
}
