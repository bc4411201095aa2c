//! Eval command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{apply_overrides, check_spec, load_data, read_spec, EvalArgs, OutputFormat};
use crate::error::{Error, Result};
use crate::eval::{evaluate, performance_report, BinaryEvaluation};

/// Load the spec and data named by `args` and evaluate them
///
/// Command-line overrides are applied before the spec is validated, so
/// `--data` may replace a `data` entry that does not exist.
pub fn evaluate_spec(args: &EvalArgs, level: LogLevel) -> Result<BinaryEvaluation> {
    let mut spec = read_spec(&args.config)?;
    apply_overrides(&mut spec, args);
    check_spec(&spec)?;

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  Data: {}\n  Threshold: {}\n  Labels: {:?}",
            spec.data.display(),
            spec.threshold,
            spec.labels
        ),
    );

    let data = load_data(&spec.data)?;
    log(
        level,
        LogLevel::Verbose,
        &format!("  Samples: {}", data.y_true.len()),
    );

    evaluate(&data.y_true, &data.y_score, &spec.options())
}

/// Render an evaluation in the requested output format
pub fn render_evaluation(evaluation: &BinaryEvaluation, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(performance_report(evaluation)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(evaluation).map_err(|e| Error::Serialization {
                message: e.to_string(),
            })
        }
        OutputFormat::Yaml => serde_yaml::to_string(evaluation).map_err(|e| Error::Serialization {
            message: e.to_string(),
        }),
    }
}

/// Evaluate and render the command output
///
/// Progress lines are only logged for text output; JSON and YAML output is
/// the bare document.
pub fn eval_output(args: &EvalArgs, level: LogLevel) -> Result<String> {
    let progress = match args.format {
        OutputFormat::Text => level,
        OutputFormat::Json | OutputFormat::Yaml => LogLevel::Quiet,
    };
    log(
        progress,
        LogLevel::Normal,
        &format!("Evaluating: {}", args.config.display()),
    );

    let evaluation = evaluate_spec(args, progress)?;
    render_evaluation(&evaluation, args.format)
}

pub fn run_eval(args: EvalArgs, level: LogLevel) -> std::result::Result<(), String> {
    let rendered = eval_output(&args, level).map_err(|e| e.to_string())?;

    // Machine-readable output is the command's result and ignores --quiet
    match args.format {
        OutputFormat::Text => log(level, LogLevel::Normal, &rendered),
        OutputFormat::Json | OutputFormat::Yaml => println!("{rendered}"),
    }

    Ok(())
}
