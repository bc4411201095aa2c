//! CLI argument types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::EvalSpec;
use crate::eval::Metric;

/// binperf: binary classification performance at a cut-point
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "binperf")]
#[command(version)]
#[command(
    about = "Accuracy, sensitivity, specificity, Youden's J and AUROC for scored binary predictions"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Evaluate scored predictions described by a spec file
    Eval(EvalArgs),

    /// Validate a spec file without evaluating
    Validate(ValidateArgs),
}

/// Arguments for the eval command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct EvalArgs {
    /// Path to YAML or JSON spec file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override the scored data file
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Override the cut-point
    #[arg(short, long, allow_hyphen_values = true)]
    pub threshold: Option<f64>,

    /// Request an optional metric (repeatable): bal_acc, youden, auroc, err_rate, bal_err_rate
    #[arg(short, long = "metric", value_name = "METRIC")]
    pub metrics: Vec<Metric>,

    /// Request every optional metric
    #[arg(long)]
    pub all_metrics: bool,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML or JSON spec file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Parse command line arguments (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to an EvalSpec
pub fn apply_overrides(spec: &mut EvalSpec, args: &EvalArgs) {
    if let Some(data) = &args.data {
        spec.data = data.clone();
    }
    if let Some(threshold) = args.threshold {
        spec.threshold = threshold;
    }
    if args.all_metrics {
        spec.metrics = Metric::ALL.to_vec();
    } else {
        for metric in &args.metrics {
            if !spec.metrics.contains(metric) {
                spec.metrics.push(*metric);
            }
        }
    }
}
