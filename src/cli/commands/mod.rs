//! CLI command implementations

mod eval;
mod validate;

pub use eval::{eval_output, evaluate_spec, render_evaluation};

use crate::cli::LogLevel;
use crate::config::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Eval(args) => eval::run_eval(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
    }
}
