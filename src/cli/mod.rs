//! CLI module for binperf
//!
//! This module contains all CLI command handlers and utilities.

mod commands;
mod logging;

pub use commands::{eval_output, evaluate_spec, render_evaluation, run_command};
pub use logging::{log, LogLevel};

// Re-export Cli from config for convenience
pub use crate::config::Cli;
