//! binperf CLI
//!
//! # Usage
//!
//! ```bash
//! # Evaluate scored predictions
//! binperf eval spec.yaml
//!
//! # Override threshold and request extra metrics
//! binperf eval spec.yaml --threshold 0.3 --metric auroc --metric youden
//!
//! # JSON output
//! binperf eval spec.yaml --all-metrics --format json
//!
//! # Validate spec and data
//! binperf validate spec.yaml
//! ```

use binperf::cli::{run_command, Cli};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
