//! Declarative evaluation configuration
//!
//! Specs are YAML (or JSON) files naming a scored-data file, the cut-point,
//! the two label values and the optional metrics to compute.

pub mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{apply_overrides, parse_args, Cli, Command, EvalArgs, OutputFormat, ValidateArgs};
pub use loader::{check_spec, load_data, load_spec, read_spec};
pub use schema::{EvalSpec, ScoredData};
pub use validate::{validate_spec, ValidationError};
