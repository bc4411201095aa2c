//! Loading of evaluation specs and scored data

use super::schema::{EvalSpec, ScoredData};
use super::validate::validate_spec;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Parse `content` as JSON for `.json` files and as YAML otherwise
fn parse_document<T: DeserializeOwned>(path: &Path, content: &str) -> std::result::Result<T, String> {
    if is_json(path) {
        serde_json::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }
}

/// Read an evaluation spec without validating it
///
/// A relative `data` path is resolved against the directory holding the spec.
/// Callers applying overrides validate the final spec themselves.
pub fn read_spec<P: AsRef<Path>>(spec_path: P) -> Result<EvalSpec> {
    let path = spec_path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!(
            "Failed to read config file {}: {}",
            path.display(),
            e
        ))
    })?;

    let mut spec: EvalSpec = parse_document(path, &content).map_err(|e| {
        Error::ConfigError(format!("Failed to parse config {}: {e}", path.display()))
    })?;

    if spec.data.is_relative() {
        if let Some(dir) = path.parent() {
            spec.data = dir.join(&spec.data);
        }
    }

    Ok(spec)
}

/// Check a spec, mapping validation failures into [`Error::ConfigError`]
pub fn check_spec(spec: &EvalSpec) -> Result<()> {
    validate_spec(spec).map_err(|e| Error::ConfigError(format!("Invalid config: {e}")))
}

/// Read and validate an evaluation spec
pub fn load_spec<P: AsRef<Path>>(spec_path: P) -> Result<EvalSpec> {
    let spec = read_spec(spec_path)?;
    check_spec(&spec)?;
    Ok(spec)
}

/// Load ground truth and scores from a JSON or YAML file
pub fn load_data<P: AsRef<Path>>(data_path: P) -> Result<ScoredData> {
    let path = data_path.as_ref();
    if !path.exists() {
        return Err(Error::DataNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("reading data file {}", path.display()), e))?;

    parse_document(path, &content).map_err(|message| Error::Serialization {
        message: format!("{}: {message}", path.display()),
    })
}
