//! Spec validation
//!
//! Validates evaluation specs for correctness before execution.

mod error;
mod validator;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;

pub use error::ValidationError;
pub use validator::validate_spec;
