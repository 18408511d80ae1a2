//! Error types for logging-configuration loading and validation.

use std::path::PathBuf;
use thiserror::Error;
use validator::ValidationErrors;

/// Errors surfaced while loading a [`LoggingConfig`](crate::LoggingConfig).
///
/// Only configuration loading can fail in this workspace; the logging
/// operations themselves are infallible by contract.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist.
    #[error("logging configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// The loaded configuration failed validation.
    #[error("invalid logging configuration:\n{}", summarize(.0))]
    Validation(#[source] ValidationErrors),

    /// Figment could not parse or merge the configuration sources.
    #[error("logging configuration parsing error: {0}")]
    Parsing(#[from] figment::Error),
}

impl From<ValidationErrors> for ConfigError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

fn summarize(errors: &ValidationErrors) -> String {
    use std::fmt::Write;

    let mut output = String::new();
    for (field, errors) in errors.field_errors() {
        for error in errors {
            let message = match &error.message {
                Some(msg) => msg.to_string(),
                None => error.code.to_string(),
            };
            let _ = writeln!(output, "  {field}: {message}");
        }
    }
    output
}
