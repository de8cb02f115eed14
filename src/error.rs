//! Error types for multi-agent-spec.
//!
//! Invariant violations are not errors on their own: the validator collects
//! them into a report, and only `ValidationReport::into_result` folds them
//! into [`SpecError::ValidationError`]. Unmapped identifiers never error.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for multi-agent-spec operations.
#[derive(Error, Debug)]
pub enum SpecError {
    /// Bad arguments or a file that could not be read.
    #[error("{0}")]
    UserError(String),

    /// A payload could not be decoded into the expected structural type.
    #[error("Shape error: {0}")]
    ShapeError(String),

    /// One or more invariant violations, already formatted for display.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// The validator configuration is invalid.
    #[error("Config error: {0}")]
    ConfigError(String),
}

impl SpecError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SpecError::UserError(_) => exit_codes::USER_ERROR,
            SpecError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            SpecError::ShapeError(_) => exit_codes::SHAPE_ERROR,
            SpecError::ConfigError(_) => exit_codes::CONFIG_ERROR,
        }
    }

    pub(crate) fn shape(what: &str, err: impl std::fmt::Display) -> Self {
        SpecError::ShapeError(format!("failed to decode {}: {}", what, err))
    }
}

/// Result type alias for multi-agent-spec operations.
pub type Result<T> = std::result::Result<T, SpecError>;
