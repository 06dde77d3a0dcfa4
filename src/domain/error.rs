use std::io;

use thiserror::Error;

use crate::domain::snapshot::ParseError;

/// Library-wide error type for baseline operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Tool identifier is invalid.
    #[error(
        "Invalid tool identifier '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidToolId(String),

    /// Tool not found in catalog.
    #[error("Tool '{id}' not found in catalog. Available: {available}")]
    ToolNotFound { id: String, available: String },

    /// Selection already contains a tool with this id.
    #[error("Tool '{0}' is selected more than once")]
    DuplicateTool(String),

    /// Invalid catalog metadata.
    #[error("Invalid catalog entry in '{source_file}': {reason}")]
    InvalidCatalog { source_file: String, reason: String },

    /// Selection file could not be decoded.
    #[error("Invalid selection file '{path}': {details}")]
    InvalidSelection { path: String, details: String },

    /// Snapshot text could not be parsed.
    #[error(transparent)]
    Snapshot(#[from] ParseError),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
