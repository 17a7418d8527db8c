//! Error types for the config-builder CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for config-builder operations.
///
/// Each variant maps to an exit code in [`exit_codes`].
#[derive(Error, Debug)]
pub enum ConfigBuilderError {
    /// Invalid command-line usage, detected before any file I/O.
    #[error("{0}")]
    Usage(String),

    /// Config file could not be read or failed validation.
    #[error("invalid config: {0}")]
    Config(String),

    /// No template file exists for the device.
    #[error("template not found for device '{device}': {}", .path.display())]
    TemplateNotFound { device: String, path: PathBuf },

    /// The template exists but failed to parse or render.
    #[error("invalid template for device '{device}': {message}")]
    InvalidTemplate { device: String, message: String },

    /// Directory listing, directory creation or a file write failed.
    #[error("{0}")]
    Filesystem(String),

    /// Some devices failed in a keep-going run.
    #[error("{failed} of {total} devices failed")]
    PartialFailure { failed: usize, total: usize, code: i32 },
}

impl ConfigBuilderError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigBuilderError::Usage(_) => exit_codes::USER_ERROR,
            ConfigBuilderError::Config(_) => exit_codes::USER_ERROR,
            ConfigBuilderError::TemplateNotFound { .. } => exit_codes::TEMPLATE_FAILURE,
            ConfigBuilderError::InvalidTemplate { .. } => exit_codes::TEMPLATE_FAILURE,
            ConfigBuilderError::Filesystem(_) => exit_codes::FILESYSTEM_FAILURE,
            ConfigBuilderError::PartialFailure { code, .. } => *code,
        }
    }
}

/// Result type alias for config-builder operations.
pub type Result<T> = std::result::Result<T, ConfigBuilderError>;
