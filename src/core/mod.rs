use std::{
    fmt, io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

use crate::config::{ConfigType, ValidationError};

/// Error types for the aiofarm configuration library.
///
/// Covers every failure that can occur while validating, loading, saving,
/// backing up or restoring the machine configuration.
#[derive(Error, Debug)]
pub enum AiofarmError {
    /// A field is out of range, has the wrong type, or the payload does not
    /// match the `config_type` discriminator.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The configuration is valid but describes a different machine role
    #[error("expected a '{expected}' configuration, found '{found}'")]
    RoleMismatch {
        /// Role the caller required
        expected: ConfigType,
        /// Role found in the document
        found: ConfigType,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error (for compatibility)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Document is not JSON, or its top-level shape is wrong
    #[error("malformed configuration data at '{location}': {details}")]
    MalformedData {
        /// Location of the data being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },
}

/// A specialized `Result` type for aiofarm operations.
pub type Result<T> = result::Result<T, AiofarmError>;

impl AiofarmError {
    /// Creates a malformed-data error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn malformed(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => p.to_string_lossy().to_string(),
            None => "string".to_string(),
        };

        AiofarmError::MalformedData {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an I/O error with file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying I/O error
    /// * `path` - Path to the file the operation was acting on
    pub fn io(error: impl fmt::Display, path: &Path) -> Self {
        AiofarmError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}
