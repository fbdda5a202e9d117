//! Error types for the engine

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur while building a cleaning history
///
/// Only construction can fail. Queries over a built history never return an
/// error: malformed query input is answered with a diagnostic string instead.
#[derive(Error, Debug)]
pub enum EngineError {
    /// An input file does not exist
    #[error("Input file not found: {}", .path.display())]
    NotFound {
        /// Path that could not be located
        path: PathBuf,
    },

    /// An input file exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Invalid report configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EngineError {
    /// Classify an I/O failure on `path`
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            EngineError::NotFound { path }
        } else {
            EngineError::Io { path, source }
        }
    }

    /// Whether this error is the resource-not-found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, EngineError::NotFound { .. })
    }
}
