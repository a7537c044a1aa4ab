//! Error types for audioforge-av.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during audio processing.
///
/// Display strings double as the `error` field of the structured
/// results, so they are phrased for the calling application.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The conversion source file was not found.
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The inspected file was not found.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an input not found error.
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}
