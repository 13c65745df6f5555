//! Ping log error types.

use thiserror::Error;

/// Errors that can occur while reading or discovering ping logs.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("source not found: {0}")]
    NotFound(String),
}

impl LogError {
    /// Map an `std::io::Error` raised for `path` into the matching variant.
    pub fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path.display().to_string())
        } else {
            Self::Io(format!("{}: {err}", path.display()))
        }
    }
}

/// Convenience alias for ping log results.
pub type LogResult<T> = Result<T, LogError>;
