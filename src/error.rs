//! # Error Types
//!
//! Every failure the simulator can report. Configuration and file-format
//! problems surface before the first generation runs; platform problems are
//! fatal and end the run.

use thiserror::Error;

/// Main error type for simulator operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid run configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Backend selector that names no known backend
    #[error("Unknown backend '{0}' (expected sequential, parallel-cpu or gpu)")]
    UnknownBackend(String),

    /// Malformed grid file
    #[error("Grid format error on line {line}: {message}")]
    Format { line: usize, message: String },

    /// Cell buffer does not match the grid dimensions
    #[error("Dimension mismatch: expected {expected} cells, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// No usable thread pool or compute device
    #[error("Platform error: {0}")]
    Platform(String),

    /// Reading results back from the compute device failed
    #[error("Device error: {0}")]
    Device(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a format error
    pub fn format(line: usize, msg: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: msg.into(),
        }
    }

    /// Create a platform error
    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform(msg.into())
    }
}
