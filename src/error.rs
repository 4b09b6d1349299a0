//! Error types for the emotion recognition library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// A required facial landmark index was absent from the input set
    #[error("Landmark error: {0}")]
    Landmark(String),

    /// Baseline calibration could not produce a baseline
    #[error("Calibration error: {0}")]
    Calibration(String),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
