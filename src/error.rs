//! Error types for hrrlearn.

use thiserror::Error;

/// hrrlearn error types.
#[derive(Error, Debug)]
pub enum LearnError {
    /// Vector lengths disagree in a dot product or trace update.
    ///
    /// This is a programming-contract violation, not a recoverable
    /// runtime condition.
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Configuration rejected before any episode runs.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// I/O failure while reading a configuration file.
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Value-report serialization error.
    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}

/// Result type alias for hrrlearn operations.
pub type Result<T> = std::result::Result<T, LearnError>;
