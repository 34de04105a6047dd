//! Error types for Bodyline

use thiserror::Error;

/// Core Bodyline errors
#[derive(Error, Debug)]
pub enum BodylineError {
    // Session log errors
    #[error("Session log I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed session record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Recording has not been started")]
    RecordingNotStarted,

    // Model errors
    #[error("Joint index out of range: {0}")]
    JointOutOfRange(usize),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for Bodyline operations
pub type BodylineResult<T> = Result<T, BodylineError>;
