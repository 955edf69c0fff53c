// file: src/error.rs
// version: 1.0.0
// guid: 3f8a2b1c-9d4e-4f70-a215-6c8b0d3e7f91

//! Error types for safe-rsync

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, SafeRsyncError>;

/// Error types for the safe-rsync wrapper
#[derive(Error, Debug)]
pub enum SafeRsyncError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("rsync not found in PATH")]
    RsyncMissing,

    #[error("rsync >= {required} required, found {found}")]
    RsyncTooOld { required: String, found: String },

    #[error("Version detection error: {0}")]
    VersionError(String),

    #[error("Execution error: {0}")]
    ExecutionError(String),

    #[error("rsync exited with code {0}")]
    RsyncFailed(i32),

    #[error("Interrupted by user")]
    Interrupted,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl SafeRsyncError {
    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a new execution error
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::ExecutionError(msg.into())
    }

    /// Create a new version detection error
    pub fn version(msg: impl Into<String>) -> Self {
        Self::VersionError(msg.into())
    }

    /// Process exit code this error maps to. Validation and preflight
    /// failures exit with 1; a failed rsync run mirrors rsync's own code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::RsyncFailed(code) => *code,
            Self::Interrupted => 130,
            _ => 1,
        }
    }
}
