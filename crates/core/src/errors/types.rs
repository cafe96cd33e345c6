//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for ssmenv operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for ssmenv operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File system operations
    #[error("file system {operation} operation failed for '{}': {source}", path.display())]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Input that could not be decoded as an environment template
    #[error("invalid input file '{}': {message}", path.display())]
    InvalidInput { path: PathBuf, message: String },

    /// Parameter Store request failures (network, auth, throttling)
    #[error("parameter store {operation} failed: {message}")]
    ParameterStore {
        operation: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },
}
