//! Builder methods for creating errors with context

use super::types::Error;
use std::path::PathBuf;

impl Error {
    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::InvalidInput {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a parameter store error
    #[must_use]
    pub fn parameter_store(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Error::ParameterStore {
            operation: operation.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a parameter store error with a source error
    #[must_use]
    pub fn parameter_store_with_source(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::ParameterStore {
            operation: operation.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error came from the remote parameter store
    #[must_use]
    pub fn is_parameter_store(&self) -> bool {
        matches!(self, Error::ParameterStore { .. })
    }
}
