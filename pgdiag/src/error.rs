//! Error types for pgdiag's own fallible operations

use thiserror::Error;

use crate::wire::WireError;

/// Result type alias for pgdiag operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while decoding server messages or loading configuration
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed ErrorResponse body
    #[error("Malformed error response: {0}")]
    Wire(#[from] WireError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}
