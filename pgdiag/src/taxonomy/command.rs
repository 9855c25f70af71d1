//! Command-level failures

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{lossy, ResultError, ServerError};

/// Failure of a single command sent to the server.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandError {
    /// Transport or driver failure, e.g. a lost connection
    #[error("{}", client_reason(.0))]
    ClientError(Option<Vec<u8>>),

    /// Failure classified from a received result
    #[error(transparent)]
    ResultError(#[from] ResultError),
}

fn client_reason(message: &Option<Vec<u8>>) -> String {
    match message {
        Some(message) => format!("Client error: {:?}", lossy(message)),
        None => "Client error without details".to_string(),
    }
}

impl CommandError {
    /// Client error carrying a driver message.
    pub fn client(message: impl Into<Vec<u8>>) -> Self {
        CommandError::ClientError(Some(message.into()))
    }

    /// Client error without any message.
    pub fn client_without_details() -> Self {
        CommandError::ClientError(None)
    }

    /// Whether the failure may go away by reconnecting and retrying.
    ///
    /// Only client errors qualify; everything classified from a result is
    /// deterministic for the same query and schema.
    pub fn is_transient(&self) -> bool {
        matches!(self, CommandError::ClientError(_))
    }

    /// The server error, if the command failed with one.
    pub fn server_error(&self) -> Option<&ServerError> {
        match self {
            CommandError::ClientError(_) => None,
            CommandError::ResultError(err) => err.server_error(),
        }
    }
}

impl From<ServerError> for CommandError {
    fn from(err: ServerError) -> Self {
        CommandError::ResultError(err.into())
    }
}
