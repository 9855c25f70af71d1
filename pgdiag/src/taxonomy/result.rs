//! Failures classified from a received result

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{RowError, ServerError};

/// Failure detected while interpreting the result of a command.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultError {
    /// The server answered with an error
    #[error(transparent)]
    ServerError(#[from] ServerError),

    /// The result shape did not match what the statement expects
    #[error("Unexpected result: {0}")]
    UnexpectedResult(String),

    /// Decoding one cell failed; `row` and `column` are 0-based
    #[error("Error in row {row}, column {column}: {cause:?}")]
    RowError {
        row: usize,
        column: usize,
        #[source]
        cause: RowError,
    },

    /// The statement expected a different number of rows
    #[error("Unexpected amount of rows: {0}")]
    UnexpectedAmountOfRows(usize),
}

impl ResultError {
    /// The server error, if this result carried one.
    pub fn server_error(&self) -> Option<&ServerError> {
        match self {
            ResultError::ServerError(err) => Some(err),
            _ => None,
        }
    }
}
