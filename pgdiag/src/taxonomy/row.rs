//! Per-cell decoding failures

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure while decoding a single cell of a result row.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowError {
    /// Attempted to read past the last column of the row
    #[error("end of input")]
    EndOfInput,

    /// A non-nullable decoder received NULL
    #[error("unexpected null")]
    UnexpectedNull,

    /// The decoder rejected the raw value
    #[error("value error: {0}")]
    ValueError(String),
}
