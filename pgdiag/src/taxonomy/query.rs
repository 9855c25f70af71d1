//! Query and session level failures

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{CommandError, ServerError};
use crate::render;

/// A failed statement together with the context needed to explain it.
///
/// `Display` renders the full multi-line report, see [`render::render`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryError {
    /// Statement text exactly as sent to the server
    pub sql: Vec<u8>,
    /// Bound parameters rendered as literals, in binding order
    pub params: Vec<String>,
    /// What went wrong
    pub cause: CommandError,
}

impl QueryError {
    /// Create a query error, rendering each parameter with `Display`.
    pub fn new<I>(sql: impl Into<Vec<u8>>, params: I, cause: impl Into<CommandError>) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        Self {
            sql: sql.into(),
            params: params.into_iter().map(|p| p.to_string()).collect(),
            cause: cause.into(),
        }
    }

    /// See [`CommandError::is_transient`].
    pub fn is_transient(&self) -> bool {
        self.cause.is_transient()
    }

    /// The server error, if the command failed with one.
    pub fn server_error(&self) -> Option<&ServerError> {
        self.cause.server_error()
    }

    /// Render the report. Same as `to_string()`.
    pub fn render(&self) -> String {
        render::render(self)
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render(self))
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

/// Errors surfaced by a database session.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionError {
    /// A single statement failed
    #[error("{}", render::render(.0))]
    QueryError(#[from] QueryError),

    /// A pipelined batch failed with no single statement to blame
    #[error("{}", render::render_pipeline(.0))]
    PipelineError(#[source] CommandError),
}

impl SessionError {
    /// The command failure behind either variant.
    pub fn command_error(&self) -> &CommandError {
        match self {
            SessionError::QueryError(err) => &err.cause,
            SessionError::PipelineError(err) => err,
        }
    }

    /// See [`CommandError::is_transient`].
    pub fn is_transient(&self) -> bool {
        self.command_error().is_transient()
    }

    /// Render the report. Same as `to_string()`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}
