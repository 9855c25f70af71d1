//! Errors reported by the server

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::lossy;

/// An error returned by the server in an `ErrorResponse` message.
///
/// Fields hold the raw bytes received on the wire. Nothing is validated:
/// whoever builds the value is trusted to have parsed it faithfully.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error(
    "Server error {}: {}{}{}",
    lossy(.code),
    lossy(.message),
    labelled_line("Details", .details),
    labelled_line("Hint", .hint)
)]
pub struct ServerError {
    /// Five-character SQLSTATE code
    pub code: Vec<u8>,
    /// Primary human-readable message
    pub message: Vec<u8>,
    /// Optional secondary message carrying more detail
    pub details: Option<Vec<u8>>,
    /// Optional suggestion on what to do about the problem
    pub hint: Option<Vec<u8>>,
    /// 1-based character offset into the query text
    pub position: Option<u32>,
}

fn labelled_line(label: &str, value: &Option<Vec<u8>>) -> String {
    match value {
        Some(value) => format!("\n  {}: {}", label, lossy(value)),
        None => String::new(),
    }
}

impl ServerError {
    /// Create a server error with only a code and a message.
    pub fn new(code: impl Into<Vec<u8>>, message: impl Into<Vec<u8>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            hint: None,
            position: None,
        }
    }

    /// Set the detail message.
    pub fn with_details(mut self, details: impl Into<Vec<u8>>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Set the hint.
    pub fn with_hint(mut self, hint: impl Into<Vec<u8>>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Set the 1-based character position of the error in the query text.
    pub fn with_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    /// SQLSTATE class: the first two bytes of the code.
    pub fn class(&self) -> &[u8] {
        &self.code[..self.code.len().min(2)]
    }

    /// SQLSTATE code as text.
    pub fn code_str(&self) -> Cow<'_, str> {
        lossy(&self.code)
    }

    /// Primary message as text.
    pub fn message_str(&self) -> Cow<'_, str> {
        lossy(&self.message)
    }

    /// Detail message as text, if present.
    pub fn details_str(&self) -> Option<Cow<'_, str>> {
        self.details.as_deref().map(lossy)
    }

    /// Hint as text, if present.
    pub fn hint_str(&self) -> Option<Cow<'_, str>> {
        self.hint.as_deref().map(lossy)
    }
}
