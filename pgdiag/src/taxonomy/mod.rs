//! Error taxonomy for failed PostgreSQL commands

mod command;
mod query;
mod result;
mod row;
mod server;

pub use command::CommandError;
pub use query::{QueryError, SessionError};
pub use result::ResultError;
pub use row::RowError;
pub use server::ServerError;

/// Decode bytes for display, replacing invalid UTF-8 sequences.
pub(crate) fn lossy(bytes: &[u8]) -> std::borrow::Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
