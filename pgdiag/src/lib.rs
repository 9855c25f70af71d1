//! pgdiag - PostgreSQL query diagnostics
//!
//! Error taxonomy for failed PostgreSQL commands, and a renderer that turns
//! those errors into human-readable reports.
//!
//! # Features
//!
//! - **Closed Taxonomy**: `CommandError`, `ResultError` and `RowError` cover
//!   every failure category a driver hands back
//! - **Caret Excerpts**: server error positions are mapped to line and column
//!   by character, not byte, and pointed at in the query text
//! - **Wire Decoding**: `ServerError::from_error_response` reads the fields of
//!   an `ErrorResponse` message
//! - **Retry Classification**: `is_transient()` separates connection failures
//!   from deterministic query failures
//!
//! # Example
//!
//! ```
//! use pgdiag::{QueryError, ServerError};
//!
//! let err = QueryError::new(
//!     "SELECT * FROM nonexistent",
//!     Vec::<String>::new(),
//!     ServerError::new("42P01", "relation \"nonexistent\" does not exist").with_position(15),
//! );
//!
//! assert!(err
//!     .to_string()
//!     .contains("              ^ relation \"nonexistent\" does not exist"));
//! ```

pub mod config;
pub mod error;
pub mod render;
mod taxonomy;
pub mod wire;

pub use crate::config::RenderOptions;
pub use error::{Error, Result};
pub use render::{render, render_pipeline, render_with};
pub use taxonomy::{CommandError, QueryError, ResultError, RowError, ServerError, SessionError};
pub use wire::WireError;
