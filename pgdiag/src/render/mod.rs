//! Human-readable reports for failed queries
//!
//! A report looks like this:
//!
//! ```text
//! QueryError!
//!
//!   Query:
//! SELECT * FROM nonexistent
//!               ^ relation "nonexistent" does not exist
//!
//!   Params: []
//!   Error: Server error 42P01: relation "nonexistent" does not exist
//! ```
//!
//! Only a server error carrying a position gets the caret excerpt; every
//! other failure shows the query text verbatim.

mod locate;

pub use locate::{annotate, find_line_and_pos};

use crate::config::RenderOptions;
use crate::taxonomy::{lossy, CommandError, QueryError};

/// Render a query error with default options.
pub fn render(error: &QueryError) -> String {
    render_with(error, &RenderOptions::default())
}

/// Render a query error.
pub fn render_with(error: &QueryError, options: &RenderOptions) -> String {
    let sql = lossy(&error.sql);
    let pretty_query = match query_context(&error.cause) {
        Some((message, position)) if options.annotate_position => {
            annotate(&sql, &lossy(message), position)
        }
        _ => sql.into_owned(),
    };

    let mut report = String::from("QueryError!\n\n  Query:\n");
    report.push_str(&pretty_query);
    report.push('\n');
    if options.show_params {
        report.push_str(&format!("\n  Params: {:?}", error.params));
    }
    report.push_str("\n  Error: ");
    report.push_str(&error.cause.to_string());
    report
}

/// Render the failure of a pipelined batch.
pub fn render_pipeline(error: &CommandError) -> String {
    format!("PipelineError!\n\n  Error: {}", error)
}

/// Server message and position to point at, if the failure has one.
fn query_context(cause: &CommandError) -> Option<(&[u8], usize)> {
    let server = cause.server_error()?;
    let position = server.position?;
    Some((server.message.as_slice(), usize::try_from(position).unwrap_or(usize::MAX)))
}
