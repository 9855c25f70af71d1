//! Mapping server positions to line and column

use tracing::debug;

/// Find the line number and in-line column of a 1-based character
/// position in `text`.
///
/// Characters are decoded code points, not bytes. The line is 1-based. The
/// column counts characters from the start of the line up to and including
/// the one at `position`, so the first character of a line is column 1.
///
/// A position that is never reached (0, or past the end) points just past
/// the final character. Empty text yields `(1, 0)`.
pub fn find_line_and_pos(text: &str, position: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 0;
    let mut seen = 0;

    for ch in text.chars() {
        seen += 1;
        if seen == position {
            return (line, column + 1);
        }
        if ch == '\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
    }

    if !within_text(position, seen) {
        debug!(position, "error position is outside of the query text");
    }
    if text.is_empty() {
        (line, column)
    } else {
        (line, column + 1)
    }
}

/// Whether a 1-based position points at one of `length` characters or just
/// past the last one, where the server points for "end of input".
fn within_text(position: usize, length: usize) -> bool {
    position >= 1 && position <= length + 1
}

/// Build the caret-annotated excerpt: every line up to the one holding
/// `position`, then a line pointing at the column followed by `message`.
pub fn annotate(text: &str, message: &str, position: usize) -> String {
    let (line, column) = find_line_and_pos(text, position);

    let mut excerpt = String::with_capacity(text.len() + column + message.len() + 2);
    for source_line in text.split_terminator('\n').take(line) {
        excerpt.push_str(source_line);
        excerpt.push('\n');
    }
    excerpt.push_str(&" ".repeat(column.saturating_sub(1)));
    excerpt.push_str("^ ");
    excerpt.push_str(message);
    excerpt
}
