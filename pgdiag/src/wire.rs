//! Decoding of `ErrorResponse` message bodies into [`ServerError`]

use thiserror::Error;
use tracing::trace;

use crate::taxonomy::ServerError;

/// Malformed `ErrorResponse` body
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("field {0:?} is not NUL-terminated")]
    UnterminatedField(char),

    #[error("required field {0:?} is missing")]
    MissingField(char),

    #[error("position {0:?} is not a valid character offset")]
    InvalidPosition(String),
}

impl ServerError {
    /// Decode the body of an `ErrorResponse` (or `NoticeResponse`) message.
    ///
    /// `body` is everything after the message type byte and the length: a
    /// list of fields, each a type byte followed by a NUL-terminated value,
    /// closed by a single NUL. Fields other than code, message, detail, hint
    /// and position are skipped.
    pub fn from_error_response(body: &[u8]) -> Result<Self, WireError> {
        let mut code = None;
        let mut message = None;
        let mut details = None;
        let mut hint = None;
        let mut position = None;

        let mut rest = body;
        while let Some((&field, tail)) = rest.split_first() {
            if field == 0 {
                break;
            }
            let end = tail
                .iter()
                .position(|&b| b == 0)
                .ok_or(WireError::UnterminatedField(char::from(field)))?;
            let value = &tail[..end];
            rest = &tail[end + 1..];

            match field {
                b'C' => code = Some(value.to_vec()),
                b'M' => message = Some(value.to_vec()),
                b'D' => details = Some(value.to_vec()),
                b'H' => hint = Some(value.to_vec()),
                b'P' => position = Some(parse_position(value)?),
                other => trace!(field = %char::from(other), "skipping error response field"),
            }
        }

        Ok(Self {
            code: code.ok_or(WireError::MissingField('C'))?,
            message: message.ok_or(WireError::MissingField('M'))?,
            details,
            hint,
            position,
        })
    }
}

fn parse_position(value: &[u8]) -> Result<u32, WireError> {
    std::str::from_utf8(value)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| WireError::InvalidPosition(String::from_utf8_lossy(value).into_owned()))
}
