//! End-to-end rendering tests
//!
//! These build errors the way a driver would (decoding the server's
//! ErrorResponse where there is one) and check the full report text.

use pgdiag::{
    render_with, CommandError, QueryError, RenderOptions, ResultError, RowError, ServerError,
    SessionError,
};

fn error_response(fields: &[(u8, &str)]) -> Vec<u8> {
    let mut body = Vec::new();
    for (field, value) in fields {
        body.push(*field);
        body.extend_from_slice(value.as_bytes());
        body.push(0);
    }
    body.push(0);
    body
}

#[test]
fn test_missing_relation_report() -> anyhow::Result<()> {
    let server = ServerError::from_error_response(&error_response(&[
        (b'S', "ERROR"),
        (b'C', "42P01"),
        (b'M', "relation \"nonexistent\" does not exist"),
        (b'P', "15"),
    ]))?;
    let err = QueryError::new("SELECT * FROM nonexistent", Vec::<String>::new(), server);

    let expected = [
        "QueryError!",
        "",
        "  Query:",
        "SELECT * FROM nonexistent",
        "              ^ relation \"nonexistent\" does not exist",
        "",
        "  Params: []",
        "  Error: Server error 42P01: relation \"nonexistent\" does not exist",
    ]
    .join("\n");
    assert_eq!(err.to_string(), expected);
    Ok(())
}

#[test]
fn test_multi_line_query_with_details_and_hint() -> anyhow::Result<()> {
    let server = ServerError::from_error_response(&error_response(&[
        (b'C', "42703"),
        (b'M', "column \"nme\" does not exist"),
        (b'H', "Perhaps you meant to reference the column \"users.name\"."),
        (b'D', "checked users"),
        (b'P', "28"),
    ]))?;
    let err = QueryError::new(
        "SELECT id\nFROM users\nWHERE nme = $1\nLIMIT 1",
        ["'bob'"],
        server,
    );

    let expected = [
        "QueryError!",
        "",
        "  Query:",
        "SELECT id",
        "FROM users",
        "WHERE nme = $1",
        "      ^ column \"nme\" does not exist",
        "",
        "  Params: [\"'bob'\"]",
        "  Error: Server error 42703: column \"nme\" does not exist",
        "  Details: checked users",
        "  Hint: Perhaps you meant to reference the column \"users.name\".",
    ]
    .join("\n");
    assert_eq!(err.render(), expected);
    Ok(())
}

#[test]
fn test_position_after_multibyte_character() {
    let err = QueryError::new(
        "SELECT 'é' FROM x",
        ["1"],
        ServerError::new("42601", "syntax error at or near \"FROM\"").with_position(12),
    );
    assert!(err
        .to_string()
        .contains("SELECT 'é' FROM x\n           ^ syntax error at or near \"FROM\"\n"));
}

#[test]
fn test_position_past_end_of_query() {
    let err = QueryError::new(
        "SELECT 1 +",
        Vec::<String>::new(),
        ServerError::new("42601", "syntax error at end of input").with_position(11),
    );
    assert!(err
        .to_string()
        .contains("SELECT 1 +\n          ^ syntax error at end of input"));
}

#[test]
fn test_empty_query_with_position() {
    let err = QueryError::new(
        "",
        Vec::<String>::new(),
        ServerError::new("42601", "syntax error").with_position(1),
    );
    assert!(err.to_string().contains("  Query:\n^ syntax error\n"));
}

#[test]
fn test_invalid_utf8_in_query() {
    let err = QueryError::new(
        vec![b'S', 0xff, b'X'],
        Vec::<String>::new(),
        ServerError::new("22021", "invalid byte sequence").with_position(3),
    );
    assert!(err.to_string().contains("S\u{fffd}X\n  ^ invalid byte sequence"));
}

#[test]
fn test_client_error_reasons() {
    let without = QueryError::new(
        "SELECT 1",
        Vec::<String>::new(),
        CommandError::client_without_details(),
    );
    assert!(without
        .to_string()
        .ends_with("\n  Error: Client error without details"));
    assert!(without.is_transient());

    let with = QueryError::new(
        "SELECT 1",
        Vec::<String>::new(),
        CommandError::client("server closed the connection unexpectedly"),
    );
    assert!(with
        .to_string()
        .ends_with("\n  Error: Client error: \"server closed the connection unexpectedly\""));
}

#[test]
fn test_result_error_reasons() {
    let cases = [
        (
            ResultError::UnexpectedResult("expected 1 column, got 2".into()),
            "Unexpected result: expected 1 column, got 2",
        ),
        (
            ResultError::RowError {
                row: 2,
                column: 0,
                cause: RowError::UnexpectedNull,
            },
            "Error in row 2, column 0: UnexpectedNull",
        ),
        (
            ResultError::RowError {
                row: 0,
                column: 3,
                cause: RowError::EndOfInput,
            },
            "Error in row 0, column 3: EndOfInput",
        ),
        (
            ResultError::RowError {
                row: 5,
                column: 1,
                cause: RowError::ValueError("invalid uuid".into()),
            },
            "Error in row 5, column 1: ValueError(\"invalid uuid\")",
        ),
        (
            ResultError::UnexpectedAmountOfRows(7),
            "Unexpected amount of rows: 7",
        ),
    ];

    for (cause, reason) in cases {
        let err = QueryError::new("SELECT a FROM t", ["42"], cause);
        let report = err.to_string();
        assert!(
            report.starts_with("QueryError!\n\n  Query:\nSELECT a FROM t\n\n  Params: [\"42\"]\n"),
            "{report}"
        );
        assert!(report.ends_with(&format!("\n  Error: {reason}")), "{report}");
        assert!(!err.is_transient());
    }
}

#[test]
fn test_no_details_or_hint_lines_when_absent() {
    let err = QueryError::new(
        "SELECT 1",
        Vec::<String>::new(),
        ServerError::new("XX000", "internal error"),
    );
    let report = err.to_string();
    assert!(!report.contains("Details:"));
    assert!(!report.contains("Hint:"));
}

#[test]
fn test_render_options() -> anyhow::Result<()> {
    let options = RenderOptions::from_toml_str("show_params = false\nannotate_position = true")?;
    let err = QueryError::new(
        "SELECT x",
        ["secret"],
        ServerError::new("42703", "column \"x\" does not exist").with_position(8),
    );
    let report = render_with(&err, &options);
    assert!(!report.contains("secret"));
    assert!(report.contains("SELECT x\n       ^ column \"x\" does not exist\n\n  Error:"));
    Ok(())
}

#[test]
fn test_session_errors() {
    let query = QueryError::new(
        "SELECT 1",
        Vec::<String>::new(),
        ResultError::UnexpectedAmountOfRows(0),
    );
    let session = SessionError::from(query.clone());
    assert_eq!(session.to_string(), query.to_string());

    let pipeline = SessionError::PipelineError(CommandError::client_without_details());
    assert_eq!(
        pipeline.render(),
        "PipelineError!\n\n  Error: Client error without details"
    );
    assert!(pipeline.is_transient());
}
