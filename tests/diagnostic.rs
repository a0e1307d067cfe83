//! Integration tests for matlabette-diagnostic crate.

use matlabette_common::Span;
use matlabette_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label, render};

#[test]
fn test_error_codes_are_unique() {
    let codes = [
        ErrorCode::UnexpectedCharacter,
        ErrorCode::UnexpectedToken,
        ErrorCode::ExpectedNumber,
        ErrorCode::UnclosedBracket,
        ErrorCode::RowLengthMismatch,
        ErrorCode::TrailingInput,
        ErrorCode::NegationTooDeep,
        ErrorCode::InvalidNumber,
    ];
    let mut seen: Vec<_> = codes.iter().map(|c| c.as_str()).collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), codes.len());
}

#[test]
fn test_with_code_takes_suggestion_as_help() {
    let diag = Diagnostic::error(DiagnosticKind::Parser, Span::point(4), "expected `]`")
        .with_code(ErrorCode::UnclosedBracket);
    assert_eq!(diag.code, Some(ErrorCode::UnclosedBracket));
    assert_eq!(diag.help.as_deref(), Some("add a closing `]`"));

    let diag = Diagnostic::error(DiagnosticKind::Parser, Span::point(0), "expected `=`")
        .with_code(ErrorCode::UnexpectedToken);
    assert_eq!(diag.help, None);
}

#[test]
fn test_render_contains_message_code_label_and_help() {
    let source = "x = [1 2";
    let diag = Diagnostic::error(
        DiagnosticKind::Parser,
        Span::from_usize(4, 8),
        "expected `]`, got end of line",
    )
    .with_code(ErrorCode::UnclosedBracket)
    .with_label(Label::new(Span::from_usize(4, 8), "this array is never closed"));

    let text = render(source, "<input>", &diag);
    assert!(text.contains("E0102"), "{text}");
    assert!(text.contains("expected `]`, got end of line"), "{text}");
    assert!(text.contains("this array is never closed"), "{text}");
    assert!(text.contains("add a closing `]`"), "{text}");
}
