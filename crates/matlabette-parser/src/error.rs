//! Syntax errors raised by the parser.

use matlabette_common::Span;
use matlabette_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use matlabette_lexer::TokenKind;
use thiserror::Error;

/// The first error met while parsing a line. Parsing stops there.
///
/// `found` is always the verbatim text of the token the parser was looking
/// at; it is empty for the end-of-line sentinel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    #[error("expected {expected}, got {}", shown(.found))]
    UnexpectedToken {
        found: String,
        expected: TokenKind,
        span: Span,
    },

    #[error("row length mismatch: expected {expected} elements, got {actual}")]
    RowLengthMismatch {
        found: String,
        row: usize,
        expected: usize,
        actual: usize,
        span: Span,
    },

    #[error("expected a number after `-`, got {}", shown(.found))]
    ExpectedNumber { found: String, span: Span },

    #[error("invalid number literal `{found}`")]
    InvalidNumber { found: String, span: Span },

    #[error("more than {limit} nested `-` signs")]
    NegationTooDeep {
        found: String,
        limit: usize,
        span: Span,
    },
}

fn shown(text: &str) -> String {
    if text.is_empty() {
        "end of line".to_string()
    } else {
        format!("`{text}`")
    }
}

impl SyntaxError {
    /// Text of the token the parser stopped at.
    pub fn found(&self) -> &str {
        match self {
            SyntaxError::UnexpectedToken { found, .. }
            | SyntaxError::RowLengthMismatch { found, .. }
            | SyntaxError::ExpectedNumber { found, .. }
            | SyntaxError::InvalidNumber { found, .. }
            | SyntaxError::NegationTooDeep { found, .. } => found,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            SyntaxError::UnexpectedToken { span, .. }
            | SyntaxError::RowLengthMismatch { span, .. }
            | SyntaxError::ExpectedNumber { span, .. }
            | SyntaxError::InvalidNumber { span, .. }
            | SyntaxError::NegationTooDeep { span, .. } => *span,
        }
    }

    /// The token kind the parser wanted, for expectation mismatches.
    pub fn expected_kind(&self) -> Option<TokenKind> {
        match self {
            SyntaxError::UnexpectedToken { expected, .. } => Some(*expected),
            _ => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SyntaxError::UnexpectedToken { expected, .. } => match expected {
                TokenKind::RightSquareBracket => ErrorCode::UnclosedBracket,
                TokenKind::EndOfLine => ErrorCode::TrailingInput,
                _ => ErrorCode::UnexpectedToken,
            },
            SyntaxError::RowLengthMismatch { .. } => ErrorCode::RowLengthMismatch,
            SyntaxError::ExpectedNumber { .. } => ErrorCode::ExpectedNumber,
            SyntaxError::InvalidNumber { .. } => ErrorCode::InvalidNumber,
            SyntaxError::NegationTooDeep { .. } => ErrorCode::NegationTooDeep,
        }
    }

    /// Convert into a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let span = self.span();
        let label = match self {
            SyntaxError::UnexpectedToken { expected, .. } => format!("expected {expected} here"),
            SyntaxError::RowLengthMismatch { actual, .. } => {
                format!("this row has {actual} element(s)")
            }
            _ => "here".to_string(),
        };

        Diagnostic::error(DiagnosticKind::Parser, span, self.to_string())
            .with_code(self.code())
            .with_label(Label::new(span, label))
    }
}
