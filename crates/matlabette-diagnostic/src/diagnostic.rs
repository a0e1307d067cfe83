//! Diagnostics produced while lexing or parsing a line.

use crate::ErrorCode;
use matlabette_common::Span;

/// Which phase produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Lexer,
    Parser,
}

/// A message attached to part of the line.
#[derive(Debug, Clone)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// An error in one input line. Every diagnostic aborts the line, so there
/// is no severity: all of them are errors.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub code: Option<ErrorCode>,
    pub message: String,
    pub span: Span,
    pub labels: Vec<Label>,
    /// Suggested fix, taken from the error code.
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(kind: DiagnosticKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: None,
            message: message.into(),
            span,
            labels: Vec::new(),
            help: None,
        }
    }

    /// Attach an error code and its suggestion, if it has one.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self.help = code.suggestion().map(str::to_owned);
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }
}
