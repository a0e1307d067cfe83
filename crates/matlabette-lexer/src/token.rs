//! Token definitions for matlabette.

use matlabette_common::Span;
use serde::Serialize;
use std::fmt;

/// Names reserved for builtin commands.
pub const BUILTINS: &[&str] = &["who", "clear", "exit", "help"];

/// A token: its kind, the exact source text it was read from, and where.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// The end-of-line sentinel at byte offset `pos`.
    pub fn end_of_line(pos: usize) -> Self {
        Self::new(TokenKind::EndOfLine, "", Span::point(pos))
    }
}

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    EndOfLine,
    LeftSquareBracket,  // [
    RightSquareBracket, // ]
    SemiColon,          // ;
    Comma,              // ,
    IntegerLiteral,
    FloatLiteral,
    SubtractOperator, // -
    AssignOperator,   // =
    VariableName,
    BuiltinName,
}

impl TokenKind {
    /// Returns true for integer and float literals.
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::IntegerLiteral | TokenKind::FloatLiteral)
    }

    /// Returns true for tokens that can name a variable or builtin.
    pub fn is_identifier(self) -> bool {
        matches!(self, TokenKind::VariableName | TokenKind::BuiltinName)
    }

    /// Classify an identifier as a builtin or a variable name.
    pub fn identifier_from_str(s: &str) -> TokenKind {
        if BUILTINS.contains(&s) {
            TokenKind::BuiltinName
        } else {
            TokenKind::VariableName
        }
    }

    /// The upper-case name of this kind, e.g. `RIGHT_SQUARE_BRACKET`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::EndOfLine => "END_OF_LINE",
            TokenKind::LeftSquareBracket => "LEFT_SQUARE_BRACKET",
            TokenKind::RightSquareBracket => "RIGHT_SQUARE_BRACKET",
            TokenKind::SemiColon => "SEMI_COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::IntegerLiteral => "INTEGER_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::SubtractOperator => "SUBTRACT_OPERATOR",
            TokenKind::AssignOperator => "ASSIGN_OPERATOR",
            TokenKind::VariableName => "VARIABLE_NAME",
            TokenKind::BuiltinName => "BUILTIN_NAME",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::EndOfLine => "end of line",
            TokenKind::LeftSquareBracket => "`[`",
            TokenKind::RightSquareBracket => "`]`",
            TokenKind::SemiColon => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::IntegerLiteral => "integer literal",
            TokenKind::FloatLiteral => "float literal",
            TokenKind::SubtractOperator => "`-`",
            TokenKind::AssignOperator => "`=`",
            TokenKind::VariableName => "variable name",
            TokenKind::BuiltinName => "builtin name",
        };
        f.write_str(s)
    }
}
