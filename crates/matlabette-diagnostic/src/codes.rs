//! Error codes for matlabette diagnostics.

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexer errors (E0001 - E0099)
    UnexpectedCharacter,

    // Parser errors (E0100 - E0199)
    UnexpectedToken,
    ExpectedNumber,
    UnclosedBracket,
    RowLengthMismatch,
    TrailingInput,
    NegationTooDeep,
    InvalidNumber,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::UnexpectedCharacter => "E0001",

            ErrorCode::UnexpectedToken => "E0100",
            ErrorCode::ExpectedNumber => "E0101",
            ErrorCode::UnclosedBracket => "E0102",
            ErrorCode::RowLengthMismatch => "E0103",
            ErrorCode::TrailingInput => "E0104",
            ErrorCode::NegationTooDeep => "E0105",
            ErrorCode::InvalidNumber => "E0106",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::UnclosedBracket => Some("add a closing `]`"),
            ErrorCode::RowLengthMismatch => {
                Some("every row separated by `;` must have the same number of elements")
            }
            ErrorCode::TrailingInput => Some("only one statement is allowed per line"),
            _ => None,
        }
    }
}
