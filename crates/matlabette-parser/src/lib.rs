//! Parser for matlabette.
//!
//! This crate provides a recursive descent parser that turns the tokens of
//! one input line into a [`ParseTree`].
//!
//! ## Grammar
//!
//! ```text
//! line        : EOL
//!             | statement EOL
//!             | expression EOL          (bound to `ans`)
//! statement   : IDENT
//!             | IDENT '=' expression
//! expression  : atom
//!             | array
//! array       : '[' array_list ']'
//! array_list  : (';'? atom_list)*       (rows must have equal length)
//! atom_list   : (','? atom)*
//! atom        : INTEGER | FLOAT
//!             | '-' atom
//! ```
//!
//! There is no error recovery: the first [`SyntaxError`] ends the parse.

mod error;
mod options;
mod parser;

pub use error::SyntaxError;
pub use options::ParserOptions;
pub use parser::Parser;

use matlabette_diagnostic::Diagnostic;
use matlabette_lexer::Lexer;
use matlabette_syntax::ParseTree;

/// Lex and parse one line of source.
pub fn parse(source: &str) -> Result<ParseTree, Vec<Diagnostic>> {
    parse_with_options(source, ParserOptions::default())
}

/// Lex and parse one line of source with custom parser options.
///
/// Lexer diagnostics abort before parsing; otherwise the single parse error,
/// if any, is returned as a diagnostic.
pub fn parse_with_options(
    source: &str,
    options: ParserOptions,
) -> Result<ParseTree, Vec<Diagnostic>> {
    let (tokens, diagnostics) = Lexer::new(source).tokenize();
    if !diagnostics.is_empty() {
        return Err(diagnostics);
    }

    Parser::with_options(tokens, options)
        .parse()
        .map_err(|err| vec![err.to_diagnostic()])
}
