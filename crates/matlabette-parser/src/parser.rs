//! The matlabette parser.

use matlabette_common::Span;
use matlabette_lexer::{Token, TokenKind};
use matlabette_syntax::{ANS, Expr, Matrix, ParseTree};

use crate::{ParserOptions, SyntaxError};

/// The matlabette parser.
///
/// Owns the tokens of one line and a cursor into them. The cursor only moves
/// forward, so a parser is consumed by [`Parser::parse`]; parse another line
/// with a fresh parser.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    options: ParserOptions,
    /// Returned by `current_token` once the cursor passes the last token
    eol: Token,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_options(tokens, ParserOptions::default())
    }

    pub fn with_options(tokens: Vec<Token>, options: ParserOptions) -> Self {
        let end = tokens.last().map_or(0, |t| t.span.end);
        Self {
            tokens,
            pos: 0,
            options,
            eol: Token::end_of_line(end),
        }
    }

    /// Parse the line.
    pub fn parse(mut self) -> Result<ParseTree, SyntaxError> {
        log::trace!("parse: {} token(s)", self.tokens.len());

        if self.matches(TokenKind::EndOfLine) {
            return Ok(ParseTree::Empty);
        }

        let tree = match self.statement()? {
            Some(tree) => tree,
            None => ParseTree::assign(ANS, self.expression()?),
        };
        self.expect(TokenKind::EndOfLine)?;

        log::debug!("parsed `{tree}`");
        Ok(tree)
    }

    // ========== Grammar ==========

    /// `IDENT` or `IDENT '=' expression`. Returns `None` without consuming
    /// anything when the line does not start with an identifier.
    fn statement(&mut self) -> Result<Option<ParseTree>, SyntaxError> {
        if !self.current_token().kind.is_identifier() {
            return Ok(None);
        }
        log::trace!("statement at {}", self.pos);

        let name = self.current_token().text.clone();
        self.advance();

        match self.current_token().kind {
            TokenKind::EndOfLine => Ok(Some(ParseTree::Show(name))),
            TokenKind::AssignOperator => {
                self.advance();
                let value = self.expression()?;
                Ok(Some(ParseTree::assign(name, value)))
            }
            _ => Err(self.unexpected(TokenKind::AssignOperator)),
        }
    }

    fn expression(&mut self) -> Result<Expr, SyntaxError> {
        match self.atom(0)? {
            Some(value) => Ok(Expr::Scalar(value)),
            None => self.array_expression().map(Expr::Array),
        }
    }

    fn array_expression(&mut self) -> Result<Matrix, SyntaxError> {
        if !self.matches(TokenKind::LeftSquareBracket) {
            return Err(self.unexpected(TokenKind::LeftSquareBracket));
        }
        log::trace!("array at {}", self.pos);
        self.advance();

        let matrix = self.array_list()?;
        self.expect(TokenKind::RightSquareBracket)?;
        Ok(matrix)
    }

    /// Rows separated by `;`. A `;` before the first row or before `]` adds
    /// no row; the loop ends at the first empty row.
    fn array_list(&mut self) -> Result<Matrix, SyntaxError> {
        let mut matrix = Matrix::new();

        loop {
            if self.matches(TokenKind::SemiColon) {
                self.advance();
            }

            let row_start = self.current_token().span;
            let row = self.atom_list()?;
            if row.is_empty() {
                break;
            }

            if let Err(ragged) = matrix.push_row(row) {
                let token = self.current_token();
                return Err(SyntaxError::RowLengthMismatch {
                    found: token.text.clone(),
                    row: ragged.index,
                    expected: ragged.expected,
                    actual: ragged.actual,
                    span: row_start.merge(self.previous_span()),
                });
            }
        }

        Ok(matrix)
    }

    /// Atoms separated by an optional `,`.
    fn atom_list(&mut self) -> Result<Vec<f64>, SyntaxError> {
        let mut atoms = Vec::new();

        loop {
            if self.matches(TokenKind::Comma) {
                self.advance();
            }
            match self.atom(0)? {
                Some(value) => atoms.push(value),
                None => break,
            }
        }

        Ok(atoms)
    }

    /// A numeric literal, or `-` followed by an atom. `Ok(None)` means the
    /// current token cannot start an atom.
    fn atom(&mut self, depth: usize) -> Result<Option<f64>, SyntaxError> {
        let token = self.current_token();

        match token.kind {
            TokenKind::IntegerLiteral | TokenKind::FloatLiteral => {
                let value = token
                    .text
                    .parse::<f64>()
                    .map_err(|_| SyntaxError::InvalidNumber {
                        found: token.text.clone(),
                        span: token.span,
                    })?;
                self.advance();
                Ok(Some(value))
            }
            TokenKind::SubtractOperator => {
                if depth >= self.options.max_negation_depth {
                    return Err(SyntaxError::NegationTooDeep {
                        found: token.text.clone(),
                        limit: self.options.max_negation_depth,
                        span: token.span,
                    });
                }
                self.advance();

                match self.atom(depth + 1)? {
                    Some(value) => Ok(Some(-value)),
                    None => {
                        let token = self.current_token();
                        Err(SyntaxError::ExpectedNumber {
                            found: token.text.clone(),
                            span: token.span,
                        })
                    }
                }
            }
            _ => Ok(None),
        }
    }

    // ========== Token Helpers ==========

    /// The token under the cursor.
    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eol)
    }

    /// Index of the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether the current token is of `kind`.
    pub fn matches(&self, kind: TokenKind) -> bool {
        self.current_token().kind == kind
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Consume a token of `kind` or fail without moving.
    pub fn expect(&mut self, kind: TokenKind) -> Result<(), SyntaxError> {
        if self.matches(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(kind))
        }
    }

    fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.span,
            None => Span::DUMMY,
        }
    }

    fn unexpected(&self, expected: TokenKind) -> SyntaxError {
        let token = self.current_token();
        SyntaxError::UnexpectedToken {
            found: token.text.clone(),
            expected,
            span: token.span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    /// Build tokens by kind and text, laying them out one space apart.
    fn tokens(items: &[(TokenKind, &str)]) -> Vec<Token> {
        let mut pos = 0;
        let mut out = Vec::new();
        for &(kind, text) in items {
            out.push(Token::new(kind, text, Span::from_usize(pos, pos + text.len())));
            pos += text.len() + 1;
        }
        out.push(Token::end_of_line(pos));
        out
    }

    use TokenKind::*;

    #[test]
    fn test_blank_line() {
        let tree = Parser::new(tokens(&[])).parse().unwrap();
        assert_eq!(tree, ParseTree::Empty);
    }

    #[test]
    fn test_assign_negative_scalar() {
        let toks = tokens(&[
            (VariableName, "x"),
            (AssignOperator, "="),
            (SubtractOperator, "-"),
            (IntegerLiteral, "5"),
        ]);
        let tree = Parser::new(toks).parse().unwrap();
        assert_eq!(tree, ParseTree::assign("x", Expr::Scalar(-5.0)));
    }

    #[test]
    fn test_show_builtin_name() {
        let tree = Parser::new(tokens(&[(BuiltinName, "who")])).parse().unwrap();
        assert_eq!(tree, ParseTree::show("who"));
    }

    #[test]
    fn test_assign_builtin_name() {
        let toks = tokens(&[
            (BuiltinName, "who"),
            (AssignOperator, "="),
            (IntegerLiteral, "3"),
        ]);
        let tree = Parser::new(toks).parse().unwrap();
        assert_eq!(tree, ParseTree::assign("who", Expr::Scalar(3.0)));
    }

    #[test]
    fn test_overflowing_literal_is_infinite() {
        let tree = Parser::new(tokens(&[(FloatLiteral, "1e400")])).parse().unwrap();
        assert_eq!(tree, ParseTree::assign(ANS, Expr::Scalar(f64::INFINITY)));

        let toks = tokens(&[(SubtractOperator, "-"), (FloatLiteral, "1e400")]);
        let tree = Parser::new(toks).parse().unwrap();
        assert_eq!(tree, ParseTree::assign(ANS, Expr::Scalar(f64::NEG_INFINITY)));
    }

    #[test]
    fn test_double_negation() {
        let toks = tokens(&[
            (SubtractOperator, "-"),
            (SubtractOperator, "-"),
            (FloatLiteral, "2.5"),
        ]);
        let tree = Parser::new(toks).parse().unwrap();
        assert_eq!(tree, ParseTree::assign(ANS, Expr::Scalar(2.5)));
    }

    #[test]
    fn test_trailing_minus_is_rejected() {
        let toks = tokens(&[(VariableName, "x"), (AssignOperator, "="), (SubtractOperator, "-")]);
        let err = Parser::new(toks).parse().unwrap_err();
        assert!(matches!(err, SyntaxError::ExpectedNumber { .. }));
        assert_eq!(err.found(), "");
    }

    #[test]
    fn test_row_length_mismatch_span_covers_row() {
        // [1; 2 3]
        let toks = tokens(&[
            (LeftSquareBracket, "["),
            (IntegerLiteral, "1"),
            (SemiColon, ";"),
            (IntegerLiteral, "2"),
            (IntegerLiteral, "3"),
            (RightSquareBracket, "]"),
        ]);
        let err = Parser::new(toks).parse().unwrap_err();
        assert_eq!(
            err,
            SyntaxError::RowLengthMismatch {
                found: "]".to_string(),
                row: 1,
                expected: 1,
                actual: 2,
                span: Span::from_usize(6, 9),
            }
        );
    }

    #[test]
    fn test_missing_sentinel_reads_as_end_of_line() {
        let toks = vec![Token::new(IntegerLiteral, "7", Span::from_usize(0, 1))];
        let tree = Parser::new(toks).parse().unwrap();
        assert_eq!(tree, ParseTree::assign(ANS, Expr::Scalar(7.0)));

        let tree = Parser::new(Vec::new()).parse().unwrap();
        assert_eq!(tree, ParseTree::Empty);
    }

    #[test]
    fn test_negation_depth_limit() {
        let toks = tokens(&[
            (SubtractOperator, "-"),
            (SubtractOperator, "-"),
            (SubtractOperator, "-"),
            (IntegerLiteral, "1"),
        ]);
        let options = ParserOptions::new().max_negation_depth(2);
        let err = Parser::with_options(toks.clone(), options).parse().unwrap_err();
        assert_eq!(
            err,
            SyntaxError::NegationTooDeep {
                found: "-".to_string(),
                limit: 2,
                span: Span::from_usize(4, 5),
            }
        );

        let options = ParserOptions::new().max_negation_depth(3);
        let tree = Parser::with_options(toks, options).parse().unwrap();
        assert_eq!(tree, ParseTree::assign(ANS, Expr::Scalar(-1.0)));
    }

    #[test]
    fn test_invalid_literal_text() {
        let toks = tokens(&[(IntegerLiteral, "12abc")]);
        let err = Parser::new(toks).parse().unwrap_err();
        assert!(matches!(err, SyntaxError::InvalidNumber { ref found, .. } if found == "12abc"));
    }

    #[test]
    fn test_cursor_helpers() {
        let mut parser = Parser::new(tokens(&[(VariableName, "x"), (AssignOperator, "=")]));
        assert_eq!(parser.position(), 0);
        assert!(parser.matches(VariableName));
        assert!(parser.expect(AssignOperator).is_err());
        assert_eq!(parser.position(), 0);
        parser.advance();
        assert!(parser.expect(AssignOperator).is_ok());
        assert_eq!(parser.current_token().kind, EndOfLine);
    }
}
