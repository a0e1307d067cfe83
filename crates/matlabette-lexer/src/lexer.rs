//! The matlabette lexer.
//! matlabette 词法分析器。

use crate::token::{Token, TokenKind};
use logos::Logos;
use matlabette_common::Span;
use matlabette_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};

/// Raw lexemes recognized by logos before they are mapped onto `TokenKind`.
/// 由 logos 识别的原始词素，随后映射为 `TokenKind`。
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\f]+|%[^\n]*")]
enum RawToken {
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("-")]
    Minus,
    #[token("=")]
    Eq,
    #[token("\n")]
    Newline,

    #[regex(r"[0-9]+")]
    Int,
    #[regex(r"([0-9]+\.[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+")]
    Float,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
}

/// The matlabette lexer.
/// matlabette 词法分析器。
///
/// Converts one line of source into a sequence of tokens terminated by
/// `EndOfLine`. Input after the first newline is ignored.
/// 将一行源码转换为以 `EndOfLine` 结尾的 token 序列，第一个换行之后的输入被忽略。
pub struct Lexer<'src> {
    source: &'src str,
    /// Collected diagnostics / 收集的诊断信息
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given line.
    /// 为给定的输入行创建新的词法分析器。
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the line and return tokens and diagnostics.
    /// 对输入行进行词法分析，返回 token 列表和诊断信息。
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        let mut raw = RawToken::lexer(self.source);
        let mut end = self.source.len();

        while let Some(result) = raw.next() {
            let range = raw.span();
            let span = Span::from(range.clone());
            let text = raw.slice();

            let kind = match result {
                Ok(RawToken::Newline) => {
                    end = range.start;
                    break;
                }
                Ok(RawToken::LBracket) => TokenKind::LeftSquareBracket,
                Ok(RawToken::RBracket) => TokenKind::RightSquareBracket,
                Ok(RawToken::Semicolon) => TokenKind::SemiColon,
                Ok(RawToken::Comma) => TokenKind::Comma,
                Ok(RawToken::Minus) => TokenKind::SubtractOperator,
                Ok(RawToken::Eq) => TokenKind::AssignOperator,
                Ok(RawToken::Int) => TokenKind::IntegerLiteral,
                Ok(RawToken::Float) => TokenKind::FloatLiteral,
                Ok(RawToken::Ident) => TokenKind::identifier_from_str(text),
                Err(()) => {
                    self.error_unexpected_char(text, span);
                    continue;
                }
            };

            tokens.push(Token::new(kind, text, span));
        }

        tokens.push(Token::end_of_line(end));
        log::trace!("lexed {} token(s)", tokens.len());

        (tokens, self.diagnostics)
    }

    fn error_unexpected_char(&mut self, text: &str, span: Span) {
        self.diagnostics.push(
            Diagnostic::error(
                DiagnosticKind::Lexer,
                span,
                format!("unexpected character `{}`", text.escape_debug()),
            )
            .with_code(ErrorCode::UnexpectedCharacter)
            .with_label(Label::new(span, "not valid here")),
        );
    }
}
