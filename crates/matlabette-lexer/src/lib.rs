//! Lexical analysis for matlabette.
//! matlabette 词法分析模块。
//!
//! This crate turns one line of input into the token stream consumed by
//! the parser. The stream always ends with a single `EndOfLine` token.
//! 本 crate 将一行输入转换为解析器使用的 token 序列，序列总以 `EndOfLine` 结尾。

mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{BUILTINS, Token, TokenKind};
