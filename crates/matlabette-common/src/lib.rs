//! Common data structures for matlabette.
//! matlabette 的公共数据结构。
//!
//! `Span` locates tokens and errors inside a single input line.

mod span;

pub use span::Span;
