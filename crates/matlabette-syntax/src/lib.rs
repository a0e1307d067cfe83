//! Parse tree definitions for matlabette.
//!
//! A parsed line is a [`ParseTree`]: blank, a request to show a variable,
//! or an assignment of an [`Expr`] to a name.

mod matrix;
mod tree;

pub use matrix::{Matrix, RaggedRow};
pub use tree::{ANS, Expr, ParseTree};
