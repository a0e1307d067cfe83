//! The parse tree produced for one line of input.

use crate::Matrix;
use serde::Serialize;
use std::fmt;

/// Name that a bare expression is bound to.
pub const ANS: &str = "ans";

/// The root of a parsed line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ParseTree {
    /// A blank line.
    Empty,
    /// A bare identifier: display this variable.
    Show(String),
    /// `target = value`. A bare expression is an assignment to [`ANS`].
    Assign { target: String, value: Expr },
}

impl ParseTree {
    pub fn assign(target: impl Into<String>, value: Expr) -> Self {
        ParseTree::Assign {
            target: target.into(),
            value,
        }
    }

    pub fn show(name: impl Into<String>) -> Self {
        ParseTree::Show(name.into())
    }

    /// The variable this line names, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            ParseTree::Empty => None,
            ParseTree::Show(name) => Some(name.as_str()),
            ParseTree::Assign { target, .. } => Some(target.as_str()),
        }
    }

    /// The assigned expression, if this is an assignment.
    pub fn value(&self) -> Option<&Expr> {
        match self {
            ParseTree::Assign { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ParseTree::Empty)
    }
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseTree::Empty => Ok(()),
            ParseTree::Show(name) => f.write_str(name),
            ParseTree::Assign { target, value } => write!(f, "{target} = {value}"),
        }
    }
}

/// The right-hand side of an assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Scalar(f64),
    Array(Matrix),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Scalar(value) => write!(f, "{value}"),
            Expr::Array(matrix) => write!(f, "{matrix}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forms() {
        assert_eq!(ParseTree::Empty.to_string(), "");
        assert_eq!(ParseTree::show("y").to_string(), "y");
        assert_eq!(
            ParseTree::assign("x", Expr::Scalar(-5.0)).to_string(),
            "x = -5"
        );
    }

    #[test]
    fn test_json_form() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        let tree = ParseTree::assign(ANS, Expr::Array(m));
        assert_eq!(
            serde_json::to_string(&tree).unwrap(),
            r#"{"Assign":{"target":"ans","value":{"Array":[[1.0,2.0]]}}}"#
        );
        assert_eq!(serde_json::to_string(&ParseTree::Empty).unwrap(), r#""Empty""#);
    }

    #[test]
    fn test_accessors() {
        let tree = ParseTree::assign("x", Expr::Scalar(1.0));
        assert_eq!(tree.target(), Some("x"));
        assert_eq!(tree.value(), Some(&Expr::Scalar(1.0)));
        assert!(ParseTree::Empty.is_empty());
        assert_eq!(ParseTree::Empty.target(), None);
    }
}
