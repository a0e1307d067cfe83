//! Rectangular arrays of numbers.

use serde::Serialize;
use std::fmt;

/// A row whose length does not match the rows before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaggedRow {
    /// Index of the offending row.
    pub index: usize,
    /// Length of the rows already accepted.
    pub expected: usize,
    /// Length of the offending row.
    pub actual: usize,
}

/// An ordered sequence of equal-length rows.
///
/// Every constructor checks rectangularity, so a `Matrix` is never jagged.
/// `[]` is the 0x0 matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a matrix from rows, rejecting the first row whose length differs
    /// from the first row's.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, RaggedRow> {
        let mut matrix = Matrix::new();
        for row in rows {
            matrix.push_row(row)?;
        }
        Ok(matrix)
    }

    /// Append a row. Fails without modifying `self` if its length differs
    /// from the existing rows.
    pub fn push_row(&mut self, row: Vec<f64>) -> Result<(), RaggedRow> {
        if let Some(last) = self.rows.last() {
            if last.len() != row.len() {
                return Err(RaggedRow {
                    index: self.rows.len(),
                    expected: last.len(),
                    actual: row.len(),
                });
            }
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.rows.first().map_or(0, Vec::len))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
            }
        }
        f.write_str("]")
    }
}
