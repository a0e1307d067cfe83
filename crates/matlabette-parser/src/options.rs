//! Parser configuration.

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of `-` signs that may prefix one number.
    pub max_negation_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_negation_depth: 256,
        }
    }
}

impl ParserOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of chained unary minus signs.
    pub fn max_negation_depth(mut self, depth: usize) -> Self {
        self.max_negation_depth = depth;
        self
    }
}
