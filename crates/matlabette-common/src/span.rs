//! Byte ranges within one input line.
//! 输入行中的字节区间。

use std::fmt;
use std::ops::Range;

/// A half-open byte range `start..end` in the input line.
/// 输入行中的半开字节区间 `start..end`。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// The empty range at offset 0, for tokens with no source position.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} is after end {end}");
        Span { start, end }
    }

    /// Zero-width span at `pos`, used for the end-of-line sentinel.
    /// 位于 `pos` 的零宽范围，用于行尾哨兵 token。
    pub fn point(pos: usize) -> Self {
        Span {
            start: pos,
            end: pos,
        }
    }

    /// Smallest span covering both `self` and `other`.
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::from_usize(range.start, range.end)
    }
}
