//! Integration tests for matlabette-common crate.

use matlabette_common::Span;

#[test]
fn test_span_merge() {
    let merged = Span::from_usize(10, 20).merge(Span::from_usize(15, 30));
    assert_eq!(merged, Span::from_usize(10, 30));

    let disjoint = Span::from_usize(6, 7).merge(Span::from_usize(0, 1));
    assert_eq!(disjoint.range(), 0..7);
}

#[test]
fn test_span_point_is_zero_width() {
    assert_eq!(Span::point(7).range(), 7..7);
    assert_eq!(Span::DUMMY, Span::point(0));
}

#[test]
fn test_span_from_range() {
    assert_eq!(Span::from(5..15), Span::from_usize(5, 15));
    assert_eq!(format!("{:?}", Span::from(5..15)), "5..15");
}
