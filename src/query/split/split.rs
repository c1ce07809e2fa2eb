use crate::math::{Point, Real};
use alloc::vec::Vec;

/// One piece of a decomposed line: at least two points, all within the same grid cell
/// except for the first and last ones, which may lie on the cell's boundary.
pub type Split = Vec<Point<Real>>;

/// Concatenates consecutive splits into a single point sequence.
///
/// The boundary point shared by two consecutive splits is kept once, so joining
/// the output of [`decompose`](crate::query::decompose) yields the original points
/// with every grid crossing inserted at its place.
pub fn join_splits(splits: &[Split]) -> Vec<Point<Real>> {
    let mut points: Vec<Point<Real>> = Vec::with_capacity(splits.iter().map(Vec::len).sum());

    for split in splits {
        let shared = !points.is_empty() && points.last() == split.first();
        points.extend_from_slice(if shared { &split[1..] } else { &split[..] });
    }

    points
}
