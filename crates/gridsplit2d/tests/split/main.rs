mod linestring_scenarios;
mod ring_seams;

use gridsplit2d::grid::Grid;
use gridsplit2d::math::{Point, Real};
use gridsplit2d::na;
use gridsplit2d::query::{join_splits, Split};
use gridsplit2d::shape::LineString;

pub fn pts(coords: &[(Real, Real)]) -> Vec<Point<Real>> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

pub fn assert_splits_eq(splits: &[Split], expected: &[&[(Real, Real)]], epsilon: Real) {
    assert_eq!(splits.len(), expected.len(), "splits: {splits:?}");

    for (split, expected) in splits.iter().zip(expected) {
        assert_eq!(split.len(), expected.len(), "split: {split:?}");
        for (pt, &(x, y)) in split.iter().zip(expected.iter()) {
            approx::assert_relative_eq!(*pt, Point::new(x, y), epsilon = epsilon);
        }
    }
}

/// Checks the structural guarantees of a linestring decomposition.
pub fn check_decomposition(line: &LineString, grid: &Grid, splits: &[Split]) {
    assert!(!splits.is_empty());
    assert_eq!(splits[0][0], line.first());
    assert_eq!(*splits[splits.len() - 1].last().unwrap(), line.last());

    for split in splits {
        assert!(split.len() >= 2, "degenerate split: {split:?}");
        assert!(split.windows(2).all(|w| w[0] != w[1]), "repeated point: {split:?}");

        // Every edge of a split lies within the same cell.
        let cell = grid.cell_index(&na::center(&split[0], &split[1]));
        for w in split.windows(2) {
            assert_eq!(grid.cell_index(&na::center(&w[0], &w[1])), cell);
        }
    }

    for w in splits.windows(2) {
        assert_eq!(w[0].last(), w[1].first());
    }

    // The original vertices appear in order among the joined points.
    let joined = join_splits(splits);
    let mut remaining = joined.iter();
    for vertex in line.points() {
        assert!(
            remaining.any(|pt| pt == vertex),
            "vertex {vertex:?} missing from {joined:?}"
        );
    }
}
