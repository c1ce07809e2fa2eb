use crate::{assert_splits_eq, check_decomposition};
use gridsplit2d::grid::{Affine, Grid};
use gridsplit2d::query::{annotate, decompose};
use gridsplit2d::shape::LineString;

fn unit_grid() -> Grid {
    Grid::new(2, 2, Affine::identity())
}

#[test]
fn vertices_are_kept_within_cells() {
    let line = LineString::from_xy([(0.5, 0.5), (0.75, 0.5), (1.5, 0.5), (1.5, 1.5)]).unwrap();
    let splits = decompose(&line, &unit_grid()).unwrap();

    assert_splits_eq(
        &splits,
        &[
            &[(0.5, 0.5), (0.75, 0.5), (1.0, 0.5)],
            &[(1.0, 0.5), (1.5, 0.5), (1.5, 1.0)],
            &[(1.5, 1.0), (1.5, 1.5)],
        ],
        1.0e-3,
    );
    check_decomposition(&line, &unit_grid(), &splits);
}

#[test]
fn vertices_on_grid_lines() {
    // Every vertex lies on a grid line, the last one on the grid boundary.
    let line = LineString::from_xy([(1.0, 0.5), (1.5, 1.0), (1.5, 2.0)]).unwrap();
    let splits = decompose(&line, &unit_grid()).unwrap();

    assert_splits_eq(
        &splits,
        &[&[(1.0, 0.5), (1.5, 1.0)], &[(1.5, 1.0), (1.5, 2.0)]],
        1.0e-3,
    );
    check_decomposition(&line, &unit_grid(), &splits);
}

#[test]
fn crossing_through_a_grid_corner() {
    let line = LineString::from_xy([(0.5, 0.5), (1.5, 1.5)]).unwrap();
    let splits = decompose(&line, &unit_grid()).unwrap();

    assert_splits_eq(
        &splits,
        &[&[(0.5, 0.5), (1.0, 1.0)], &[(1.0, 1.0), (1.5, 1.5)]],
        1.0e-3,
    );
}

#[test]
fn diagonal_crossing_two_lines() {
    let line = LineString::from_xy([(0.5, 0.5), (0.75, 0.5), (1.5, 1.5)]).unwrap();
    let splits = decompose(&line, &unit_grid()).unwrap();

    assert_splits_eq(
        &splits,
        &[
            &[(0.5, 0.5), (0.75, 0.5), (1.0, 0.8333)],
            &[(1.0, 0.8333), (1.125, 1.0)],
            &[(1.125, 1.0), (1.5, 1.5)],
        ],
        1.0e-3,
    );
    check_decomposition(&line, &unit_grid(), &splits);
}

#[test]
fn line_outside_of_the_grid_extent() {
    // Cells outside of the raster are still cells.
    let line = LineString::from_xy([(-1.5, -0.5), (3.5, -0.5)]).unwrap();
    let splits = decompose(&line, &unit_grid()).unwrap();

    assert_splits_eq(
        &splits,
        &[
            &[(-1.5, -0.5), (-1.0, -0.5)],
            &[(-1.0, -0.5), (0.0, -0.5)],
            &[(0.0, -0.5), (1.0, -0.5)],
            &[(1.0, -0.5), (2.0, -0.5)],
            &[(2.0, -0.5), (3.0, -0.5)],
            &[(3.0, -0.5), (3.5, -0.5)],
        ],
        1.0e-12,
    );
}

#[test]
fn line_along_a_grid_line() {
    let line = LineString::from_xy([(1.0, 0.25), (1.0, 1.75)]).unwrap();
    let splits = decompose(&line, &unit_grid()).unwrap();

    assert_splits_eq(
        &splits,
        &[&[(1.0, 0.25), (1.0, 1.0)], &[(1.0, 1.0), (1.0, 1.75)]],
        1.0e-12,
    );
}

#[test]
fn closed_linestring() {
    let line = LineString::from_xy([(0.5, 0.5), (1.5, 0.5), (1.5, 1.5), (0.5, 0.5)]).unwrap();
    let splits = decompose(&line, &unit_grid()).unwrap();

    assert_eq!(splits.len(), 4);
    check_decomposition(&line, &unit_grid(), &splits);
    assert_eq!(annotate(&line, &unit_grid()).unwrap().len(), 7);
}
