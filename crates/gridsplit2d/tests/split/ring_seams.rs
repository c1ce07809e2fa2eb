use crate::{assert_splits_eq, pts};
use gridsplit2d::grid::{Affine, Grid, GridLineDirection};
use gridsplit2d::query::{decompose_ring_seams, split_along_grid_lines, SplitError};
use gridsplit2d::shape::Ring;

#[test]
fn seams_of_a_square_spanning_nine_cells() {
    let grid = Grid::new(3, 3, Affine::identity());
    let ring = Ring::from_xy([(0.5, 0.5), (2.5, 0.5), (2.5, 2.5), (0.5, 2.5)]).unwrap();
    let seams = decompose_ring_seams(&ring, &grid).unwrap();

    // Two horizontal then two vertical seams, each cut into three cells.
    assert_eq!(seams.len(), 12);
    assert_eq!(seams[0], pts(&[(0.5, 1.0), (1.0, 1.0)]));
    assert_eq!(seams[5], pts(&[(2.0, 2.0), (2.5, 2.0)]));
    assert_eq!(seams[6], pts(&[(1.0, 0.5), (1.0, 1.0)]));
    assert_eq!(seams[11], pts(&[(2.0, 2.0), (2.0, 2.5)]));
}

#[test]
fn concave_ring_pairs_crossings_along_the_line() {
    // A U-shape: the horizontal line y = 1 enters and leaves the ring twice.
    let grid = Grid::new(3, 3, Affine::identity());
    let ring = Ring::from_xy([
        (0.2, 0.2),
        (2.8, 0.2),
        (2.8, 1.8),
        (2.2, 1.8),
        (2.2, 0.6),
        (0.8, 0.6),
        (0.8, 1.8),
        (0.2, 1.8),
    ])
    .unwrap();
    let seams = decompose_ring_seams(&ring, &grid).unwrap();

    assert_eq!(
        seams,
        [
            pts(&[(0.2, 1.0), (0.8, 1.0)]),
            pts(&[(2.2, 1.0), (2.8, 1.0)]),
            pts(&[(1.0, 0.2), (1.0, 0.6)]),
            pts(&[(2.0, 0.2), (2.0, 0.6)]),
        ]
    );
}

#[test]
fn ring_within_a_single_cell() {
    let grid = Grid::new(3, 3, Affine::identity());
    let ring = Ring::from_xy([(1.2, 1.2), (1.8, 1.2), (1.5, 1.8)]).unwrap();
    assert!(decompose_ring_seams(&ring, &grid).unwrap().is_empty());
}

#[test]
fn seams_on_north_up_grid() {
    // 10m cells, top-left corner at (100, 200), rows going south.
    let grid = Grid::from_coefficients(2, 2, [10.0, 0.0, 100.0, 0.0, -10.0, 200.0]).unwrap();
    let ring = Ring::from_xy([(105.0, 195.0), (115.0, 195.0), (115.0, 185.0), (105.0, 185.0)]).unwrap();
    let seams = decompose_ring_seams(&ring, &grid).unwrap();

    assert_splits_eq(
        &seams,
        &[
            &[(105.0, 190.0), (110.0, 190.0)],
            &[(110.0, 190.0), (115.0, 190.0)],
            &[(110.0, 195.0), (110.0, 190.0)],
            &[(110.0, 190.0), (110.0, 185.0)],
        ],
        1.0e-9,
    );
}

#[test]
fn seams_are_limited_to_the_given_levels() {
    let grid = Grid::new(3, 3, Affine::identity());
    // Already annotated boundary: every crossing with a grid line is a vertex.
    let ring = Ring::from_xy([
        (0.5, 0.5),
        (2.5, 0.5),
        (2.5, 1.0),
        (2.5, 2.0),
        (2.5, 2.5),
        (0.5, 2.5),
        (0.5, 2.0),
        (0.5, 1.0),
    ])
    .unwrap();

    let seams = split_along_grid_lines(&ring, &grid, GridLineDirection::Horizontal, 2..=2).unwrap();
    assert_eq!(seams.len(), 3);
    assert!(seams.iter().flatten().all(|pt| pt.y == 2.0));
}

#[test]
fn boundary_running_along_a_grid_line() {
    let grid = Grid::new(2, 2, Affine::identity());
    let ring = Ring::from_xy([(0.5, 0.5), (1.0, 0.5), (1.0, 1.5), (0.5, 1.5)]).unwrap();

    match decompose_ring_seams(&ring, &grid) {
        Err(SplitError::OddCrossingCount {
            direction, level, ..
        }) => {
            assert_eq!(direction, GridLineDirection::Vertical);
            assert_eq!(level, 1);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
