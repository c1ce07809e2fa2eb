extern crate nalgebra as na;

use gridsplit2d::grid::Grid;
use gridsplit2d::query::{decompose, decompose_ring_seams};
use gridsplit2d::shape::{LineString, Ring};
use na::Point2;

fn main() {
    // A 4×3 raster with 10m cells, whose top-left corner is at (100, 200).
    let grid = Grid::from_coefficients(4, 3, [10.0, 0.0, 100.0, 0.0, -10.0, 200.0]).unwrap();

    let line = LineString::new(vec![
        Point2::new(105.0, 195.0),
        Point2::new(125.0, 195.0),
        Point2::new(125.0, 175.0),
    ])
    .unwrap();

    // Cut the linestring into per-cell pieces.
    let splits = decompose(&line, &grid).unwrap();
    assert_eq!(splits.len(), 5);

    for split in &splits {
        println!("{:?} -> cell {}", split, grid.cell_index(&split[split.len() - 1]));
    }

    // The seams cutting a polygon ring along the grid lines.
    let ring = Ring::from_xy([(105.0, 195.0), (115.0, 195.0), (115.0, 185.0), (105.0, 185.0)]).unwrap();
    let seams = decompose_ring_seams(&ring, &grid).unwrap();
    assert_eq!(seams.len(), 4);
}
