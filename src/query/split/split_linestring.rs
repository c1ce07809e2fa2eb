use super::{join_splits, Split};
use crate::grid::Grid;
use crate::math::{Point, Real};
use crate::query::SplitError;
use crate::shape::LineString;
use alloc::{vec, vec::Vec};
use core::mem;

/// The in-progress piece of a linestring walk, and the pieces already completed.
///
/// The walk alternates between accumulating vertices within a cell and
/// cutting the piece at a grid crossing.
struct SplitAccumulator {
    piece: Vec<Point<Real>>,
    splits: Vec<Split>,
}

impl SplitAccumulator {
    fn new() -> Self {
        Self {
            piece: Vec::new(),
            splits: Vec::new(),
        }
    }

    fn push(&mut self, pt: Point<Real>) {
        self.piece.push(pt);
    }

    /// Ends the current piece at `crossing` and starts the next one from it.
    fn cut_at(&mut self, crossing: Point<Real>) {
        // A crossing may coincide with the vertex the segment starts from.
        if self.piece.last() != Some(&crossing) {
            self.piece.push(crossing);
        }

        if self.piece.len() >= 2 {
            let split = mem::replace(&mut self.piece, vec![crossing]);
            self.splits.push(split);
        }
    }

    fn finish(mut self, last: Point<Real>) -> Vec<Split> {
        if !self.piece.is_empty() {
            self.piece.push(last);
            self.splits.push(self.piece);
        }

        self.splits
    }
}

/// Decomposes a linestring into pieces lying each within a single cell of `grid`.
///
/// The splits are returned in travel order. Each split has at least two points,
/// and two consecutive splits share exactly one point: the grid crossing where
/// the linestring leaves a cell for the next one. Vertices of the linestring
/// are kept, in order; [`join_splits`] reconstructs the original linestring
/// with its crossings inserted.
///
/// ```
/// use gridsplit2d::grid::{Affine, Grid};
/// use gridsplit2d::math::Point;
/// use gridsplit2d::query::decompose;
/// use gridsplit2d::shape::LineString;
///
/// let grid = Grid::new(2, 2, Affine::identity());
/// let line = LineString::from_xy([(0.5, 0.5), (1.5, 1.5)]).unwrap();
/// let splits = decompose(&line, &grid).unwrap();
///
/// assert_eq!(splits.len(), 2);
/// assert_eq!(splits[0], [Point::new(0.5, 0.5), Point::new(1.0, 1.0)]);
/// assert_eq!(splits[1], [Point::new(1.0, 1.0), Point::new(1.5, 1.5)]);
/// ```
pub fn decompose(linestring: &LineString, grid: &Grid) -> Result<Vec<Split>, SplitError> {
    let mut acc = SplitAccumulator::new();

    for segment in linestring.segments() {
        if grid.cell_index(&segment.a) == grid.cell_index(&segment.b) {
            acc.push(segment.a);
            continue;
        }

        let crossings = grid.find_intersections(&segment)?;
        acc.push(segment.a);

        for crossing in &crossings {
            acc.cut_at(*crossing);
        }

        if crossings.last() == Some(&segment.b) {
            // The next segment starts from this crossing.
            acc.piece.clear();
        }
    }

    Ok(acc.finish(linestring.last()))
}

/// The points of `linestring` with every crossing with the lines of `grid` inserted.
///
/// Annotating an already annotated linestring does not change it.
pub fn annotate(linestring: &LineString, grid: &Grid) -> Result<Vec<Point<Real>>, SplitError> {
    Ok(join_splits(&decompose(linestring, grid)?))
}
