use crate::grid::{Affine, GridError, GridLineDirection};
use crate::math::{Point, Real};
use core::ops::RangeInclusive;
use na::Point2;
#[cfg(not(feature = "std"))]
use na::ComplexField; // for .floor()

/// The integer `(column, row)` index of a grid cell, stored as `(x, y)`.
pub type CellIndex = Point2<i64>;

/// A raster grid of `ncols × nrows` cells placed in world space by an affine transform.
///
/// The cell `(i, j)` covers the unit square `[i, i + 1) × [j, j + 1)` of index
/// space, i.e., the world-space parallelogram bounded by the images of the
/// index-space lines `x = i`, `x = i + 1`, `y = j` and `y = j + 1`.
///
/// Cell lookups are not restricted to the grid extent: a point outside of it
/// still resolves to the index of the (virtual) cell containing it, so line
/// decomposition behaves identically inside and outside the raster.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Grid {
    ncols: usize,
    nrows: usize,
    transform: Affine,
}

impl Grid {
    /// Creates a grid with `ncols` columns and `nrows` rows, placed by `transform`.
    pub fn new(ncols: usize, nrows: usize, transform: Affine) -> Self {
        Self {
            ncols,
            nrows,
            transform,
        }
    }

    /// Creates a grid from its dimensions and the six affine coefficients
    /// `[a, b, c, d, e, f]` (see [`Affine`]), as read from raster metadata.
    pub fn from_coefficients(
        ncols: usize,
        nrows: usize,
        coefficients: [Real; 6],
    ) -> Result<Self, GridError> {
        Ok(Self::new(ncols, nrows, Affine::try_from(coefficients)?))
    }

    /// The grid with the same extent as `self`, but whose world space is its index space.
    pub fn index_space_grid(&self) -> Self {
        Self::new(self.ncols, self.nrows, Affine::identity())
    }

    /// The number of columns of this grid.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// The number of rows of this grid.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// The affine transform mapping index space to world space.
    pub fn transform(&self) -> &Affine {
        &self.transform
    }

    /// Maps a world-space point to (fractional) index space.
    #[inline]
    pub fn to_index_space(&self, pt: &Point<Real>) -> Point<Real> {
        self.transform.inverse_transform_point(pt)
    }

    /// Maps an index-space point to world space.
    #[inline]
    pub fn to_world_space(&self, pt: &Point<Real>) -> Point<Real> {
        self.transform.transform_point(pt)
    }

    /// The index of the cell containing the world-space point `pt`.
    ///
    /// A point lying exactly on a grid line belongs to the cell with the
    /// greater index along that line's normal.
    pub fn cell_index(&self, pt: &Point<Real>) -> CellIndex {
        let idx = self.to_index_space(pt);
        CellIndex::new(idx.x.floor() as i64, idx.y.floor() as i64)
    }

    /// Is the given cell part of this grid's extent?
    pub fn contains_cell(&self, cell: &CellIndex) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as usize) < self.ncols && (cell.y as usize) < self.nrows
    }

    /// The levels of the grid lines of the given direction bounding this grid's extent.
    pub fn levels(&self, direction: GridLineDirection) -> RangeInclusive<i64> {
        match direction {
            GridLineDirection::Horizontal => 0..=self.nrows as i64,
            GridLineDirection::Vertical => 0..=self.ncols as i64,
        }
    }

    /// The world-space corners of the given cell, counterclockwise in index space.
    pub fn cell_corners(&self, cell: &CellIndex) -> [Point<Real>; 4] {
        let (i, j) = (cell.x as Real, cell.y as Real);
        [
            Point::new(i, j),
            Point::new(i + 1.0, j),
            Point::new(i + 1.0, j + 1.0),
            Point::new(i, j + 1.0),
        ]
        .map(|pt| self.to_world_space(&pt))
    }
}
