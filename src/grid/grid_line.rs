use crate::math::{Point, Real};

/// The orientation of a family of grid lines, in index space.
///
/// A horizontal grid line has a constant row index, a vertical grid line
/// has a constant column index. The position of a line in its family is
/// its integer *level*.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum GridLineDirection {
    /// Lines of constant row index (`y` in index space).
    Horizontal,
    /// Lines of constant column index (`x` in index space).
    Vertical,
}

impl GridLineDirection {
    /// Both directions, horizontal first.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// The index-space axis orthogonal to the lines of this direction,
    /// i.e., the axis along which the level is measured.
    #[inline]
    pub fn normal_axis(self) -> usize {
        match self {
            Self::Horizontal => 1,
            Self::Vertical => 0,
        }
    }

    /// The index-space axis running along the lines of this direction.
    #[inline]
    pub fn along_axis(self) -> usize {
        1 - self.normal_axis()
    }

    /// The direction of the grid lines located by measuring along `axis`.
    #[inline]
    pub fn from_normal_axis(axis: usize) -> Self {
        if axis == 0 {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    /// Does the index-space point `pt` lie exactly on the grid line at `level`?
    #[inline]
    pub fn is_on_grid_line(self, pt: &Point<Real>, level: i64) -> bool {
        pt[self.normal_axis()] == level as Real
    }

    /// Are the index-space points `prev` and `next` on opposite sides of the
    /// grid line at `level`?
    ///
    /// The test is inclusive: a point lying on the line counts as being on
    /// either side, so a neighbor sitting on the line still continues a crossing.
    #[inline]
    pub fn crosses_grid_line(self, prev: &Point<Real>, next: &Point<Real>, level: i64) -> bool {
        let axis = self.normal_axis();
        let level = level as Real;
        (prev[axis] <= level && next[axis] >= level) || (prev[axis] >= level && next[axis] <= level)
    }
}
