//! Decomposition of linear geometries along the lines of a grid.
//!
//! * [`decompose`] cuts a linestring into pieces each lying within a single grid cell.
//! * [`decompose_ring_seams`] builds the seams cutting a ring along the grid lines it
//!   crosses, themselves decomposed per cell.
//!
//! The other functions of this module are building blocks of these two: [`annotate`]
//! inserts the grid crossings into a linestring, [`split_along_grid_lines`] builds
//! the seams of a single family of grid lines.

pub use self::error::SplitError;
pub use self::split::{
    annotate, decompose, decompose_ring, decompose_ring_seams, join_splits,
    split_along_grid_lines, Split,
};

mod error;
mod split;
