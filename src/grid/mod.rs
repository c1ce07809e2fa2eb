//! The grid model: mapping between world space and cell-index space, and
//! crossings of segments with grid lines.

pub use self::affine::Affine;
pub use self::error::GridError;
pub use self::grid::{CellIndex, Grid};
pub use self::grid_line::GridLineDirection;

mod affine;
mod error;
mod grid;
mod grid_intersections;
mod grid_line;
