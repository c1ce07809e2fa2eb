use crate::grid::{GridError, GridLineDirection};
use crate::shape::GeometryError;

/// Error raised while decomposing a linestring or the seams of a ring.
///
/// A failure aborts the decomposition of the current geometry only; it never
/// affects other geometries decomposed on the same grid.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum SplitError {
    /// The input geometry has too few points or non-finite coordinates.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),
    /// A closed ring crosses a grid line an odd number of times.
    ///
    /// Crossings along a grid line are paired to build seams, which is not
    /// possible with an odd count. This typically happens when part of the
    /// ring boundary runs exactly along that grid line.
    #[error("expected an even number of crossings with the {direction:?} grid line at level {level}, found {count}.")]
    OddCrossingCount {
        /// The direction of the grid line.
        direction: GridLineDirection,
        /// The level of the grid line.
        level: i64,
        /// The number of genuine crossings found on this grid line.
        count: usize,
    },
    /// The grid model failed.
    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}
