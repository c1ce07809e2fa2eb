use crate::grid::CellIndex;
use crate::math::Real;

/// Errors raised by the grid model.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum GridError {
    /// The linear part of the affine transform is not invertible, or one of
    /// its coefficients is not finite.
    ///
    /// World coordinates cannot be mapped back to cell indices with such a
    /// transform, so the grid cannot be built.
    #[error("the affine transform is not invertible (determinant: {determinant}).")]
    DegenerateTransform {
        /// The determinant of the 2×2 linear part of the transform.
        determinant: Real,
    },
    /// Grid crossings were requested for a segment whose endpoints lie in the same cell.
    ///
    /// This is a caller logic error: such a segment does not cross any grid line
    /// and never needs to be split.
    #[error("both endpoints of the segment lie in the cell {cell}.")]
    NoIntersection {
        /// The cell containing both endpoints.
        cell: CellIndex,
    },
}
