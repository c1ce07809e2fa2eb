use crate::grid::GridError;
use crate::math::{Matrix, Point, Real};
use na::Affine2;
use num::Zero;

/// An invertible affine mapping from grid cell-index space to world space.
///
/// With the six coefficients `(a, b, c, d, e, f)`, the world coordinates of the
/// index-space point `(col, row)` are:
///
/// ```text
/// world_x = a * col + b * row + c
/// world_y = d * col + e * row + f
/// ```
///
/// This is the coefficient ordering of the Python `affine` package (as used by
/// rasterio). Use [`Affine::from_gdal`] for GDAL geotransforms.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-serialize",
    serde(try_from = "[Real; 6]", into = "[Real; 6]")
)]
pub struct Affine {
    forward: Affine2<Real>,
    inverse: Affine2<Real>,
}

impl Affine {
    /// Creates an affine transform from its six coefficients.
    ///
    /// Fails with [`GridError::DegenerateTransform`] if the linear part
    /// `[[a, b], [d, e]]` is singular or if any coefficient is not finite.
    pub fn new(a: Real, b: Real, c: Real, d: Real, e: Real, f: Real) -> Result<Self, GridError> {
        let determinant = a * e - b * d;

        if determinant.is_zero()
            || !determinant.is_finite()
            || ![a, b, c, d, e, f].iter().all(|x| x.is_finite())
        {
            return Err(GridError::DegenerateTransform { determinant });
        }

        #[rustfmt::skip]
        let matrix = Matrix::new(
            a, b, c,
            d, e, f,
            0.0, 0.0, 1.0,
        );
        let forward = Affine2::from_matrix_unchecked(matrix);
        let inverse = forward
            .try_inverse()
            .ok_or(GridError::DegenerateTransform { determinant })?;

        Ok(Self { forward, inverse })
    }

    /// The identity transform: world space and index space coincide.
    pub fn identity() -> Self {
        Self {
            forward: Affine2::identity(),
            inverse: Affine2::identity(),
        }
    }

    /// Creates an affine transform from a GDAL geotransform
    /// `[c, a, b, f, d, e]` (origin x, pixel width, row rotation, origin y,
    /// column rotation, pixel height).
    pub fn from_gdal(geotransform: [Real; 6]) -> Result<Self, GridError> {
        let [c, a, b, f, d, e] = geotransform;
        Self::new(a, b, c, d, e, f)
    }

    /// The six coefficients `[a, b, c, d, e, f]` of this transform.
    pub fn coefficients(&self) -> [Real; 6] {
        let m = self.forward.matrix();
        [m[(0, 0)], m[(0, 1)], m[(0, 2)], m[(1, 0)], m[(1, 1)], m[(1, 2)]]
    }

    /// The coefficients of this transform in GDAL geotransform order `[c, a, b, f, d, e]`.
    pub fn to_gdal(&self) -> [Real; 6] {
        let [a, b, c, d, e, f] = self.coefficients();
        [c, a, b, f, d, e]
    }

    /// The determinant of the linear part of this transform.
    ///
    /// Its absolute value is the world-space area of one cell.
    pub fn determinant(&self) -> Real {
        let [a, b, _, d, e, _] = self.coefficients();
        a * e - b * d
    }

    /// Maps a point from index space to world space.
    #[inline]
    pub fn transform_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.forward.transform_point(pt)
    }

    /// Maps a point from world space to index space.
    #[inline]
    pub fn inverse_transform_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.inverse.transform_point(pt)
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::identity()
    }
}

impl TryFrom<[Real; 6]> for Affine {
    type Error = GridError;

    fn try_from(coeffs: [Real; 6]) -> Result<Self, Self::Error> {
        let [a, b, c, d, e, f] = coeffs;
        Self::new(a, b, c, d, e, f)
    }
}

impl From<Affine> for [Real; 6] {
    fn from(affine: Affine) -> Self {
        affine.coefficients()
    }
}
