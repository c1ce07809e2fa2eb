use crate::math::{Point, Real};
use crate::shape::Segment;
use alloc::vec::Vec;

/// Indicates that a point sequence cannot be used as a linestring or a ring.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// Not enough (distinct) points were given to build the geometry.
    #[error("expected at least {expected} points, found {found}.")]
    TooFewPoints {
        /// The minimum number of points required by this geometry.
        expected: usize,
        /// The number of points actually given.
        found: usize,
    },
    /// One of the coordinates is NaN or infinite.
    #[error("the point {0} has a non-finite coordinate.")]
    NonFiniteCoordinate(usize),
}

pub(crate) fn check_finite(points: &[Point<Real>]) -> Result<(), GeometryError> {
    match points
        .iter()
        .position(|pt| !pt.coords.iter().all(|x| x.is_finite()))
    {
        Some(i) => Err(GeometryError::NonFiniteCoordinate(i)),
        None => Ok(()),
    }
}

/// An open linestring: an ordered sequence of at least two points.
///
/// No closing edge is implied between the last and the first point, even if
/// they are equal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-serialize",
    serde(try_from = "Vec<Point<Real>>", into = "Vec<Point<Real>>")
)]
pub struct LineString {
    points: Vec<Point<Real>>,
}

impl LineString {
    /// Creates a linestring from its points.
    ///
    /// Fails if less than two points are given or if any coordinate is not finite.
    pub fn new(points: Vec<Point<Real>>) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::TooFewPoints {
                expected: 2,
                found: points.len(),
            });
        }

        check_finite(&points)?;
        Ok(Self { points })
    }

    /// Creates a linestring without checking the number of points nor their finiteness.
    pub(crate) fn new_unchecked(points: Vec<Point<Real>>) -> Self {
        debug_assert!(points.len() >= 2);
        Self { points }
    }

    /// Creates a linestring from `(x, y)` pairs, as produced by most geometry interchange layers.
    pub fn from_xy(coords: impl IntoIterator<Item = (Real, Real)>) -> Result<Self, GeometryError> {
        Self::new(
            coords
                .into_iter()
                .map(|(x, y)| Point::new(x, y))
                .collect(),
        )
    }

    /// The points of this linestring.
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The number of points of this linestring.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a linestring has at least two points.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The first point of this linestring.
    pub fn first(&self) -> Point<Real> {
        self.points[0]
    }

    /// The last point of this linestring.
    pub fn last(&self) -> Point<Real> {
        self.points[self.points.len() - 1]
    }

    /// Are the first and the last point of this linestring equal?
    pub fn is_closed(&self) -> bool {
        self.first() == self.last()
    }

    /// The number of segments forming this linestring.
    pub fn num_segments(&self) -> usize {
        self.points.len() - 1
    }

    /// An iterator through all the segments of this linestring, in travel order.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Segment> + '_ {
        self.points.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    /// Applies `f` to every point of this linestring.
    pub fn mapped(&self, f: impl FnMut(&Point<Real>) -> Point<Real>) -> Self {
        Self {
            points: self.points.iter().map(f).collect(),
        }
    }

    /// Consumes this linestring and returns its points.
    pub fn into_points(self) -> Vec<Point<Real>> {
        self.points
    }
}

impl TryFrom<Vec<Point<Real>>> for LineString {
    type Error = GeometryError;

    fn try_from(points: Vec<Point<Real>>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<LineString> for Vec<Point<Real>> {
    fn from(linestring: LineString) -> Self {
        linestring.points
    }
}
