use crate::math::{Point, Real};
use crate::shape::linestring::check_finite;
use crate::shape::{GeometryError, LineString, Segment};
use alloc::vec::Vec;

/// A closed ring boundary, e.g., the exterior or an interior of a polygon.
///
/// The closing edge, from the last vertex back to the first one, is implicit:
/// the vertex buffer never repeats its first vertex at the end, and never
/// contains two consecutive equal vertices (wrapping around included).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-serialize",
    serde(try_from = "Vec<Point<Real>>", into = "Vec<Point<Real>>")
)]
pub struct Ring {
    vertices: Vec<Point<Real>>,
}

impl Ring {
    /// Creates a ring from its boundary points.
    ///
    /// The boundary may or may not be explicitly closed (last point equal to
    /// the first). Consecutive duplicate points are collapsed. Fails if less
    /// than three distinct vertices remain or if any coordinate is not finite.
    pub fn new(mut points: Vec<Point<Real>>) -> Result<Self, GeometryError> {
        check_finite(&points)?;
        let found = points.len();

        points.dedup();
        while points.len() > 1 && points.first() == points.last() {
            let _ = points.pop();
        }

        if points.len() < 3 {
            return Err(GeometryError::TooFewPoints { expected: 3, found });
        }

        Ok(Self { vertices: points })
    }

    /// Creates a ring from `(x, y)` pairs.
    pub fn from_xy(coords: impl IntoIterator<Item = (Real, Real)>) -> Result<Self, GeometryError> {
        Self::new(
            coords
                .into_iter()
                .map(|(x, y)| Point::new(x, y))
                .collect(),
        )
    }

    /// The distinct vertices of this ring, without the closing point.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The number of vertices of this ring.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The vertices before and after the `i`-th vertex, wrapping around the ring.
    pub fn neighbors(&self, i: usize) -> (Point<Real>, Point<Real>) {
        let n = self.vertices.len();
        (self.vertices[(i + n - 1) % n], self.vertices[(i + 1) % n])
    }

    /// An iterator through all the edges of this ring, the closing edge included.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// The boundary of this ring as a linestring that ends on its first vertex.
    pub fn to_closed_linestring(&self) -> LineString {
        let mut points = Vec::with_capacity(self.vertices.len() + 1);
        points.extend_from_slice(&self.vertices);
        points.push(self.vertices[0]);
        LineString::new_unchecked(points)
    }

    /// Applies `f` to every vertex of this ring.
    ///
    /// Vertices that become equal to their predecessor are collapsed.
    pub fn mapped(
        &self,
        f: impl FnMut(&Point<Real>) -> Point<Real>,
    ) -> Result<Self, GeometryError> {
        Self::new(self.vertices.iter().map(f).collect())
    }
}

impl TryFrom<Vec<Point<Real>>> for Ring {
    type Error = GeometryError;

    fn try_from(points: Vec<Point<Real>>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<Ring> for Vec<Point<Real>> {
    fn from(ring: Ring) -> Self {
        ring.vertices
    }
}
