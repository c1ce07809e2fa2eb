//! Geometric primitives: segments, open linestrings and closed rings.

pub use self::linestring::{GeometryError, LineString};
pub use self::ring::Ring;
pub use self::segment::Segment;

mod linestring;
mod ring;
mod segment;
