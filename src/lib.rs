/*!
gridsplit2d
========

**gridsplit2d** decomposes 2-dimensional linestrings and closed ring boundaries
into pieces that each lie within a single cell of a raster grid, the grid
being placed in world space by an affine transform.

The two main entry points are [`query::decompose`] for open linestrings and
[`query::decompose_ring_seams`] for the seams a closed boundary induces along
the grid lines it crosses.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unused_qualifications)]

extern crate alloc;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod grid;
pub mod query;
pub mod shape;

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use na::{Matrix3, Point2, Vector2};

    /// The scalar type used throughout this crate.
    pub type Real = f64;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// Relative tolerance under which two crossings of the same segment are
    /// considered to happen at once, i.e., at a grid corner.
    pub const CORNER_EPSILON: Real = 1.0e-12;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The homogeneous matrix type.
    pub use Matrix3 as Matrix;
}
