pub use self::split::{join_splits, Split};
pub use self::split_linestring::{annotate, decompose};
pub use self::split_ring::{decompose_ring, decompose_ring_seams, split_along_grid_lines};

mod split;
mod split_linestring;
mod split_ring;
