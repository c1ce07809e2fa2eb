use crate::grid::{Grid, GridError};
use crate::math::{Point, Real, CORNER_EPSILON, DEFAULT_EPSILON, DIM};
use crate::shape::Segment;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;
#[cfg(not(feature = "std"))]
use na::ComplexField; // for .floor()

/// A crossing between a segment and one or two grid lines, in index space.
#[derive(Copy, Clone, Debug)]
struct GridCrossing {
    /// Travel parameter along the segment, in `[0, 1]`.
    t: Real,
    /// The crossing point in index space. Its coordinate along each crossed
    /// line's normal is exactly that line's level.
    pt: Point<Real>,
    /// The normal axis of the crossed line.
    axis: usize,
}

impl Grid {
    /// Computes the points where `segment` crosses the grid lines separating its
    /// endpoints' cells, in travel order.
    ///
    /// The crossed lines are the ones whose traversal changes the cell index,
    /// so a segment starting on a grid line and leaving it toward the lower
    /// index reports its start point, and a segment ending on a grid line it
    /// reached from the lower index reports its end point. These two points
    /// are returned exactly as given by the segment; every other crossing is
    /// strictly inside the segment. A crossing through a grid corner is
    /// reported once, and a segment running along a grid line does not cross it.
    ///
    /// Fails with [`GridError::NoIntersection`] if both endpoints lie in the same cell.
    pub fn find_intersections(
        &self,
        segment: &Segment,
    ) -> Result<SmallVec<[Point<Real>; 4]>, GridError> {
        let start_cell = self.cell_index(&segment.a);
        if start_cell == self.cell_index(&segment.b) {
            return Err(GridError::NoIntersection { cell: start_cell });
        }

        let local = segment.mapped(|pt| self.to_index_space(pt));
        let dir = local.scaled_direction();
        let mut crossings: SmallVec<[GridCrossing; 4]> = SmallVec::new();

        for axis in 0..DIM {
            if dir[axis] == 0.0 {
                // Parallel to the lines measured along this axis.
                continue;
            }

            let (lo, hi) = if dir[axis] > 0.0 {
                (local.a[axis], local.b[axis])
            } else {
                (local.b[axis], local.a[axis])
            };

            // Every line with `floor(lo) < level <= floor(hi)` changes the cell index.
            for level in (lo.floor() as i64 + 1)..=(hi.floor() as i64) {
                let t = ((level as Real - local.a[axis]) / dir[axis]).clamp(0.0, 1.0);
                let mut pt = local.point_at(t);
                pt[axis] = level as Real;
                crossings.push(GridCrossing { t, pt, axis });
            }
        }

        crossings.sort_by_key(|crossing| OrderedFloat(crossing.t));

        let mut merged: SmallVec<[GridCrossing; 4]> = SmallVec::with_capacity(crossings.len());
        for crossing in crossings {
            match merged.last_mut() {
                Some(last)
                    if relative_eq!(
                        last.t,
                        crossing.t,
                        epsilon = DEFAULT_EPSILON,
                        max_relative = CORNER_EPSILON
                    ) =>
                {
                    // Grid corner: the crossings of both families of lines meet.
                    last.pt[crossing.axis] = crossing.pt[crossing.axis];
                    if crossing.t == 0.0 || crossing.t == 1.0 {
                        last.t = crossing.t;
                    }
                }
                _ => merged.push(crossing),
            }
        }

        debug_assert!(!merged.is_empty());
        log::trace!(
            "segment {:?} -> {:?} crosses {} grid line(s).",
            segment.a,
            segment.b,
            merged.len()
        );

        Ok(merged
            .into_iter()
            .map(|crossing| {
                if crossing.t == 0.0 {
                    segment.a
                } else if crossing.t == 1.0 {
                    segment.b
                } else {
                    self.to_world_space(&crossing.pt)
                }
            })
            .collect())
    }
}
