use super::{annotate, decompose, Split};
use crate::grid::{Grid, GridLineDirection};
use crate::query::SplitError;
use crate::shape::{LineString, Ring};
use alloc::{vec, vec::Vec};
use core::ops::RangeInclusive;
use ordered_float::OrderedFloat;

/// Builds the seams cutting `ring` along the grid lines of the given direction.
///
/// For every level of `levels`, the ring vertices lying exactly on the grid
/// line and whose neighbors straddle it are collected, sorted along the line,
/// and paired two by two. Each pair is joined by a straight seam which is then
/// decomposed on `grid`. Only vertices are considered: the ring boundary is
/// expected to already contain its crossings with the grid lines (see
/// [`annotate`](crate::query::annotate)).
///
/// Fails with [`SplitError::OddCrossingCount`] if a level does not yield an
/// even number of crossings, which happens for instance when the boundary
/// runs along that grid line.
pub fn split_along_grid_lines(
    ring: &Ring,
    grid: &Grid,
    direction: GridLineDirection,
    levels: RangeInclusive<i64>,
) -> Result<Vec<Split>, SplitError> {
    let along = direction.along_axis();
    let local: Vec<_> = ring
        .vertices()
        .iter()
        .map(|pt| grid.to_index_space(pt))
        .collect();
    let n = local.len();

    let mut result = Vec::new();
    let mut crossings = Vec::new();

    for level in levels {
        crossings.clear();

        for (i, pt) in local.iter().enumerate() {
            let prev = &local[(i + n - 1) % n];
            let next = &local[(i + 1) % n];

            if direction.is_on_grid_line(pt, level) && direction.crosses_grid_line(prev, next, level)
            {
                crossings.push(*pt);
            }
        }

        if crossings.len() % 2 != 0 {
            log::debug!(
                "odd number of ring crossings ({}) with the {:?} grid line at level {}.",
                crossings.len(),
                direction,
                level
            );
            return Err(SplitError::OddCrossingCount {
                direction,
                level,
                count: crossings.len(),
            });
        }

        crossings.sort_by_key(|pt| OrderedFloat(pt[along]));

        let pairs = crossings.chunks_exact(2);
        debug_assert!(pairs.remainder().is_empty());

        for pair in pairs {
            if pair[0] == pair[1] {
                // The ring touches itself on the grid line.
                continue;
            }

            let seam = LineString::new_unchecked(vec![
                grid.to_world_space(&pair[0]),
                grid.to_world_space(&pair[1]),
            ]);
            result.extend(decompose(&seam, grid)?);
        }
    }

    Ok(result)
}

/// Builds all the seams cutting `ring` along the lines of `grid`, decomposed per cell.
///
/// Horizontal seams come first, then vertical seams, each sorted by level.
/// The classification of the ring vertices is carried out in the index space
/// of `grid`, where every crossing of the ring boundary with a grid line
/// lies exactly on that line.
pub fn decompose_ring_seams(ring: &Ring, grid: &Grid) -> Result<Vec<Split>, SplitError> {
    let index_grid = grid.index_space_grid();
    let local = ring.mapped(|pt| grid.to_index_space(pt))?;
    let boundary = annotate(&local.to_closed_linestring(), &index_grid)?;
    let annotated = Ring::new(boundary)?;

    let mut seams = Vec::new();
    for direction in GridLineDirection::ALL {
        seams.extend(split_along_grid_lines(
            &annotated,
            &index_grid,
            direction,
            grid.levels(direction),
        )?);
    }

    log::debug!(
        "ring with {} vertices yields {} seam split(s).",
        ring.num_vertices(),
        seams.len()
    );

    Ok(seams
        .into_iter()
        .map(|split| split.iter().map(|pt| grid.to_world_space(pt)).collect())
        .collect())
}

/// Decomposes the boundary of `ring`, its closing edge included.
pub fn decompose_ring(ring: &Ring, grid: &Grid) -> Result<Vec<Split>, SplitError> {
    decompose(&ring.to_closed_linestring(), grid)
}
