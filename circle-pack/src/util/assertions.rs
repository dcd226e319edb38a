use itertools::Itertools;
use log::error;

use crate::collision_detection::SpatialIndex;
use crate::entities::{Canvas, PlacedCircle, PlacementResult};

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// Whether the neighborhood scanned by `index` is large enough to detect every collision
/// between circles with radius up to `max_radius`, given `gap`.
pub fn separation_is_covered(index: &SpatialIndex, max_radius: u32, gap: f64) -> bool {
    let max_separation = 2.0 * max_radius as f64 + gap;
    index.cell_size() * index.neighbor_span() as f64 >= max_separation
}

/// Whether every pair of circles keeps at least `gap` between their borders.
/// Quadratic, only use in tests and debug assertions.
pub fn no_overlaps(circles: &[PlacedCircle], gap: f64) -> bool {
    circles.iter().tuple_combinations().all(|(a, b)| {
        let (dx, dy) = (a.x as f64 - b.x as f64, a.y as f64 - b.y as f64);
        let min_dist = a.radius as f64 + b.radius as f64 + gap;
        let ok = dx * dx + dy * dy >= min_dist * min_dist;
        if !ok {
            error!(
                "circles {} and {} are too close: clearance {:.3} < gap {gap}",
                a.id,
                b.id,
                a.clearance(b)
            );
        }
        ok
    })
}

/// Whether every circle lies entirely within the canvas.
pub fn within_bounds(circles: &[PlacedCircle], canvas: &Canvas) -> bool {
    circles
        .iter()
        .all(|c| canvas.contains(c.x, c.y, c.radius))
}

pub fn result_is_consistent(result: &PlacementResult, canvas: &Canvas) -> bool {
    let ids_sequential = result
        .placed
        .iter()
        .enumerate()
        .all(|(i, c)| c.id == i + 1);
    let counts_match = result
        .outcomes
        .iter()
        .map(|o| o.placed_count)
        .sum::<usize>()
        == result.placed.len();
    let no_excess = result
        .outcomes
        .iter()
        .all(|o| o.placed_count <= o.requested_count);

    ids_sequential
        && counts_match
        && no_excess
        && within_bounds(&result.placed, canvas)
        && no_overlaps(&result.placed, result.gap)
}
