use std::collections::HashMap;

use crate::DEFAULT_NEIGHBOR_SPAN;

/// Circle as stored in the [`SpatialIndex`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexedCircle {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

/// Uniform grid hash of previously placed circles.
///
/// Every circle is stored in the single cell containing its center.
/// Overlap queries only scan the `(2 * neighbor_span + 1)²` cells around the query center.
/// This only yields exact answers if `cell_size * neighbor_span` is at least the largest separation
/// (sum of both radii plus gap) that can be queried. This precondition is not checked at runtime,
/// see [`separation_is_covered`](crate::util::assertions::separation_is_covered).
#[derive(Clone, Debug)]
pub struct SpatialIndex {
    cell_size: f64,
    neighbor_span: usize,
    cells: HashMap<(i64, i64), Vec<IndexedCircle>>,
    n_circles: usize,
}

impl SpatialIndex {
    pub fn new(cell_size: f64, neighbor_span: usize) -> Self {
        assert!(
            cell_size.is_finite() && cell_size > 0.0,
            "invalid cell size: {cell_size}"
        );
        assert!(neighbor_span > 0, "neighbor span must be positive");
        Self {
            cell_size,
            neighbor_span,
            cells: HashMap::new(),
            n_circles: 0,
        }
    }

    /// Creates an index scanning a 5x5 neighborhood around each query
    pub fn with_default_span(cell_size: f64) -> Self {
        Self::new(cell_size, DEFAULT_NEIGHBOR_SPAN)
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn neighbor_span(&self) -> usize {
        self.neighbor_span
    }

    /// Number of circles stored in the index
    pub fn len(&self) -> usize {
        self.n_circles
    }

    pub fn is_empty(&self) -> bool {
        self.n_circles == 0
    }

    /// Stores a circle in the cell containing its center.
    pub fn add(&mut self, x: f64, y: f64, r: f64) {
        self.cells
            .entry(self.cell_key(x, y))
            .or_default()
            .push(IndexedCircle { x, y, r });
        self.n_circles += 1;
    }

    /// Checks whether a circle of radius `r` centered at `(x, y)` comes closer than `gap` to
    /// any stored circle in its neighborhood.
    pub fn overlaps(&self, x: f64, y: f64, r: f64, gap: f64) -> bool {
        let (cx, cy) = self.cell_key(x, y);
        let span = self.neighbor_span as i64;

        for i in (cx - span)..=(cx + span) {
            for j in (cy - span)..=(cy + span) {
                let Some(bucket) = self.cells.get(&(i, j)) else {
                    continue;
                };
                let colliding = bucket.iter().any(|other| {
                    let (dx, dy) = (x - other.x, y - other.y);
                    let min_dist = r + other.r + gap;
                    //squared comparison, no need for a square root
                    dx * dx + dy * dy < min_dist * min_dist
                });
                if colliding {
                    return true;
                }
            }
        }
        false
    }

    /// All stored circles, in no particular order
    pub fn circles(&self) -> impl Iterator<Item = &IndexedCircle> {
        self.cells.values().flatten()
    }

    fn cell_key(&self, x: f64, y: f64) -> (i64, i64) {
        (
            (x / self.cell_size).floor() as i64,
            (y / self.cell_size).floor() as i64,
        )
    }
}
