use log::warn;

use crate::entities::{Canvas, CircleSpec};
use crate::{HEX_PACKING_DENSITY, PRACTICAL_FILL_FACTOR};

/// Requested circle area compared to a heuristic fill ceiling of the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapacityEstimate {
    /// Sum of the areas of all requested circles
    pub requested_area: f64,
    /// Circle area that can realistically be placed with random placement
    pub practical_capacity: f64,
}

/// Warning that a request likely exceeds what fits on the canvas.
/// Never blocks placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapacityAdvisory {
    pub requested_area: f64,
    pub practical_capacity: f64,
    /// Percentage by which the requested area exceeds the practical capacity
    pub excess_pct: f64,
}

/// Estimates the requested area against the practical capacity of the canvas.
///
/// The practical capacity is the hexagonal packing density, derated to `80%`, and further
/// reduced as the gap grows relative to the largest radius:
/// `area * 0.9069 * 0.80 / (1 + 0.5 * gap / max_radius)`.
pub fn estimate(canvas: &Canvas, specs: &[CircleSpec], gap: f64) -> CapacityEstimate {
    let requested_area = specs.iter().map(|s| s.requested_area()).sum::<f64>();
    let max_radius = specs.iter().map(|s| s.radius).max().unwrap_or(0) as f64;

    let gap_penalty = match max_radius > 0.0 {
        true => 1.0 + 0.5 * gap / max_radius,
        false => 1.0,
    };
    let practical_capacity =
        canvas.area() * HEX_PACKING_DENSITY * PRACTICAL_FILL_FACTOR / gap_penalty;

    CapacityEstimate {
        requested_area,
        practical_capacity,
    }
}

impl CapacityEstimate {
    pub fn exceeds_capacity(&self) -> bool {
        self.requested_area > self.practical_capacity
    }

    pub fn advisory(&self) -> Option<CapacityAdvisory> {
        self.exceeds_capacity().then(|| CapacityAdvisory {
            requested_area: self.requested_area,
            practical_capacity: self.practical_capacity,
            excess_pct: (self.requested_area / self.practical_capacity - 1.0) * 100.0,
        })
    }
}

/// Estimates capacity and logs a warning if the request is likely too large.
pub fn advise(canvas: &Canvas, specs: &[CircleSpec], gap: f64) -> Option<CapacityAdvisory> {
    let advisory = estimate(canvas, specs, gap).advisory();
    if let Some(adv) = &advisory {
        warn!(
            "[CAP] requested circle area ({:.0}) exceeds the practical capacity of the canvas ({:.0}) by {:.1}%, not all circles may be placed",
            adv.requested_area, adv.practical_capacity, adv.excess_pct
        );
    }
    advisory
}
