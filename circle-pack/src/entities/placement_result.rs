use crate::capacity::CapacityAdvisory;
use crate::entities::PlacedCircle;

/// Outcome of a placement run.
#[derive(Clone, Debug)]
pub struct PlacementResult {
    /// Placed circles, in placement order
    pub placed: Vec<PlacedCircle>,
    /// One outcome per requested circle class, in placement order
    pub outcomes: Vec<SpecOutcome>,
    /// Present if the request exceeded the estimated practical capacity of the canvas
    pub advisory: Option<CapacityAdvisory>,
    /// Minimum gap between circles used during the run
    pub gap: f64,
    /// Total number of candidate positions drawn
    pub n_samples: usize,
}

/// Requested versus placed circles for a single [`CircleSpec`](crate::entities::CircleSpec).
#[derive(Clone, Debug, PartialEq)]
pub struct SpecOutcome {
    pub label: String,
    pub color: String,
    pub radius: u32,
    pub requested_count: usize,
    pub placed_count: usize,
    /// Number of candidate positions drawn for this class
    pub n_samples: usize,
}

impl SpecOutcome {
    /// Number of requested circles which could not be placed within the attempt budget
    pub fn shortfall(&self) -> usize {
        self.requested_count - self.placed_count
    }
}

impl PlacementResult {
    pub fn total_requested(&self) -> usize {
        self.outcomes.iter().map(|o| o.requested_count).sum()
    }

    pub fn total_placed(&self) -> usize {
        self.placed.len()
    }

    pub fn total_shortfall(&self) -> usize {
        self.outcomes.iter().map(|o| o.shortfall()).sum()
    }

    /// Whether every requested circle was placed
    pub fn is_complete(&self) -> bool {
        self.total_shortfall() == 0
    }

    /// Classes with a shortfall, as `(label, shortfall)` pairs
    pub fn shortfalls(&self) -> impl Iterator<Item = (&str, usize)> {
        self.outcomes
            .iter()
            .filter(|o| o.shortfall() > 0)
            .map(|o| (o.label.as_str(), o.shortfall()))
    }
}
