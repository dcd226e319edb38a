use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// External representation of a [`Canvas`](crate::entities::Canvas).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtCanvas {
    pub width: u32,
    pub height: u32,
}

/// External representation of a [`CircleSpec`](crate::entities::CircleSpec).
/// Radius and count are signed so invalid requests can be expressed and rejected on import.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCircleSpec {
    pub color: String,
    pub radius: i64,
    pub count: i64,
    /// Name of the class, defaults to the color if not specified
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,
}

/// External representation of a complete placement request
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacementRequest {
    pub canvas: ExtCanvas,
    pub specs: Vec<ExtCircleSpec>,
    /// Minimum free distance between the borders of any two circles
    pub gap: f64,
    /// Base number of consecutive failed samples tolerated per circle class
    pub max_attempts_per_circle: usize,
}

/// A single row of the tabular export, one per placed circle.
/// Field order is the column order of the export,
/// written by [`write_csv`](crate::io::export::write_csv).
#[derive(Clone, Debug, PartialEq)]
pub struct ExtCircleRow {
    pub id: usize,
    /// Capitalized label of the circle's class, the `type` column
    pub kind: String,
    pub color: String,
    pub x: u32,
    pub y: u32,
    pub radius: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub gap: f64,
}

/// External representation of a [`PlacedCircle`](crate::entities::PlacedCircle).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedCircle {
    pub id: usize,
    pub label: String,
    pub color: String,
    pub x: u32,
    pub y: u32,
    pub radius: u32,
}

/// External representation of a [`SpecOutcome`](crate::entities::SpecOutcome).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSpecOutcome {
    pub label: String,
    pub color: String,
    pub radius: u32,
    pub requested_count: usize,
    pub placed_count: usize,
    pub shortfall: usize,
}

/// External representation of a [`CapacityAdvisory`](crate::capacity::CapacityAdvisory).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtCapacityAdvisory {
    pub requested_area: f64,
    pub practical_capacity: f64,
    pub excess_pct: f64,
}

/// Summary of a placement run
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacementReport {
    pub canvas: ExtCanvas,
    pub gap: f64,
    /// Seed of the run, absent if the run was seeded from entropy
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub seed: Option<u32>,
    /// Percentage of the canvas covered by placed circles
    pub coverage_pct: f64,
    /// Total number of candidate positions drawn
    pub n_samples: usize,
    pub counts_by_label: IndexMap<String, usize>,
    pub outcomes: Vec<ExtSpecOutcome>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub advisory: Option<ExtCapacityAdvisory>,
    pub circles: Vec<ExtPlacedCircle>,
}
