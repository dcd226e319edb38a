use crate::entities::{Canvas, CircleSpec};

/// Everything a single placement run needs,
/// passed by value to the [`PlacementEngine`](crate::placement::PlacementEngine).
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementConfig {
    pub canvas: Canvas,
    pub specs: Vec<CircleSpec>,
    /// Minimum free distance between the borders of any two circles
    pub gap: f64,
    /// Base number of consecutive failed samples tolerated per circle class
    pub max_attempts_per_circle: usize,
}

impl PlacementConfig {
    /// Largest radius among all requested classes, 0 if there are none
    pub fn max_radius(&self) -> u32 {
        self.specs.iter().map(|s| s.radius).max().unwrap_or(0)
    }
}
