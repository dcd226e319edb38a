use indexmap::IndexMap;

use crate::entities::{Canvas, PlacementResult};

/// Percentage of the canvas area covered by the placed circles.
/// Only circles which were actually placed are counted, never the requested amounts.
pub fn coverage_ratio(result: &PlacementResult, canvas: &Canvas) -> f64 {
    let covered = result.placed.iter().map(|c| c.area()).sum::<f64>();
    covered / canvas.area() * 100.0
}

/// Number of placed circles per label, in the order the labels are first encountered.
pub fn counts_by_label(result: &PlacementResult) -> IndexMap<String, usize> {
    let mut counts = IndexMap::new();
    for circle in &result.placed {
        *counts.entry(circle.label.clone()).or_insert(0) += 1;
    }
    counts
}

/// Summary statistics of a [`PlacementResult`]
#[derive(Clone, Debug, PartialEq)]
pub struct CoverageReport {
    /// Covered fraction of the canvas, as a percentage
    pub coverage_pct: f64,
    pub counts_by_label: IndexMap<String, usize>,
    pub total_placed: usize,
    pub total_requested: usize,
    pub total_shortfall: usize,
}

impl CoverageReport {
    pub fn new(result: &PlacementResult, canvas: &Canvas) -> Self {
        Self {
            coverage_pct: coverage_ratio(result, canvas),
            counts_by_label: counts_by_label(result),
            total_placed: result.total_placed(),
            total_requested: result.total_requested(),
            total_shortfall: result.total_shortfall(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{PlacedCircle, SpecOutcome};
    use float_cmp::approx_eq;

    fn circle(id: usize, label: &str, x: u32, y: u32, radius: u32) -> PlacedCircle {
        PlacedCircle {
            id,
            label: label.into(),
            color: label.into(),
            x,
            y,
            radius,
        }
    }

    fn result_of(placed: Vec<PlacedCircle>, requested: usize) -> PlacementResult {
        PlacementResult {
            outcomes: vec![SpecOutcome {
                label: "red".into(),
                color: "red".into(),
                radius: 10,
                requested_count: requested,
                placed_count: placed.len(),
                n_samples: placed.len(),
            }],
            n_samples: placed.len(),
            placed,
            advisory: None,
            gap: 0.0,
        }
    }

    #[test]
    fn three_circles_of_radius_ten_on_a_hundred_square() {
        let canvas = Canvas::new(100, 100).unwrap();
        let result = result_of(
            vec![
                circle(1, "red", 15, 15, 10),
                circle(2, "red", 50, 50, 10),
                circle(3, "red", 85, 85, 10),
            ],
            3,
        );
        let ratio = coverage_ratio(&result, &canvas);
        assert!(approx_eq!(f64, ratio, 9.42477796, epsilon = 1e-6));
    }

    #[test]
    fn ratio_ignores_unplaced_circles() {
        let canvas = Canvas::new(100, 100).unwrap();
        let result = result_of(vec![circle(1, "red", 50, 50, 10)], 50);
        let report = CoverageReport::new(&result, &canvas);
        assert!(approx_eq!(f64, report.coverage_pct, 3.14159265, epsilon = 1e-6));
        assert_eq!(report.total_shortfall, 49);
    }

    #[test]
    fn counts_follow_label_encounter_order() {
        let result = result_of(
            vec![
                circle(1, "red", 0, 0, 1),
                circle(2, "blue", 0, 0, 1),
                circle(3, "red", 0, 0, 1),
                circle(4, "green", 0, 0, 1),
            ],
            4,
        );
        let counts = counts_by_label(&result);
        assert_eq!(
            counts.into_iter().collect::<Vec<_>>(),
            vec![
                ("red".to_string(), 2),
                ("blue".to_string(), 1),
                ("green".to_string(), 1)
            ]
        );
    }
}
