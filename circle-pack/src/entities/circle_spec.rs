use std::f64::consts::PI;

/// A class of circles to be placed: `count` circles of `radius`, drawn in `color`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CircleSpec {
    pub color: String,
    pub radius: u32,
    pub count: usize,
    /// Name of the class, used in reports and exports
    pub label: String,
}

impl CircleSpec {
    pub fn new(
        color: impl Into<String>,
        radius: u32,
        count: usize,
        label: impl Into<String>,
    ) -> Self {
        Self {
            color: color.into(),
            radius,
            count,
            label: label.into(),
        }
    }

    /// Area of a single circle of this class
    pub fn circle_area(&self) -> f64 {
        PI * (self.radius as f64).powi(2)
    }

    /// Combined area of all requested circles of this class
    pub fn requested_area(&self) -> f64 {
        self.count as f64 * self.circle_area()
    }
}
