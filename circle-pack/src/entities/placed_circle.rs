use std::f64::consts::PI;

/// A circle which was successfully placed on the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedCircle {
    /// Sequential id in placement order, starting at 1
    pub id: usize,
    pub label: String,
    pub color: String,
    pub x: u32,
    pub y: u32,
    pub radius: u32,
}

impl PlacedCircle {
    pub fn area(&self) -> f64 {
        PI * (self.radius as f64).powi(2)
    }

    pub fn distance(&self, other: &PlacedCircle) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        f64::sqrt(dx * dx + dy * dy)
    }

    /// Free space between the borders of both circles, negative if they overlap
    pub fn clearance(&self, other: &PlacedCircle) -> f64 {
        self.distance(other) - self.radius as f64 - other.radius as f64
    }
}
