use std::ops::RangeInclusive;

use crate::error::ConfigError;

/// Rectangular area onto which circles are placed, with its origin at `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn area(&self) -> f64 {
        self.width as f64 * self.height as f64
    }

    /// Whether a circle of `radius` can be placed at at least one position inside the canvas
    pub fn fits(&self, radius: u32) -> bool {
        let diameter = 2 * radius as u64;
        diameter <= self.width as u64 && diameter <= self.height as u64
    }

    /// Valid x-coordinates for the center of a circle with `radius`.
    /// `None` if the circle is wider than the canvas.
    pub fn x_range(&self, radius: u32) -> Option<RangeInclusive<u32>> {
        let end = self.width.checked_sub(radius)?;
        (radius <= end).then(|| radius..=end)
    }

    /// Valid y-coordinates for the center of a circle with `radius`.
    /// `None` if the circle is taller than the canvas.
    pub fn y_range(&self, radius: u32) -> Option<RangeInclusive<u32>> {
        let end = self.height.checked_sub(radius)?;
        (radius <= end).then(|| radius..=end)
    }

    /// Whether a circle lies entirely within the canvas
    pub fn contains(&self, x: u32, y: u32, radius: u32) -> bool {
        let x_ok = self.x_range(radius).is_some_and(|r| r.contains(&x));
        let y_ok = self.y_range(radius).is_some_and(|r| r.contains(&y));
        x_ok && y_ok
    }
}
