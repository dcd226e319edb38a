use rand::Rng;
use rand::distr::{Distribution, Uniform};

use crate::entities::{Canvas, CircleSpec};
use crate::error::ConfigError;

/// Samples circle centers uniformly from all positions where a circle of a given radius
/// lies entirely within the canvas. Coordinates are integers, both bounds are inclusive.
#[derive(Clone, Debug)]
pub struct UniformCanvasSampler {
    x_distr: Uniform<u32>,
    y_distr: Uniform<u32>,
    pub n_samples: usize,
}

impl UniformCanvasSampler {
    pub fn new(canvas: &Canvas, spec: &CircleSpec) -> Result<Self, ConfigError> {
        let does_not_fit = || ConfigError::RadiusExceedsCanvas {
            label: spec.label.clone(),
            radius: spec.radius,
            width: canvas.width,
            height: canvas.height,
        };
        let (Some(x_range), Some(y_range)) =
            (canvas.x_range(spec.radius), canvas.y_range(spec.radius))
        else {
            return Err(does_not_fit());
        };
        let x_distr =
            Uniform::new_inclusive(x_range.start(), x_range.end()).map_err(|_| does_not_fit())?;
        let y_distr =
            Uniform::new_inclusive(y_range.start(), y_range.end()).map_err(|_| does_not_fit())?;

        Ok(Self {
            x_distr,
            y_distr,
            n_samples: 0,
        })
    }

    /// Draws a center, x before y.
    pub fn sample(&mut self, rng: &mut impl Rng) -> (u32, u32) {
        self.n_samples += 1;
        let x = self.x_distr.sample(rng);
        let y = self.y_distr.sample(rng);
        (x, y)
    }
}
