use std::cmp::Reverse;
use std::f64::consts::PI;
use std::time::Instant;

use itertools::Itertools;
use log::{debug, info, warn};
use rand::Rng;

use crate::capacity;
use crate::collision_detection::SpatialIndex;
use crate::entities::{Canvas, CircleSpec, PlacedCircle, PlacementResult, SpecOutcome};
use crate::error::ConfigError;
use crate::placement::{PlacementConfig, UniformCanvasSampler};
use crate::util::assertions;

/// Places circles by rejection sampling: random candidate centers are drawn uniformly and
/// accepted when they keep the required gap to every circle placed so far.
pub struct PlacementEngine {
    pub config: PlacementConfig,
}

impl PlacementEngine {
    pub fn new(config: PlacementConfig) -> Self {
        Self { config }
    }

    /// Runs the placement described by the engine's configuration.
    pub fn run(&self, rng: &mut impl Rng) -> Result<PlacementResult, ConfigError> {
        let PlacementConfig {
            canvas,
            specs,
            gap,
            max_attempts_per_circle,
        } = &self.config;
        Self::place(canvas, specs, *gap, *max_attempts_per_circle, rng)
    }

    /// Places the circles of all `specs` on the `canvas`, largest radius first.
    ///
    /// Per class, sampling stops once all circles are placed or after
    /// [`local_max_attempts`] consecutive rejected samples. Classes which could not be
    /// completed are reported through [`SpecOutcome::shortfall`].
    /// With identically seeded `rng`s, the result is identical.
    pub fn place(
        canvas: &Canvas,
        specs: &[CircleSpec],
        gap: f64,
        max_attempts_per_circle: usize,
        rng: &mut impl Rng,
    ) -> Result<PlacementResult, ConfigError> {
        validate(canvas, specs, gap)?;
        let start = Instant::now();

        let advisory = capacity::advise(canvas, specs, gap);

        let max_radius = specs.iter().map(|s| s.radius).max().unwrap_or(0);
        let cell_size = f64::max(1.0, max_radius as f64 + gap);
        let mut index = SpatialIndex::with_default_span(cell_size);
        debug_assert!(assertions::separation_is_covered(&index, max_radius, gap));

        let mut placed: Vec<PlacedCircle> = vec![];
        let mut outcomes = Vec::with_capacity(specs.len());

        for spec in spec_placement_order(specs).into_iter().map(|i| &specs[i]) {
            let mut sampler = UniformCanvasSampler::new(canvas, spec)?;
            let max_attempts = local_max_attempts(canvas, spec.radius, max_attempts_per_circle);
            let r = spec.radius as f64;

            let mut n_placed = 0;
            let mut attempts = 0;
            while n_placed < spec.count && attempts < max_attempts {
                let (x, y) = sampler.sample(rng);
                if index.overlaps(x as f64, y as f64, r, gap) {
                    attempts += 1;
                } else {
                    index.add(x as f64, y as f64, r);
                    placed.push(PlacedCircle {
                        id: placed.len() + 1,
                        label: spec.label.clone(),
                        color: spec.color.clone(),
                        x,
                        y,
                        radius: spec.radius,
                    });
                    n_placed += 1;
                    attempts = 0;
                }
            }

            debug!(
                "[PLACE] class '{}' (r: {}): placed {}/{} using {} samples",
                spec.label, spec.radius, n_placed, spec.count, sampler.n_samples
            );
            if n_placed < spec.count {
                warn!(
                    "[PLACE] class '{}' (r: {}): only {}/{} circles placed, gave up after {} consecutive failed attempts",
                    spec.label, spec.radius, n_placed, spec.count, max_attempts
                );
            }

            outcomes.push(SpecOutcome {
                label: spec.label.clone(),
                color: spec.color.clone(),
                radius: spec.radius,
                requested_count: spec.count,
                placed_count: n_placed,
                n_samples: sampler.n_samples,
            });
        }

        let result = PlacementResult {
            n_samples: outcomes.iter().map(|o| o.n_samples).sum(),
            placed,
            outcomes,
            advisory,
            gap,
        };

        debug_assert!(assertions::result_is_consistent(&result, canvas));

        info!(
            "[PLACE] placed {}/{} circles in {:.3}ms ({} samples)",
            result.total_placed(),
            result.total_requested(),
            start.elapsed().as_secs_f64() * 1000.0,
            result.n_samples
        );

        Ok(result)
    }
}

/// Checks a request before any placement is attempted.
pub fn validate(canvas: &Canvas, specs: &[CircleSpec], gap: f64) -> Result<(), ConfigError> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(ConfigError::ZeroCanvas {
            width: canvas.width,
            height: canvas.height,
        });
    }
    if !gap.is_finite() || gap < 0.0 {
        return Err(ConfigError::InvalidGap { gap });
    }
    for spec in specs {
        if spec.radius == 0 {
            return Err(ConfigError::NonPositiveRadius {
                label: spec.label.clone(),
                radius: 0,
            });
        }
        if !canvas.fits(spec.radius) {
            return Err(ConfigError::RadiusExceedsCanvas {
                label: spec.label.clone(),
                radius: spec.radius,
                width: canvas.width,
                height: canvas.height,
            });
        }
    }
    Ok(())
}

/// Order in which the classes are placed: descending radius, ties keep their request order.
pub fn spec_placement_order(specs: &[CircleSpec]) -> Vec<usize> {
    (0..specs.len())
        .sorted_by_key(|&i| Reverse(specs[i].radius))
        .collect_vec()
}

/// Number of consecutive failed samples tolerated for a class of circles with `radius`.
///
/// The base budget is extended by half the number of such circles that would cover the canvas,
/// so small circles on large canvases are granted more attempts.
/// The budget saturates at `usize::MAX`.
pub fn local_max_attempts(canvas: &Canvas, radius: u32, max_attempts_per_circle: usize) -> usize {
    let circle_area = PI * (radius as f64).powi(2);
    let extension = (canvas.area() / circle_area * 0.5).floor() as usize;
    max_attempts_per_circle.saturating_add(extension)
}
