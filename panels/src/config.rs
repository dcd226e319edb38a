use circle_pack::io::ext_repr::{ExtCanvas, ExtCircleSpec, ExtPlacementRequest};
use circle_pack::io::svg::SvgDrawOptions;
use serde::{Deserialize, Serialize};

/// Configuration of a panel generation run
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PanelConfig {
    pub canvas: ExtCanvas,
    /// Minimum free distance between the borders of any two circles
    pub gap: f64,
    /// Circle classes to place, in any order. Larger radii are always placed first.
    pub specs: Vec<ExtCircleSpec>,
    /// Base number of consecutive failed samples tolerated per circle class,
    /// scaled up automatically for small circles on large canvases
    pub max_attempts_per_circle: usize,
    /// Seed for the PRNG.
    /// If undefined, the panels are generated in non-deterministic mode using entropy.
    /// Panel `i` of a run uses seed `prng_seed + i`.
    pub prng_seed: Option<u32>,
    /// Render the PNG with black circles only
    #[serde(default)]
    pub monochrome: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl PanelConfig {
    /// The placement part of the configuration,
    /// to be imported by [`circle_pack::io::import::import`]
    pub fn to_request(&self) -> ExtPlacementRequest {
        ExtPlacementRequest {
            canvas: self.canvas,
            specs: self.specs.clone(),
            gap: self.gap,
            max_attempts_per_circle: self.max_attempts_per_circle,
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        let spec = |color: &str, radius, count| ExtCircleSpec {
            color: color.to_string(),
            radius,
            count,
            label: None,
        };
        Self {
            canvas: ExtCanvas {
                width: 1000,
                height: 1000,
            },
            gap: 5.0,
            specs: vec![spec("red", 20, 30), spec("blue", 10, 20), spec("green", 5, 10)],
            max_attempts_per_circle: 1000,
            prng_seed: Some(0),
            monochrome: false,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
