//! `circle-pack` places colored circles of fixed radii onto a rectangular canvas without overlap,
//! using rejection sampling accelerated by a uniform spatial hash grid.

/// Spatial hash grid used to answer overlap queries
pub mod collision_detection;

/// Entities describing a placement request and its outcome
pub mod entities;

/// Configuration errors
pub mod error;

/// Advisory estimate of whether a request can fit on the canvas
pub mod capacity;

/// The rejection sampling placement engine
pub mod placement;

/// Coverage statistics over a placement result
pub mod coverage;

/// Importing requests into and exporting results out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

/// Fraction of a plane covered by hexagonally packed equal circles.
pub const HEX_PACKING_DENSITY: f64 = 0.9069;

/// Derating applied to [`HEX_PACKING_DENSITY`] to obtain a practical fill ceiling
/// for random placement.
pub const PRACTICAL_FILL_FACTOR: f64 = 0.80;

/// Default number of grid cells scanned in each direction around a query cell.
pub const DEFAULT_NEIGHBOR_SPAN: usize = 2;
