mod color;

/// External (serializable) representation of requests and results
pub mod ext_repr;

/// Converting external requests into [`PlacementConfig`](crate::placement::PlacementConfig)s
pub mod import;

/// Tabular and JSON export of placement results
pub mod export;

/// Raster rendering of placed circles
pub mod raster;

/// Vector rendering of placed circles
pub mod svg;

#[doc(inline)]
pub use color::Color;
