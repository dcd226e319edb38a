use thiserror::Error;

/// Problems with a placement request that prevent the run from starting.
///
/// Partial placement and capacity overruns are not errors, they are reported as data on
/// [`PlacementResult`](crate::entities::PlacementResult).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("canvas dimensions must be positive, got {width}x{height}")]
    ZeroCanvas { width: u32, height: u32 },
    #[error("minimum gap must be finite and non-negative, got {gap}")]
    InvalidGap { gap: f64 },
    #[error("circle class '{label}' has a non-positive radius: {radius}")]
    NonPositiveRadius { label: String, radius: i64 },
    #[error("circle class '{label}' has a negative count: {count}")]
    NegativeCount { label: String, count: i64 },
    #[error(
        "circle class '{label}' with radius {radius} does not fit on a {width}x{height} canvas"
    )]
    RadiusExceedsCanvas {
        label: String,
        radius: u32,
        width: u32,
        height: u32,
    },
}
