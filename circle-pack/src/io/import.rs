use crate::entities::{Canvas, CircleSpec};
use crate::error::ConfigError;
use crate::io::ext_repr::{ExtCircleSpec, ExtPlacementRequest};
use crate::placement::{PlacementConfig, validate};

/// Imports an external request, rejecting invalid radii, counts, gaps and canvases.
pub fn import(ext_request: &ExtPlacementRequest) -> Result<PlacementConfig, ConfigError> {
    let canvas = Canvas::new(ext_request.canvas.width, ext_request.canvas.height)?;
    let specs = ext_request
        .specs
        .iter()
        .map(|ext_spec| import_spec(ext_spec, &canvas))
        .collect::<Result<Vec<CircleSpec>, ConfigError>>()?;

    validate(&canvas, &specs, ext_request.gap)?;

    Ok(PlacementConfig {
        canvas,
        specs,
        gap: ext_request.gap,
        max_attempts_per_circle: ext_request.max_attempts_per_circle,
    })
}

pub fn import_spec(ext_spec: &ExtCircleSpec, canvas: &Canvas) -> Result<CircleSpec, ConfigError> {
    let label = ext_spec
        .label
        .clone()
        .unwrap_or_else(|| ext_spec.color.clone());

    if ext_spec.radius <= 0 {
        return Err(ConfigError::NonPositiveRadius {
            label,
            radius: ext_spec.radius,
        });
    }
    let count = usize::try_from(ext_spec.count).map_err(|_| ConfigError::NegativeCount {
        label: label.clone(),
        count: ext_spec.count,
    })?;
    let radius = u32::try_from(ext_spec.radius).map_err(|_| ConfigError::RadiusExceedsCanvas {
        label: label.clone(),
        radius: u32::MAX,
        width: canvas.width,
        height: canvas.height,
    })?;

    Ok(CircleSpec {
        color: ext_spec.color.clone(),
        radius,
        count,
        label,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ext_repr::ExtCanvas;

    fn request(specs: Vec<ExtCircleSpec>) -> ExtPlacementRequest {
        ExtPlacementRequest {
            canvas: ExtCanvas {
                width: 100,
                height: 100,
            },
            specs,
            gap: 2.0,
            max_attempts_per_circle: 100,
        }
    }

    fn ext_spec(radius: i64, count: i64) -> ExtCircleSpec {
        ExtCircleSpec {
            color: "red".into(),
            radius,
            count,
            label: None,
        }
    }

    #[test]
    fn label_defaults_to_color() {
        let config = import(&request(vec![ext_spec(10, 3)])).unwrap();
        assert_eq!(config.specs, vec![CircleSpec::new("red", 10, 3, "red")]);
        assert_eq!(config.canvas, Canvas::new(100, 100).unwrap());
    }

    #[test]
    fn negative_radius_is_rejected() {
        assert_eq!(
            import(&request(vec![ext_spec(-4, 3)])),
            Err(ConfigError::NonPositiveRadius {
                label: "red".into(),
                radius: -4
            })
        );
    }

    #[test]
    fn negative_count_is_rejected() {
        assert_eq!(
            import(&request(vec![ext_spec(4, -1)])),
            Err(ConfigError::NegativeCount {
                label: "red".into(),
                count: -1
            })
        );
    }

    #[test]
    fn oversized_radius_is_rejected() {
        assert!(matches!(
            import(&request(vec![ext_spec(60, 1)])),
            Err(ConfigError::RadiusExceedsCanvas { radius: 60, .. })
        ));
        assert!(matches!(
            import(&request(vec![ext_spec(i64::MAX, 1)])),
            Err(ConfigError::RadiusExceedsCanvas { .. })
        ));
    }
}
