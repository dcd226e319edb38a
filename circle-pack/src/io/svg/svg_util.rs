use serde::{Deserialize, Serialize};
use svg::node::element::{Circle, Rectangle};

use crate::entities::{Canvas, PlacedCircle};
use crate::io::Color;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///Draw every circle in `monochrome_fill` instead of its own color
    #[serde(default)]
    pub monochrome: bool,
    ///Fill used for all circles in monochrome mode
    #[serde(default = "default_monochrome_fill")]
    pub monochrome_fill: Color,
    ///Fill of the canvas
    #[serde(default = "default_canvas_fill")]
    pub canvas_fill: Color,
    ///Write the id of each circle at its center
    #[serde(default)]
    pub draw_ids: bool,
    ///Print canvas dimensions and coverage above the canvas
    #[serde(default = "default_true")]
    pub draw_label: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            monochrome: false,
            monochrome_fill: default_monochrome_fill(),
            canvas_fill: default_canvas_fill(),
            draw_ids: false,
            draw_label: true,
        }
    }
}

fn default_monochrome_fill() -> Color {
    Color::BLACK
}

fn default_canvas_fill() -> Color {
    Color::WHITE
}

fn default_true() -> bool {
    true
}

pub fn canvas_rect(canvas: &Canvas, params: &[(&str, &str)]) -> Rectangle {
    let mut rect = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", canvas.width)
        .set("height", canvas.height);
    for param in params {
        rect = rect.set(param.0, param.1)
    }
    rect
}

pub fn circle(circle: &PlacedCircle, params: &[(&str, &str)]) -> Circle {
    let mut svg_circle = Circle::new()
        .set("cx", circle.x)
        .set("cy", circle.y)
        .set("r", circle.radius);
    for param in params {
        svg_circle = svg_circle.set(param.0, param.1)
    }
    svg_circle
}
