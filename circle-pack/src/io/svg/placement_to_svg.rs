use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::entities::{Canvas, PlacedCircle};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;

/// Draws the placed circles on the canvas, in the order given.
/// Circle colors are passed to the SVG as-is, so any CSS color is accepted.
pub fn placement_to_svg(
    circles: &[PlacedCircle],
    canvas: &Canvas,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let (width, height) = (canvas.width as f64, canvas.height as f64);
    let margin = 0.05 * f64::min(width, height);
    let stroke_width = f64::min(width, height) * 0.001;
    let font_size = f64::min(width, height) * 0.025;

    let canvas_group = Group::new()
        .set("id", "canvas")
        .add(svg_util::canvas_rect(
            canvas,
            &[
                ("fill", &*format!("{}", options.canvas_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "canvas, width: {}, height: {}",
            canvas.width, canvas.height
        )));

    let mut circles_group = Group::new().set("id", "circles");
    for c in circles {
        let fill = match options.monochrome {
            true => options.monochrome_fill.to_string(),
            false => c.color.clone(),
        };
        let svg_circle = svg_util::circle(c, &[("fill", &*fill)]).add(Title::new(format!(
            "circle, id: {}, label: {}, center: ({}, {}), r: {}",
            c.id, c.label, c.x, c.y, c.radius
        )));
        circles_group = circles_group.add(svg_circle);
    }

    let mut document = Document::new()
        .set("viewBox", (-margin, -margin, width + 2.0 * margin, height + 2.0 * margin))
        .add(canvas_group)
        .add(circles_group);

    if options.draw_ids {
        let ids_group = circles.iter().fold(Group::new().set("id", "ids"), |g, c| {
            g.add(
                Text::new(format!("{}", c.id))
                    .set("x", c.x)
                    .set("y", c.y)
                    .set("font-size", c.radius as f64)
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central"),
            )
        });
        document = document.add(ids_group);
    }

    if options.draw_label {
        let covered = circles.iter().map(|c| c.area()).sum::<f64>();
        let label = Text::new(format!(
            "width: {} | height: {} | circles: {} | coverage: {:.2}% | {}",
            canvas.width,
            canvas.height,
            circles.len(),
            covered / canvas.area() * 100.0,
            title
        ))
        .set("x", 0)
        .set("y", -0.5 * font_size)
        .set("font-size", font_size)
        .set("font-family", "monospace")
        .set("font-weight", "500");
        document = document.add(label);
    }

    document
}
