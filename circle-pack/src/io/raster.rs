use std::io::Cursor;

use anyhow::{Context, Result};
use image::{ImageFormat, Rgb, RgbImage};
use log::warn;

use crate::entities::{Canvas, PlacedCircle};
use crate::io::Color;

/// Color of every circle when rendering in monochrome
pub const MONOCHROME_FILL: Color = Color::BLACK;

/// Color of the canvas
pub const BACKGROUND_FILL: Color = Color::WHITE;

/// Rasterizes the circles onto a white image of the canvas' dimensions, one pixel per unit.
///
/// Circles are painted in the order given, later circles over earlier ones.
/// With `monochrome` set, every circle is painted in [`MONOCHROME_FILL`] regardless of its color.
/// Unknown colors fall back to [`MONOCHROME_FILL`].
pub fn render_image(circles: &[PlacedCircle], canvas: &Canvas, monochrome: bool) -> RgbImage {
    let mut image = RgbImage::from_pixel(canvas.width, canvas.height, to_rgb(BACKGROUND_FILL));

    for circle in circles {
        let fill = match monochrome {
            true => MONOCHROME_FILL,
            false => Color::parse(&circle.color).unwrap_or_else(|| {
                warn!(
                    "[RENDER] unknown color {:?} for circle {}, drawing it in {}",
                    circle.color, circle.id, MONOCHROME_FILL
                );
                MONOCHROME_FILL
            }),
        };
        fill_circle(&mut image, circle, to_rgb(fill));
    }
    image
}

/// Renders the circles (see [`render_image`]) and encodes the image as PNG.
pub fn render_png(circles: &[PlacedCircle], canvas: &Canvas, monochrome: bool) -> Result<Vec<u8>> {
    let image = render_image(circles, canvas, monochrome);
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .context("could not encode png")?;
    Ok(bytes)
}

fn fill_circle(image: &mut RgbImage, circle: &PlacedCircle, fill: Rgb<u8>) {
    let (cx, cy, r) = (circle.x as i64, circle.y as i64, circle.radius as i64);
    let (w, h) = (image.width() as i64, image.height() as i64);
    let sq_r = r * r;

    for py in i64::max(cy - r, 0)..=i64::min(cy + r, h - 1) {
        for px in i64::max(cx - r, 0)..=i64::min(cx + r, w - 1) {
            let (dx, dy) = (px - cx, py - cy);
            if dx * dx + dy * dy <= sq_r {
                image.put_pixel(px as u32, py as u32, fill);
            }
        }
    }
}

fn to_rgb(Color(r, g, b): Color) -> Rgb<u8> {
    Rgb([r, g, b])
}
