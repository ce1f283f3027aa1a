//! Turn a [`Flash`] into a finished canvas.

use image::RgbaImage;

use crate::circle::draw_circle;
use crate::fill::fill;
use crate::triangle::draw_triangle;
use crate::types::{Color, Dimensions, Flash, Shape};

/// Allocate a canvas, paint `background` if given, then draw the shape.
///
/// Without a background the canvas starts fully transparent; only the
/// rectangle, which covers every pixel, is meant to be drawn that way.
#[must_use = "returns the rasterized canvas"]
pub fn rasterize(flash: &Flash, background: Option<Color>, dimensions: Dimensions) -> RgbaImage {
    let mut canvas = RgbaImage::new(dimensions.width, dimensions.height);
    if let Some(background) = background {
        fill(&mut canvas, background);
    }

    match flash.shape {
        Shape::Circle { center, radius } => draw_circle(&mut canvas, center, radius, flash.color),
        Shape::Rectangle => fill(&mut canvas, flash.color),
        Shape::Triangle { vertices } => draw_triangle(&mut canvas, vertices, flash.color),
    }

    canvas
}
