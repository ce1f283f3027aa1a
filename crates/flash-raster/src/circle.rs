//! Filled circle rasterization.
//!
//! A pixel belongs to the circle iff its squared offset from the center
//! is at most `radius²`. Integer arithmetic, inclusive boundary, no
//! anti-aliasing.

use image::RgbaImage;

use crate::types::{Color, Dimensions, PixelBounds, Point};

/// Whether pixel `(x, y)` lies inside or on the circle.
#[must_use]
pub fn contains(center: Point, radius: u32, x: i64, y: i64) -> bool {
    let dx = x - i64::from(center.x);
    let dy = y - i64::from(center.y);
    let radius = i64::from(radius);
    dx * dx + dy * dy <= radius * radius
}

/// The circle's bounding box clipped to `dimensions`.
#[must_use]
pub fn bounds(center: Point, radius: u32, dimensions: Dimensions) -> Option<PixelBounds> {
    let (cx, cy, r) = (i64::from(center.x), i64::from(center.y), i64::from(radius));
    PixelBounds::clipped(cx - r, cy - r, cx + r, cy + r, dimensions)
}

/// Paint every pixel of the circle with `color`; other pixels are untouched.
pub fn draw_circle(canvas: &mut RgbaImage, center: Point, radius: u32, color: Color) {
    let dimensions = Dimensions::new(canvas.width(), canvas.height());
    let Some(bounds) = bounds(center, radius, dimensions) else {
        return;
    };

    let pixel = color.to_rgba();
    for (x, y) in bounds.pixels() {
        if contains(center, radius, i64::from(x), i64::from(y)) {
            canvas.put_pixel(x, y, pixel);
        }
    }
}
