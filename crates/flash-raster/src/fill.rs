//! Whole-canvas fills: backgrounds and the rectangle flash.

use image::RgbaImage;

use crate::types::Color;

/// Overwrite every pixel of `canvas` with `color`.
pub fn fill(canvas: &mut RgbaImage, color: Color) {
    let pixel = color.to_rgba();
    for p in canvas.pixels_mut() {
        *p = pixel;
    }
}
