//! Shared types for the flash rasterization pipeline.

/// Re-export `RgbaImage` so downstream crates can hold a canvas
/// without depending on `image` directly.
pub use image::RgbaImage;

/// Canvas width in pixels, shared by every flash server.
pub const CANVAS_WIDTH: u32 = 1920;

/// Canvas height in pixels, shared by every flash server.
pub const CANVAS_HEIGHT: u32 = 937;

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// The fixed canvas every server renders into.
    pub const CANVAS: Self = Self {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
    };

    /// Create new dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Geometric center, using integer division.
    #[must_use]
    pub fn center(self) -> Point {
        Point::new(
            i32::try_from(self.width / 2).unwrap_or(i32::MAX),
            i32::try_from(self.height / 2).unwrap_or(i32::MAX),
        )
    }
}

/// A 2D point in integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal position (pixels from left edge).
    pub x: i32,
    /// Vertical position (pixels from top edge).
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque black, the circle and triangle background.
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    /// Create a fully opaque color.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }

    /// Convert to an `image` pixel.
    #[must_use]
    pub const fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(pixel: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Self { r, g, b, a }
    }
}

/// Geometry of one generated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Filled disc; pixels within `radius` of `center` (inclusive).
    Circle { center: Point, radius: u32 },
    /// The whole canvas.
    Rectangle,
    /// Filled triangle, edges included except on the bounding box's
    /// max row and column. May be degenerate.
    Triangle { vertices: [Point; 3] },
}

/// A shape descriptor together with its fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flash {
    pub shape: Shape,
    pub color: Color,
}

/// Inclusive pixel rectangle that lies entirely inside a canvas.
///
/// Rasterizers use this to visit only the pixels a shape can touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl PixelBounds {
    /// Clip the inclusive rectangle `[min_x, max_x] x [min_y, max_y]` to
    /// `dimensions`.
    ///
    /// Returns `None` when nothing of the rectangle lies on the canvas.
    #[must_use]
    pub fn clipped(min_x: i64, min_y: i64, max_x: i64, max_y: i64, dimensions: Dimensions) -> Option<Self> {
        let min_x = min_x.max(0);
        let min_y = min_y.max(0);
        let max_x = max_x.min(i64::from(dimensions.width) - 1);
        let max_y = max_y.min(i64::from(dimensions.height) - 1);

        if min_x > max_x || min_y > max_y {
            return None;
        }

        Some(Self {
            min_x: u32::try_from(min_x).ok()?,
            min_y: u32::try_from(min_y).ok()?,
            max_x: u32::try_from(max_x).ok()?,
            max_y: u32::try_from(max_y).ok()?,
        })
    }

    /// Every `(x, y)` in the bounds, row by row.
    pub fn pixels(self) -> impl Iterator<Item = (u32, u32)> {
        (self.min_y..=self.max_y).flat_map(move |y| (self.min_x..=self.max_x).map(move |x| (x, y)))
    }
}

/// Errors that can occur while producing an encoded image.
///
/// Generation and rasterization cannot fail; only encoding can.
#[derive(Debug, thiserror::Error)]
pub enum FlashError {
    /// The image encoder rejected the canvas or failed to write.
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_center_uses_integer_division() {
        assert_eq!(Dimensions::CANVAS.center(), Point::new(960, 468));
        assert_eq!(Dimensions::new(5, 3).center(), Point::new(2, 1));
    }

    #[test]
    fn opaque_colors_have_full_alpha() {
        assert_eq!(Color::opaque(1, 2, 3).a, 255);
        assert_eq!(Color::BLACK.to_rgba(), image::Rgba([0, 0, 0, 255]));
        assert_eq!(Color::from(image::Rgba([9, 8, 7, 6])), Color { r: 9, g: 8, b: 7, a: 6 });
    }

    #[test]
    fn bounds_inside_canvas_are_unchanged() {
        let bounds = PixelBounds::clipped(2, 3, 5, 7, Dimensions::new(10, 10));
        assert_eq!(
            bounds,
            Some(PixelBounds {
                min_x: 2,
                min_y: 3,
                max_x: 5,
                max_y: 7
            })
        );
    }

    #[test]
    fn bounds_are_clipped_to_canvas_edges() {
        let bounds = PixelBounds::clipped(-4, -1, 40, 12, Dimensions::new(10, 10));
        assert_eq!(
            bounds,
            Some(PixelBounds {
                min_x: 0,
                min_y: 0,
                max_x: 9,
                max_y: 9
            })
        );
    }

    #[test]
    fn bounds_entirely_off_canvas_are_none() {
        assert_eq!(PixelBounds::clipped(20, 0, 30, 5, Dimensions::new(10, 10)), None);
        assert_eq!(PixelBounds::clipped(0, -9, 5, -1, Dimensions::new(10, 10)), None);
        assert_eq!(PixelBounds::clipped(0, 0, 0, 0, Dimensions::new(0, 0)), None);
    }

    #[test]
    fn bounds_pixels_visit_every_cell_once() {
        let bounds = PixelBounds::clipped(1, 1, 3, 2, Dimensions::new(10, 10));
        let pixels: Vec<_> = bounds.into_iter().flat_map(PixelBounds::pixels).collect();
        assert_eq!(pixels, vec![(1, 1), (2, 1), (3, 1), (1, 2), (2, 2), (3, 2)]);
    }
}
