//! flash-raster: Random shape images, generated and encoded in memory (sans-IO).
//!
//! Produces one image per call through:
//! generate -> rasterize -> encode.
//!
//! This crate has **no I/O dependencies**. The caller passes in the
//! random generator and receives encoded bytes; serving them over HTTP
//! lives in `flash-server`.

pub mod circle;
pub mod encode;
pub mod fill;
pub mod generate;
pub mod kind;
pub mod rasterize;
pub mod triangle;
pub mod types;

pub use encode::{EncodedImage, Encoding};
pub use kind::FlashKind;
pub use types::{Color, Dimensions, Flash, FlashError, Point, RgbaImage, Shape};

use rand::Rng;

/// Generate, rasterize and encode one image on the fixed canvas.
///
/// # Errors
///
/// Returns [`FlashError::Encode`] if encoding fails.
pub fn render<R: Rng + ?Sized>(kind: FlashKind, rng: &mut R) -> Result<EncodedImage, FlashError> {
    render_with_dimensions(kind, rng, Dimensions::CANVAS)
}

/// [`render`] on a canvas of arbitrary size.
///
/// # Pipeline steps
///
/// 1. Generate the shape and color for `kind`
/// 2. Paint the kind's background, then the shape
/// 3. Encode in the kind's format
///
/// # Errors
///
/// Returns [`FlashError::Encode`] if encoding fails.
pub fn render_with_dimensions<R: Rng + ?Sized>(
    kind: FlashKind,
    rng: &mut R,
    dimensions: Dimensions,
) -> Result<EncodedImage, FlashError> {
    let flash = generate::generate(kind, rng, dimensions);
    let canvas = rasterize::rasterize(&flash, kind.background(), dimensions);
    encode::encode(&canvas, kind.encoding())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn decode(encoded: &EncodedImage) -> RgbaImage {
        image::load_from_memory_with_format(&encoded.bytes, encoded.encoding.image_format())
            .unwrap()
            .to_rgba8()
    }

    #[test]
    fn circle_round_trip_matches_generated_flash() {
        let dims = Dimensions::new(400, 330);
        let flash = generate::generate(FlashKind::Circle, &mut StdRng::seed_from_u64(7), dims);
        let Shape::Circle { center, radius } = flash.shape else {
            panic!("expected circle, got {:?}", flash.shape);
        };

        let encoded = render_with_dimensions(FlashKind::Circle, &mut StdRng::seed_from_u64(7), dims)
            .unwrap();
        assert_eq!(encoded.encoding, Encoding::Png);

        let img = decode(&encoded);
        assert_eq!(Color::from(*img.get_pixel(200, 165)), flash.color);
        // On the boundary, straight right of the center.
        let edge_x = u32::try_from(center.x).unwrap() + radius;
        assert_eq!(Color::from(*img.get_pixel(edge_x, 165)), flash.color);
        assert_eq!(Color::from(*img.get_pixel(edge_x + 1, 165)), Color::BLACK);
        assert_eq!(Color::from(*img.get_pixel(0, 0)), Color::BLACK);
    }

    #[test]
    fn triangle_round_trip_matches_generated_flash() {
        let dims = Dimensions::new(120, 80);
        let flash = generate::generate(FlashKind::Triangle, &mut StdRng::seed_from_u64(3), dims);
        let Shape::Triangle { vertices } = flash.shape else {
            panic!("expected triangle, got {:?}", flash.shape);
        };

        let encoded =
            render_with_dimensions(FlashKind::Triangle, &mut StdRng::seed_from_u64(3), dims)
                .unwrap();
        let img = decode(&encoded);

        let expected = rasterize::rasterize(&flash, Some(Color::BLACK), dims);
        assert_eq!(img, expected);
        if !triangle::is_degenerate(vertices) {
            assert!(img.pixels().any(|p| Color::from(*p) == flash.color));
        }
    }

    #[test]
    fn rectangle_is_one_uniform_color() {
        let dims = Dimensions::new(96, 64);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..2 {
            let encoded = render_with_dimensions(FlashKind::Rectangle, &mut rng, dims).unwrap();
            assert_eq!(encoded.mime_type(), "image/jpeg");

            let img = decode(&encoded);
            let first = *img.get_pixel(0, 0);
            for p in img.pixels() {
                for c in 0..3 {
                    assert!(p.0[c].abs_diff(first.0[c]) <= 2, "{p:?} differs from {first:?}");
                }
            }
        }
    }

    #[test]
    fn full_canvas_render_has_canvas_dimensions() {
        let encoded = render(FlashKind::Triangle, &mut StdRng::seed_from_u64(1)).unwrap();
        let img = decode(&encoded);
        assert_eq!(img.dimensions(), (1920, 937));
    }
}
