//! Randomized shape parameters.
//!
//! Every function takes the random generator explicitly. Callers own the
//! generator (the server keeps one per worker thread), so there is no
//! process-wide random state and no per-request reseeding.

use rand::Rng;

use crate::kind::FlashKind;
use crate::types::{Color, Dimensions, Flash, Point, Shape};

/// Smallest circle radius, inclusive.
pub const MIN_RADIUS: u32 = 50;

/// Largest circle radius, exclusive.
pub const MAX_RADIUS: u32 = 150;

/// An opaque color with each RGB channel uniform over `[0, 256)`.
#[must_use]
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::opaque(rng.r#gen(), rng.r#gen(), rng.r#gen())
}

/// A circle radius uniform over `[MIN_RADIUS, MAX_RADIUS)`.
#[must_use]
pub fn random_radius<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(MIN_RADIUS..MAX_RADIUS)
}

/// A point uniform over the canvas: `x` in `[0, width)`, `y` in `[0, height)`.
///
/// A zero-sized dimension yields `0` on that axis.
#[must_use]
pub fn random_point<R: Rng + ?Sized>(rng: &mut R, dimensions: Dimensions) -> Point {
    Point::new(
        random_coordinate(rng, dimensions.width),
        random_coordinate(rng, dimensions.height),
    )
}

fn random_coordinate<R: Rng + ?Sized>(rng: &mut R, extent: u32) -> i32 {
    let extent = i32::try_from(extent).unwrap_or(i32::MAX);
    if extent <= 0 {
        return 0;
    }
    rng.gen_range(0..extent)
}

/// Produce the shape and color for one image of the given kind.
///
/// Geometry is drawn before the color.
#[must_use]
pub fn generate<R: Rng + ?Sized>(kind: FlashKind, rng: &mut R, dimensions: Dimensions) -> Flash {
    let shape = match kind {
        FlashKind::Circle => Shape::Circle {
            center: dimensions.center(),
            radius: random_radius(rng),
        },
        FlashKind::Rectangle => Shape::Rectangle,
        FlashKind::Triangle => Shape::Triangle {
            vertices: [
                random_point(rng, dimensions),
                random_point(rng, dimensions),
                random_point(rng, dimensions),
            ],
        },
    };

    Flash {
        shape,
        color: random_color(rng),
    }
}
