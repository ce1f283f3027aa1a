//! Filled triangle rasterization via the edge sign test.
//!
//! For vertices `p1, p2, p3` and a query point `p`, the three cross
//! products `sign(p, p1, p2)`, `sign(p, p2, p3)` and `sign(p, p3, p1)` are
//! all non-negative or all non-positive exactly when `p` is inside the
//! triangle or on one of its edges. Edge points count as inside.
//!
//! Rasterization scans the half-open bounding box `[min, max)` of the
//! vertices, so the max column and max row are never painted, not even
//! the vertices lying on them.
//!
//! A triangle with zero signed area (coincident or collinear vertices)
//! covers no pixels at all.

use image::RgbaImage;

use crate::types::{Color, Dimensions, PixelBounds, Point};

/// Cross product of `a - c` and `b - c`.
///
/// Positive when `a`, `b`, `c` turn one way, negative the other way,
/// zero when collinear.
#[must_use]
pub fn sign(a: Point, b: Point, c: Point) -> i64 {
    let (ax, ay) = (i64::from(a.x), i64::from(a.y));
    let (bx, by) = (i64::from(b.x), i64::from(b.y));
    let (cx, cy) = (i64::from(c.x), i64::from(c.y));
    (ax - cx) * (by - cy) - (bx - cx) * (ay - cy)
}

/// Whether the vertices span zero area.
#[must_use]
pub fn is_degenerate(vertices: [Point; 3]) -> bool {
    let [p1, p2, p3] = vertices;
    sign(p1, p2, p3) == 0
}

/// Point-in-triangle test with an inclusive boundary.
///
/// This is the raw sign test; it does not special-case degenerate
/// triangles (use [`draw_triangle`] for that).
#[must_use]
pub fn contains(vertices: [Point; 3], p: Point) -> bool {
    let [p1, p2, p3] = vertices;
    let d1 = sign(p, p1, p2);
    let d2 = sign(p, p2, p3);
    let d3 = sign(p, p3, p1);

    let has_neg = d1 < 0 || d2 < 0 || d3 < 0;
    let has_pos = d1 > 0 || d2 > 0 || d3 > 0;
    !(has_neg && has_pos)
}

/// Bounding box of the vertices, excluding the max row and column,
/// clipped to `dimensions`.
///
/// `None` when the box is empty, which includes every triangle whose
/// vertices share one row or one column.
#[must_use]
pub fn bounds(vertices: [Point; 3], dimensions: Dimensions) -> Option<PixelBounds> {
    let xs = vertices.map(|p| i64::from(p.x));
    let ys = vertices.map(|p| i64::from(p.y));
    PixelBounds::clipped(
        xs.into_iter().min()?,
        ys.into_iter().min()?,
        xs.into_iter().max()? - 1,
        ys.into_iter().max()? - 1,
        dimensions,
    )
}

/// Paint every pixel of the triangle with `color`; other pixels are
/// untouched. Degenerate triangles paint nothing.
pub fn draw_triangle(canvas: &mut RgbaImage, vertices: [Point; 3], color: Color) {
    if is_degenerate(vertices) {
        return;
    }

    let dimensions = Dimensions::new(canvas.width(), canvas.height());
    let Some(bounds) = bounds(vertices, dimensions) else {
        return;
    };

    let pixel = color.to_rgba();
    for (x, y) in bounds.pixels() {
        // Bounds lie inside the canvas, whose sides fit in i32.
        let (Ok(px), Ok(py)) = (i32::try_from(x), i32::try_from(y)) else {
            continue;
        };
        if contains(vertices, Point::new(px, py)) {
            canvas.put_pixel(x, y, pixel);
        }
    }
}
