//! Brute-force triangle fill.

use crate::color::Rgba;
use crate::geometry::{barycentric, Pixel, PixelBounds, Point};

use super::PixelBatch;

/// Whether `p` lies in triangle `abc`, edges included.
///
/// The inclusion threshold is exactly zero with no epsilon slack, so
/// points on an edge are inside and float noise near an edge can flip the
/// result either way.
#[must_use]
pub fn in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    matches!(
        barycentric(p, a, b, c),
        Some((alpha, beta, gamma)) if alpha >= 0.0 && beta >= 0.0 && gamma >= 0.0
    )
}

/// Fill triangle `abc` with `color`.
///
/// Tests every integer grid point of the bounding box (`floor` of the
/// minima to `ceil` of the maxima, column-major) against the barycentric
/// inclusion rule. Cost is proportional to the box area. Triangles sharing
/// an edge both emit the pixels on it. A zero-area triangle fills nothing.
#[must_use]
pub fn fill_triangle(a: Point, b: Point, c: Point, color: Rgba) -> PixelBatch {
    let Some(bounds) = PixelBounds::enclosing(&[a, b, c]) else {
        return PixelBatch::new();
    };

    let mut batch = PixelBatch::new();
    for i in bounds.min.x..=bounds.max.x {
        for j in bounds.min.y..=bounds.max.y {
            let p = Pixel::new(i, j);
            if in_triangle(p.into(), a, b, c) {
                batch.push(p, color);
            }
        }
    }
    batch
}
