//! Digital differential analyzer (DDA) line rasterization.

use crate::geometry::{Pixel, Point};

/// Rasterize the segment `p0 -> p1`, inclusive of both endpoints.
///
/// The major-axis extent `max(|dx|, |dy|)` sets the number of steps; each
/// step adds a constant increment to an unrounded accumulator, and only the
/// emitted sample is rounded, so rounding error never compounds. A
/// zero-length segment yields the single rounded start point. Non-finite
/// endpoints, or a span too long for `f32`, yield no pixels.
///
/// # Example
///
/// ```
/// use trueno_raster::geometry::{Pixel, Point};
/// use trueno_raster::raster::rasterize_line;
///
/// let pixels = rasterize_line(Point::new(0.0, 0.0), Point::new(4.0, 0.0));
/// assert_eq!(pixels.len(), 5);
/// assert_eq!(pixels[4], Pixel::new(4, 0));
/// ```
#[must_use]
pub fn rasterize_line(p0: Point, p1: Point) -> Vec<Pixel> {
    if !(p0.is_finite() && p1.is_finite()) {
        return Vec::new();
    }
    let d = p1 - p0;
    let extent = d.x.abs().max(d.y.abs());
    if !extent.is_finite() {
        return Vec::new();
    }
    let steps = extent.round() as usize;
    if steps == 0 {
        return vec![p0.round()];
    }

    let n = steps as f32;
    let inc = Point::new(d.x / n, d.y / n);
    let mut pixels = Vec::with_capacity(steps + 1);
    let mut cur = p0;
    pixels.push(cur.round());
    for _ in 0..steps {
        cur = cur + inc;
        pixels.push(cur.round());
    }
    pixels
}
