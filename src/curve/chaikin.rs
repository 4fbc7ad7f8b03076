//! Chaikin corner-cutting subdivision.

use super::MAX_CHAIKIN_ITERATIONS;
use crate::geometry::Point;

/// Point a quarter of the way from `from` toward `toward`.
#[inline]
fn quarter(from: Point, toward: Point) -> Point {
    from * 0.75 + toward * 0.25
}

/// One corner-cutting pass.
///
/// Each vertex is replaced by its quarter points toward the previous and the
/// next vertex, in that order. Open chains have no previous vertex at the
/// start and no next vertex at the end, so they shrink to `2n - 2` points;
/// closed chains wrap and yield `2n`.
#[must_use]
pub fn subdivide(points: &[Point], closed: bool) -> Vec<Point> {
    let n = points.len();
    if n < 2 {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity(2 * n);
    for (i, &p) in points.iter().enumerate() {
        let prev = if i > 0 {
            Some(points[i - 1])
        } else if closed {
            Some(points[n - 1])
        } else {
            None
        };
        let next = if i + 1 < n {
            Some(points[i + 1])
        } else if closed {
            Some(points[0])
        } else {
            None
        };

        if let Some(prev) = prev {
            out.push(quarter(p, prev));
        }
        if let Some(next) = next {
            out.push(quarter(p, next));
        }
    }
    out
}

/// Run exactly `iterations` subdivision passes.
///
/// Zero iterations returns the control points unchanged. There is no
/// convergence check. Intermediate points keep full `f32` precision between
/// passes instead of being snapped to the pixel grid after each one; only
/// the final points are rounded, when drawn.
///
/// `iterations` is clamped to [`MAX_CHAIKIN_ITERATIONS`].
#[must_use]
pub fn chaikin(control: &[Point], iterations: usize, closed: bool) -> Vec<Point> {
    let mut points = control.to_vec();
    for _ in 0..iterations.min(MAX_CHAIKIN_ITERATIONS) {
        points = subdivide(&points, closed);
    }
    points
}
