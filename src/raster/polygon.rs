//! Convex polygon fill by fan triangulation.

use log::debug;

use crate::color::Rgba;
use crate::geometry::Point;

use super::{fill_triangle, PixelBatch};

/// Whether the turn at `v` (coming from `prev`, heading to `next`) is convex.
///
/// Positive cross product of `next - v` and `prev - v`; collinear vertices
/// are not convex.
#[must_use]
pub fn is_convex_turn(prev: Point, v: Point, next: Point) -> bool {
    (next - v).cross(prev - v) > 0.0
}

/// Whether the closed polygon is convex with the accepted winding.
///
/// Every wrapped vertex triple must turn the same (positive) way, so a
/// polygon listed in the opposite winding is rejected too. Fewer than
/// three vertices is never convex.
#[must_use]
pub fn is_convex(points: &[Point]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    (0..n).all(|i| is_convex_turn(points[(i + n - 1) % n], points[i], points[(i + 1) % n]))
}

/// Split a convex polygon into the fan `(v0, vk, vk+1)`, `k = 1..n-2`.
///
/// Returns no triangles for a non-convex polygon.
#[must_use]
pub fn fan_triangulate(points: &[Point]) -> Vec<[Point; 3]> {
    if !is_convex(points) {
        return Vec::new();
    }
    points.windows(2).skip(1).map(|w| [points[0], w[0], w[1]]).collect()
}

/// Fill a convex polygon with `color`.
///
/// Non-convex polygons are dropped silently and yield an empty batch.
/// Pixels on the internal fan diagonals are emitted once per triangle.
#[must_use]
pub fn fill_polygon(points: &[Point], color: Rgba) -> PixelBatch {
    let triangles = fan_triangulate(points);
    if triangles.is_empty() {
        debug!("polygon with {} vertices is not convex, skipping fill", points.len());
        return PixelBatch::new();
    }

    let mut batch = PixelBatch::new();
    for [a, b, c] in triangles {
        batch.append(&mut fill_triangle(a, b, c, color));
    }
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Pixel;
    use std::collections::HashSet;

    fn pts(coords: &[(f32, f32)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn square() -> Vec<Point> {
        pts(&[(0.0, 0.0), (16.0, 0.0), (16.0, 16.0), (0.0, 16.0)])
    }

    #[test]
    fn test_square_is_convex() {
        assert!(is_convex(&square()));
    }

    #[test]
    fn test_reversed_square_is_rejected() {
        let mut sq = square();
        sq.reverse();
        assert!(!is_convex(&sq));
    }

    #[test]
    fn test_arrow_is_not_convex() {
        let arrow = pts(&[(0.0, 0.0), (20.0, 10.0), (0.0, 20.0), (8.0, 10.0)]);
        assert!(!is_convex(&arrow));
        assert!(fill_polygon(&arrow, Rgba::BLACK).is_empty());
    }

    #[test]
    fn test_too_few_vertices() {
        assert!(!is_convex(&pts(&[(0.0, 0.0), (1.0, 1.0)])));
        assert!(fill_polygon(&[], Rgba::BLACK).is_empty());
    }

    #[test]
    fn test_collinear_vertex_is_not_convex() {
        let poly = pts(&[(0.0, 0.0), (8.0, 0.0), (16.0, 0.0), (16.0, 16.0), (0.0, 16.0)]);
        assert!(!is_convex(&poly));
    }

    #[test]
    fn test_fan_triangulation() {
        let pentagon = pts(&[(10.0, 0.0), (20.0, 8.0), (16.0, 20.0), (4.0, 20.0), (0.0, 8.0)]);
        assert!(is_convex(&pentagon));
        let tris = fan_triangulate(&pentagon);
        assert_eq!(tris.len(), 3);
        for (k, tri) in tris.iter().enumerate() {
            assert_eq!(tri[0], pentagon[0]);
            assert_eq!(tri[1], pentagon[k + 1]);
            assert_eq!(tri[2], pentagon[k + 2]);
        }
    }

    #[test]
    fn test_fill_square() {
        let batch = fill_polygon(&square(), Rgba::GREEN);
        let unique: HashSet<Pixel> = batch.pixels().iter().copied().collect();
        assert_eq!(unique.len(), 17 * 17);
        // The diagonal is emitted by both triangles
        assert_eq!(batch.len(), 17 * 17 + 17);
        assert!(batch.colors().iter().all(|&c| c == Rgba::GREEN));
    }
}
