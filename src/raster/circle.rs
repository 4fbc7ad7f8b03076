//! Midpoint circle rasterization.

use crate::geometry::{Pixel, Point};

/// Rasterize a circle outline using the integer midpoint algorithm.
///
/// Center and radius are rounded to integers first; a negative radius is
/// treated by magnitude. The four cardinal points are emitted once, then
/// each step of the octant walk emits its eight reflections. A zero radius
/// yields four coincident center pixels. A non-finite center or radius
/// yields no pixels, and pixels past the `i32` grid saturate at its edge.
///
/// # Example
///
/// ```
/// use trueno_raster::geometry::{Pixel, Point};
/// use trueno_raster::raster::rasterize_circle;
///
/// let pixels = rasterize_circle(Point::new(0.0, 0.0), 5.0);
/// assert!(pixels.contains(&Pixel::new(0, 5)));
/// assert!(pixels.contains(&Pixel::new(-5, 0)));
/// ```
#[must_use]
pub fn rasterize_circle(center: Point, radius: f32) -> Vec<Pixel> {
    if !(center.is_finite() && radius.is_finite()) {
        return Vec::new();
    }
    let c = center.round();
    let r = radius.round().abs() as i32;

    let mut pixels = vec![c.offset(0, r), c.offset(0, -r), c.offset(r, 0), c.offset(-r, 0)];

    let (mut i, mut j) = (0, r);
    // Decision variable in i64: 2 * j overflows i32 for large radii
    let mut d = 1 - i64::from(r);
    while i < j {
        if d >= 0 {
            j -= 1;
            d -= 2 * i64::from(j);
        }
        i += 1;
        d += 2 * i64::from(i) + 1;

        pixels.extend_from_slice(&[
            c.offset(i, j),
            c.offset(i, -j),
            c.offset(-i, j),
            c.offset(-i, -j),
            c.offset(j, i),
            c.offset(j, -i),
            c.offset(-j, i),
            c.offset(-j, -i),
        ]);
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_non_finite_input_yields_nothing() {
        assert!(rasterize_circle(Point::new(f32::INFINITY, 0.0), 5.0).is_empty());
        assert!(rasterize_circle(Point::new(0.0, f32::NAN), 5.0).is_empty());
        assert!(rasterize_circle(Point::new(0.0, 0.0), f32::INFINITY).is_empty());
    }

    #[test]
    fn test_center_at_grid_edge_saturates() {
        let pixels = rasterize_circle(Point::new(2_147_483_647.0, 0.0), 5.0);
        assert_eq!(pixels.len(), rasterize_circle(Point::new(0.0, 0.0), 5.0).len());
        assert!(pixels.iter().all(|p| p.x >= i32::MAX - 5));
        assert!(pixels.contains(&Pixel::new(i32::MAX, 5)));
    }

    #[test]
    fn test_cardinal_points() {
        let pixels = rasterize_circle(Point::new(0.0, 0.0), 5.0);
        for p in [Pixel::new(0, 5), Pixel::new(0, -5), Pixel::new(5, 0), Pixel::new(-5, 0)] {
            assert!(pixels.contains(&p), "missing {p:?}");
        }
    }

    #[test]
    fn test_pixels_near_radius() {
        let center = Point::new(20.0, 30.0);
        for r in [1.0, 3.0, 5.0, 12.0, 40.0] {
            for p in rasterize_circle(center, r) {
                let dist = center.distance(p.into()).round();
                assert!((dist - r).abs() <= 1.0, "r={r} pixel {p:?} at distance {dist}");
            }
        }
    }

    #[test]
    fn test_eightfold_symmetry() {
        let pixels: HashSet<_> = rasterize_circle(Point::new(0.0, 0.0), 9.0).into_iter().collect();
        for p in &pixels {
            for (x, y) in [
                (p.x, -p.y),
                (-p.x, p.y),
                (-p.x, -p.y),
                (p.y, p.x),
                (-p.y, p.x),
                (p.y, -p.x),
                (-p.y, -p.x),
            ] {
                assert!(pixels.contains(&Pixel::new(x, y)), "missing reflection ({x},{y}) of {p:?}");
            }
        }
    }

    #[test]
    fn test_zero_radius() {
        let pixels = rasterize_circle(Point::new(3.4, 4.6), 0.0);
        assert_eq!(pixels, vec![Pixel::new(3, 5); 4]);
    }

    #[test]
    fn test_negative_radius_uses_magnitude() {
        assert_eq!(
            rasterize_circle(Point::new(0.0, 0.0), -4.0),
            rasterize_circle(Point::new(0.0, 0.0), 4.0)
        );
    }

    #[test]
    fn test_radius_is_rounded() {
        let pixels = rasterize_circle(Point::new(0.0, 0.0), 4.6);
        assert!(pixels.contains(&Pixel::new(5, 0)));
    }
}
