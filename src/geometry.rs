//! Geometric primitives for rasterization.
//!
//! [`Point`] is a real-valued position in device pixels (DPI already
//! applied); [`Pixel`] is the integer grid cell a rasterizer emits.

use std::ops::{Add, Mul, Sub};

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Dot product, treating both points as vectors.
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Magnitude of the 2D cross product (z component of the 3D one).
    #[must_use]
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Chebyshev (box) distance: the larger of the axis distances.
    #[must_use]
    pub fn chebyshev_distance(self, other: Self) -> f32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Round to the nearest pixel.
    ///
    /// Coordinates outside the `i32` range saturate.
    #[must_use]
    pub fn round(self) -> Pixel {
        Pixel::new(self.x.round() as i32, self.y.round() as i32)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Pixel> for Point {
    fn from(pixel: Pixel) -> Self {
        Self::new(pixel.x as f32, pixel.y as f32)
    }
}

/// An integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Pixel {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Pixel {
    /// Create a new pixel coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by a delta, saturating at the edges of the `i32` grid.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl From<(i32, i32)> for Pixel {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Integer axis-aligned bounding box, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    /// Smallest corner.
    pub min: Pixel,
    /// Largest corner.
    pub max: Pixel,
}

impl PixelBounds {
    /// Bounds covering every point: `floor` of the minima, `ceil` of the maxima.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self {
            min: Pixel::new(min_x.floor() as i32, min_y.floor() as i32),
            max: Pixel::new(max_x.ceil() as i32, max_y.ceil() as i32),
        })
    }

    /// Check if a pixel is inside the bounds.
    #[must_use]
    pub fn contains(&self, pixel: Pixel) -> bool {
        pixel.x >= self.min.x && pixel.x <= self.max.x && pixel.y >= self.min.y && pixel.y <= self.max.y
    }

    /// Number of grid points covered.
    #[must_use]
    pub fn area(&self) -> usize {
        let w = (self.max.x - self.min.x + 1).max(0) as usize;
        let h = (self.max.y - self.min.y + 1).max(0) as usize;
        w * h
    }
}

/// Barycentric coordinates `(alpha, beta, gamma)` of `p` in triangle `abc`.
///
/// `beta` and `gamma` are measured against the normals of edges `ac` and
/// `ab`; `alpha` is the remainder. Returns `None` when the triangle is
/// degenerate (zero area), since no barycentric frame exists.
#[must_use]
pub fn barycentric(p: Point, a: Point, b: Point, c: Point) -> Option<(f32, f32, f32)> {
    let ab = b - a;
    let ac = c - a;
    let ap = p - a;

    let n_ac = Point::new(a.y - c.y, c.x - a.x);
    let n_ab = Point::new(a.y - b.y, b.x - a.x);

    let beta_den = ab.dot(n_ac);
    let gamma_den = ac.dot(n_ab);
    if beta_den == 0.0 || gamma_den == 0.0 {
        return None;
    }

    let beta = ap.dot(n_ac) / beta_den;
    let gamma = ap.dot(n_ab) / gamma_den;
    Some((1.0 - beta - gamma, beta, gamma))
}
