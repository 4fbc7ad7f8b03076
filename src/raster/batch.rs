//! Colored pixel lists handed to a [`PointRenderer`](crate::render::PointRenderer).

use crate::color::Rgba;
use crate::geometry::Pixel;

/// Parallel lists of pixels and their colors.
///
/// Every pixel carries its own color entry, even when many share a value,
/// so batches from different draws can be concatenated without losing tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelBatch {
    pixels: Vec<Pixel>,
    colors: Vec<Rgba>,
}

impl PixelBatch {
    /// Create an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty batch with room for `capacity` pixels.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pixels: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
        }
    }

    /// Tag every pixel with the same color.
    #[must_use]
    pub fn solid(pixels: Vec<Pixel>, color: Rgba) -> Self {
        let colors = vec![color; pixels.len()];
        Self { pixels, colors }
    }

    /// Append one pixel.
    pub fn push(&mut self, pixel: Pixel, color: Rgba) {
        self.pixels.push(pixel);
        self.colors.push(color);
    }

    /// Append another batch, keeping its per-pixel colors.
    pub fn append(&mut self, other: &mut Self) {
        self.pixels.append(&mut other.pixels);
        self.colors.append(&mut other.colors);
    }

    /// Number of pixels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the batch holds no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The pixel list.
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// The color list, index-aligned with [`pixels`](Self::pixels).
    #[must_use]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Iterate `(pixel, color)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Pixel, Rgba)> + '_ {
        self.pixels.iter().copied().zip(self.colors.iter().copied())
    }

    /// Flatten pixels to `[x0, y0, x1, y1, ...]` for array-based backends.
    #[must_use]
    pub fn flatten(&self) -> Vec<i32> {
        self.pixels.iter().flat_map(|p| [p.x, p.y]).collect()
    }
}

impl Extend<(Pixel, Rgba)> for PixelBatch {
    fn extend<T: IntoIterator<Item = (Pixel, Rgba)>>(&mut self, iter: T) {
        for (pixel, color) in iter {
            self.push(pixel, color);
        }
    }
}

impl FromIterator<(Pixel, Rgba)> for PixelBatch {
    fn from_iter<T: IntoIterator<Item = (Pixel, Rgba)>>(iter: T) -> Self {
        let mut batch = Self::new();
        batch.extend(iter);
        batch
    }
}
