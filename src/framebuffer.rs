//! Software display surface.
//!
//! An aligned RGBA pixel buffer that implements
//! [`PointRenderer`](crate::render::PointRenderer). Rows run top to bottom,
//! so `y` grows downward; pixels outside the surface are dropped.

use log::trace;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Pixel;
use crate::render::PointRenderer;

/// Row alignment in bytes.
const ROW_ALIGNMENT: usize = 64;

/// RGBA framebuffer with a background color.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, 4 bytes per pixel.
    pixels: Vec<u8>,
    /// Stride in bytes (may include padding for alignment).
    stride: usize,
    /// Color restored by [`PointRenderer::clear`].
    background: Rgba,
}

impl Framebuffer {
    /// Create a new framebuffer filled with white.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_background(width, height, Rgba::WHITE)
    }

    /// Create a framebuffer cleared to `background`.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn with_background(width: u32, height: u32, background: Rgba) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + ROW_ALIGNMENT - 1) & !(ROW_ALIGNMENT - 1);

        let mut fb = Self {
            width,
            height,
            pixels: vec![0; stride * (height as usize)],
            stride,
            background,
        };
        fb.fill(background);
        Ok(fb)
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The background color.
    #[must_use]
    pub const fn background(&self) -> Rgba {
        self.background
    }

    /// Fill every pixel with `color`.
    pub fn fill(&mut self, color: Rgba) {
        let rgba = color.to_array();
        let row_bytes = (self.width as usize) * 4;
        for row in self.pixels.chunks_exact_mut(self.stride) {
            for chunk in row[..row_bytes].chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let idx = self.pixel_index(x, y)?;
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Color at a signed pixel coordinate, `None` outside the surface.
    #[must_use]
    pub fn pixel_at(&self, pixel: Pixel) -> Option<Rgba> {
        let (x, y) = self.to_unsigned(pixel)?;
        self.get_pixel(x, y)
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(idx) = self.pixel_index(x, y) {
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
        }
    }

    /// Blend a color at a specific pixel coordinate using alpha blending.
    ///
    /// Uses the standard "over" compositing operation:
    /// `out = src * src_alpha + dst * dst_alpha * (1 - src_alpha)`
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        let Some(idx) = self.pixel_index(x, y) else {
            return;
        };
        if color.is_opaque() {
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
            return;
        }

        let src_a = f32::from(color.a) / 255.0;
        let dst_a = f32::from(self.pixels[idx + 3]) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        if out_a > 0.0 {
            let blend = |src: u8, dst: u8| -> u8 {
                let src_f = f32::from(src) / 255.0;
                let dst_f = f32::from(dst) / 255.0;
                let out = (src_f * src_a + dst_f * dst_a * (1.0 - src_a)) / out_a;
                (out * 255.0).round() as u8
            };

            self.pixels[idx] = blend(color.r, self.pixels[idx]);
            self.pixels[idx + 1] = blend(color.g, self.pixels[idx + 1]);
            self.pixels[idx + 2] = blend(color.b, self.pixels[idx + 2]);
            self.pixels[idx + 3] = (out_a * 255.0).round() as u8;
        }
    }

    /// Count pixels that differ from the background.
    #[must_use]
    pub fn painted_count(&self) -> usize {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.get_pixel(x, y) != Some(self.background))
            .count()
    }

    /// Get pixel data as a compact buffer without stride padding.
    ///
    /// This is what PNG encoders and canvas `ImageData` expect.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;
        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for row in self.pixels.chunks_exact(self.stride) {
            compact.extend_from_slice(&row[..row_bytes]);
        }
        compact
    }

    fn to_unsigned(&self, pixel: Pixel) -> Option<(u32, u32)> {
        let x = u32::try_from(pixel.x).ok()?;
        let y = u32::try_from(pixel.y).ok()?;
        (x < self.width && y < self.height).then_some((x, y))
    }

    /// Byte index of a pixel, `None` when out of bounds.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| (y as usize) * self.stride + (x as usize) * 4)
    }
}

impl PointRenderer for Framebuffer {
    fn draw_points(&mut self, pixels: &[Pixel], colors: &[Rgba]) -> Result<()> {
        if pixels.len() != colors.len() {
            return Err(Error::DataLengthMismatch {
                pixels: pixels.len(),
                colors: colors.len(),
            });
        }
        trace!("drawing {} points", pixels.len());

        for (&pixel, &color) in pixels.iter().zip(colors) {
            if let Some((x, y)) = self.to_unsigned(pixel) {
                self.blend_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self) {
        self.fill(self.background);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert_eq!(fb.get_pixel(99, 49), Some(Rgba::WHITE));
        assert_eq!(fb.painted_count(), 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
        assert!(Framebuffer::new(0, 0).is_err());
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.set_pixel(5, 5, Rgba::BLUE);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(100, 100), None);
    }

    #[test]
    fn test_blend_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.blend_pixel(5, 5, Rgba::new(255, 0, 0, 128));

        let result = fb.get_pixel(5, 5).unwrap();
        // Pinkish: red over white
        assert_eq!(result.r, 255);
        assert!(result.g > 100 && result.g < 140);
        assert_eq!(result.a, 255);
    }

    #[test]
    fn test_draw_points_drops_out_of_bounds() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        let pixels = [Pixel::new(-1, 3), Pixel::new(2, 3), Pixel::new(10, 3)];
        fb.draw_points(&pixels, &[Rgba::BLACK; 3]).unwrap();
        assert_eq!(fb.painted_count(), 1);
        assert_eq!(fb.pixel_at(Pixel::new(2, 3)), Some(Rgba::BLACK));
        assert_eq!(fb.pixel_at(Pixel::new(-1, 3)), None);
    }

    #[test]
    fn test_draw_points_length_mismatch() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        let err = fb.draw_points(&[Pixel::new(1, 1)], &[]).unwrap_err();
        assert!(matches!(err, Error::DataLengthMismatch { pixels: 1, colors: 0 }));
        assert_eq!(fb.painted_count(), 0);
    }

    #[test]
    fn test_clear_restores_background() {
        let mut fb = Framebuffer::with_background(8, 8, Rgba::BLACK).unwrap();
        fb.set_pixel(1, 1, Rgba::RED);
        PointRenderer::clear(&mut fb);
        assert_eq!(fb.get_pixel(1, 1), Some(Rgba::BLACK));
        assert_eq!(fb.painted_count(), 0);
    }

    #[test]
    fn test_compact_pixels() {
        let mut fb = Framebuffer::new(3, 2).unwrap();
        fb.set_pixel(2, 1, Rgba::new(1, 2, 3, 4));
        let compact = fb.to_compact_pixels();
        assert_eq!(compact.len(), 3 * 2 * 4);
        assert_eq!(&compact[20..24], &[1, 2, 3, 4]);
    }
}
