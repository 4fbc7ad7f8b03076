//! The point-renderer boundary.
//!
//! Rasterizers produce pixel lists; a [`PointRenderer`] is the only thing
//! that owns a display surface. The crate ships
//! [`Framebuffer`](crate::framebuffer::Framebuffer) as a software
//! implementation; hosts with a GPU or a browser canvas provide their own.

use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::Pixel;
use crate::raster::PixelBatch;

/// Displays colored pixels.
pub trait PointRenderer {
    /// Draw each pixel in its paired color without clearing prior content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`](crate::Error::DataLengthMismatch)
    /// when `pixels` and `colors` differ in length.
    fn draw_points(&mut self, pixels: &[Pixel], colors: &[Rgba]) -> Result<()>;

    /// Reset the surface to its background color.
    fn clear(&mut self);

    /// Draw a whole batch.
    fn draw_batch(&mut self, batch: &PixelBatch) -> Result<()> {
        self.draw_points(batch.pixels(), batch.colors())
    }
}

impl<R: PointRenderer + ?Sized> PointRenderer for &mut R {
    fn draw_points(&mut self, pixels: &[Pixel], colors: &[Rgba]) -> Result<()> {
        (**self).draw_points(pixels, colors)
    }

    fn clear(&mut self) {
        (**self).clear();
    }
}
