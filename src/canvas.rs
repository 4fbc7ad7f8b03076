//! Explicit drawing context.
//!
//! A [`Canvas`] owns a [`PointRenderer`] together with the current drawing
//! color, the curve step count used by batch commands, and the DPI factor
//! applied to text input. Every draw call rasterizes on the CPU and forwards
//! one [`PixelBatch`] to the renderer.

use log::debug;

use crate::color::Rgba;
use crate::curve::{CurveKind, CurveParams};
use crate::error::Result;
use crate::geometry::{Pixel, Point};
use crate::raster::{fill_polygon, rasterize_circle, rasterize_line, PixelBatch};
use crate::render::PointRenderer;

/// Default number of curve steps.
pub const DEFAULT_STEPS: usize = 8;

/// Drawing context wrapping a renderer.
#[derive(Debug, Clone)]
pub struct Canvas<R> {
    renderer: R,
    color: Rgba,
    steps: usize,
    dpi: f32,
}

impl<R: PointRenderer> Canvas<R> {
    /// Wrap a renderer, drawing in black with the default step count.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::prelude::*;
    ///
    /// let fb = Framebuffer::new(32, 32).unwrap();
    /// let mut canvas = Canvas::new(fb);
    /// canvas.draw_line(Point::new(0.0, 0.0), Point::new(4.0, 0.0)).unwrap();
    /// assert_eq!(canvas.renderer().painted_count(), 5);
    /// ```
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            color: Rgba::BLACK,
            steps: DEFAULT_STEPS,
            dpi: 1.0,
        }
    }

    /// Set the DPI factor applied to text-command coordinates.
    #[must_use]
    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Current drawing color.
    #[must_use]
    pub const fn color(&self) -> Rgba {
        self.color
    }

    /// Change the drawing color for subsequent draws.
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    /// Curve step count used by [`Canvas::draw_curve`].
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Change the curve step count.
    pub fn set_steps(&mut self, steps: usize) {
        self.steps = steps;
    }

    /// DPI factor.
    #[must_use]
    pub const fn dpi(&self) -> f32 {
        self.dpi
    }

    /// Borrow the renderer.
    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutably borrow the renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Unwrap the renderer.
    pub fn into_inner(self) -> R {
        self.renderer
    }

    /// Reset the display.
    pub fn clear(&mut self) {
        self.renderer.clear();
    }

    /// Draw pixels in the current color.
    pub fn draw_pixels(&mut self, pixels: Vec<Pixel>) -> Result<()> {
        self.draw_pixels_in(pixels, self.color)
    }

    /// Draw pixels in an explicit color.
    pub fn draw_pixels_in(&mut self, pixels: Vec<Pixel>, color: Rgba) -> Result<()> {
        self.draw_batch(&PixelBatch::solid(pixels, color))
    }

    /// Hand a prepared batch to the renderer.
    pub fn draw_batch(&mut self, batch: &PixelBatch) -> Result<()> {
        debug!("drawing {} pixels", batch.len());
        self.renderer.draw_batch(batch)
    }

    /// Rasterize and draw a line segment.
    pub fn draw_line(&mut self, from: Point, to: Point) -> Result<()> {
        self.draw_pixels(rasterize_line(from, to))
    }

    /// Rasterize and draw a circle outline.
    pub fn draw_circle(&mut self, center: Point, radius: f32) -> Result<()> {
        self.draw_pixels(rasterize_circle(center, radius))
    }

    /// Fill a convex polygon. Non-convex input draws nothing.
    pub fn draw_polygon(&mut self, points: &[Point]) -> Result<()> {
        let batch = fill_polygon(points, self.color);
        self.draw_batch(&batch)
    }

    /// Evaluate a curve with the canvas step count and plot its points.
    ///
    /// Curve points are plotted individually, not joined by line segments.
    ///
    /// # Errors
    ///
    /// Propagates curve evaluation errors (a step count out of range)
    /// before anything is drawn.
    pub fn draw_curve(&mut self, kind: CurveKind, control: &[Point], closed: bool) -> Result<()> {
        let params = CurveParams {
            steps: self.steps,
            closed,
        };
        self.draw_curve_with(kind, control, params)
    }

    /// Evaluate a curve with explicit parameters and plot its points.
    pub fn draw_curve_with(
        &mut self,
        kind: CurveKind,
        control: &[Point],
        params: CurveParams,
    ) -> Result<()> {
        let points = kind.evaluate(control, params)?;
        self.draw_pixels(points.into_iter().map(Point::round).collect())
    }
}
