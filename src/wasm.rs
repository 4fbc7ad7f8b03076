//! WebAssembly bindings for trueno-raster.
//!
//! Exposes a [`RasterCanvas`] that owns a framebuffer, a canvas and a
//! control-point session. The host forwards clicks and settings changes and
//! blits [`RasterCanvas::rgba`] into a 2D context.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { RasterCanvas } from 'trueno-raster';
//!
//! await init();
//!
//! const dpi = window.devicePixelRatio;
//! const raster = new RasterCanvas(canvas.width, canvas.height, dpi);
//! canvas.onclick = (e) => {
//!     raster.click(e.offsetX * dpi, e.offsetY * dpi);
//!     const img = new ImageData(
//!         new Uint8ClampedArray(raster.rgba()), canvas.width, canvas.height);
//!     ctx.putImageData(img, 0, 0);
//! };
//! ```

use wasm_bindgen::prelude::*;

use crate::canvas::Canvas;
use crate::command::run_line;
use crate::curve::CurveKind;
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::output::PngEncoder;
use crate::session::{Session, SessionEvent};

fn to_js(e: &Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn report(e: &Error) {
    web_sys::console::warn_1(&to_js(e));
}

/// Interactive rasterization surface for the browser.
#[wasm_bindgen]
pub struct RasterCanvas {
    canvas: Canvas<Framebuffer>,
    session: Session,
}

#[wasm_bindgen]
impl RasterCanvas {
    /// Create a white surface of `width` x `height` device pixels.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, dpi: f32) -> Result<RasterCanvas, JsValue> {
        let fb = Framebuffer::new(width, height).map_err(|e| to_js(&e))?;
        Ok(Self {
            canvas: Canvas::new(fb).with_dpi(dpi),
            session: Session::new(),
        })
    }

    /// Add or remove a control point at device-pixel coordinates.
    pub fn click(&mut self, x: f32, y: f32) {
        self.apply(SessionEvent::Click(Point::new(x, y)));
    }

    /// Switch the curve strategy (`chaikin` or `bezier`).
    pub fn set_curve_type(&mut self, kind: &str) -> bool {
        match kind.parse::<CurveKind>() {
            Ok(kind) => self.apply(SessionEvent::SetCurveType(kind)),
            Err(e) => {
                report(&e);
                false
            }
        }
    }

    /// Change the step count.
    pub fn set_steps(&mut self, steps: usize) {
        self.apply(SessionEvent::SetStepSize(steps));
    }

    /// Toggle the control polygon.
    pub fn set_show_lines(&mut self, show: bool) {
        self.apply(SessionEvent::SetShowLines(show));
    }

    /// Run a session event or batch command line.
    ///
    /// Returns `false` for invalid input.
    pub fn command(&mut self, line: &str) -> bool {
        match run_line(line, &mut self.canvas, &mut self.session) {
            Ok(()) => true,
            Err(e) => {
                report(&e);
                false
            }
        }
    }

    /// Compact RGBA pixels for `ImageData`.
    pub fn rgba(&self) -> Vec<u8> {
        self.canvas.renderer().to_compact_pixels()
    }

    /// The current surface as PNG bytes.
    pub fn png(&self) -> Result<Vec<u8>, JsValue> {
        PngEncoder::to_bytes(self.canvas.renderer()).map_err(|e| to_js(&e))
    }

    /// Number of control points in the session.
    pub fn point_count(&self) -> usize {
        self.session.points().len()
    }
}

impl RasterCanvas {
    fn apply(&mut self, event: SessionEvent) -> bool {
        match self.session.handle(&mut self.canvas, event) {
            Ok(()) => true,
            Err(e) => {
                report(&e);
                false
            }
        }
    }
}
