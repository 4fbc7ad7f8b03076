//! # Trueno-Raster
//!
//! CPU rasterization for teaching computer graphics: lines, circles, filled
//! convex polygons and Chaikin/Bezier curves, driven by an interactive
//! control-point session or a small text command language.
//!
//! Built on the [trueno](https://crates.io/crates/trueno) core library for the
//! Bernstein weighted sums. Every algorithm produces plain pixel lists; a
//! [`PointRenderer`](render::PointRenderer) displays them.
//!
//! ## Features
//!
//! - **Pure Rust**: No GPU program setup or browser dependencies in the core
//! - **Explicit state**: A [`Canvas`](canvas::Canvas) carries color and step
//!   count, a [`Session`](session::Session) carries the control points
//! - **Pluggable display**: Software [`Framebuffer`](framebuffer::Framebuffer)
//!   with PNG output, or any custom renderer
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let mut canvas = Canvas::new(Framebuffer::new(200, 100).unwrap());
//! let mut session = Session::new();
//!
//! for (x, y) in [(20.0, 80.0), (100.0, 10.0), (180.0, 80.0)] {
//!     session.handle(&mut canvas, SessionEvent::Click(Point::new(x, y))).unwrap();
//! }
//! assert_eq!(session.state(), SessionState::Active);
//!
//! let png = PngEncoder::to_bytes(canvas.renderer()).unwrap();
//! assert_eq!(&png[1..4], b"PNG");
//! ```
//!
//! ## Feature Flags
//!
//! - `cli`: The `trueno-raster` command line front end
//! - `wasm`: WebAssembly bindings
//! - `parallel`: Enable parallel processing in trueno

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, pixels, barycentric coordinates).
pub mod geometry;

// ============================================================================
// Algorithm Modules
// ============================================================================

/// Line, circle, triangle and polygon rasterizers.
pub mod raster;

/// Chaikin and Bezier curve evaluation.
pub mod curve;

// ============================================================================
// Rendering Modules
// ============================================================================

/// The point renderer trait.
pub mod render;

/// Drawing context over a renderer.
pub mod canvas;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Interaction Modules
// ============================================================================

/// Control-point editing session.
pub mod session;

/// Batch command and session event grammars.
pub mod command;

/// YAML configuration.
pub mod config;

/// WebAssembly bindings for browser usage.
#[cfg(feature = "wasm")]
#[cfg_attr(docsrs, doc(cfg(feature = "wasm")))]
pub mod wasm;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::color::Rgba;
    pub use crate::command::{parse_command, parse_event, Command};
    pub use crate::config::Config;
    pub use crate::curve::{CurveKind, CurveParams};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Pixel, Point};
    pub use crate::output::PngEncoder;
    pub use crate::raster::{
        fill_polygon, fill_triangle, rasterize_circle, rasterize_line, PixelBatch,
    };
    pub use crate::render::PointRenderer;
    pub use crate::session::{RemovalPolicy, Session, SessionEvent, SessionState};
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
