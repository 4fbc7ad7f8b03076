//! Interactive control-point editing.
//!
//! A [`Session`] holds the ordered control points of one curve and redraws
//! the whole scene on every click or settings change:
//!
//! ```text
//!   Empty ──click──▶ Partial ──click──▶ Active ──click──▶ Active
//!     ▲                 │                  │
//!     └──click near a point (ClearAll) ────┘
//! ```
//!
//! Clicking within `tolerance` (Chebyshev distance) of an existing point
//! removes it; with the default [`RemovalPolicy::ClearAll`] the removal
//! empties the whole sequence.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, DEFAULT_STEPS};
use crate::color::Rgba;
use crate::curve::{CurveKind, CurveParams};
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::raster::rasterize_circle;
use crate::render::PointRenderer;

/// Default proximity tolerance in device pixels.
pub const DEFAULT_TOLERANCE: f32 = 5.0;

/// What a click near an existing control point does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// Remove the point, then clear the whole sequence.
    #[default]
    ClearAll,
    /// Remove only the nearest point.
    RemoveNearest,
}

/// Coarse session state derived from the point count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No control points.
    Empty,
    /// One control point.
    Partial,
    /// Two or more control points; a curve is drawn.
    Active,
}

/// User-adjustable drawing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Curve strategy.
    pub curve: CurveKind,
    /// Chaikin iterations or Bezier samples.
    pub steps: usize,
    /// Draw the control polygon between consecutive points.
    pub show_lines: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            curve: CurveKind::default(),
            steps: DEFAULT_STEPS,
            show_lines: true,
        }
    }
}

/// One input to the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// Add or remove a control point.
    Click(Point),
    /// Switch curve strategy.
    SetCurveType(CurveKind),
    /// Change the step count.
    SetStepSize(usize),
    /// Toggle the control polygon.
    SetShowLines(bool),
}

/// Control-point editing session.
#[derive(Debug, Clone)]
pub struct Session {
    points: Vec<Point>,
    settings: SessionSettings,
    tolerance: f32,
    removal: RemovalPolicy,
    marker_color: Rgba,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create an empty session with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            settings: SessionSettings::default(),
            tolerance: DEFAULT_TOLERANCE,
            removal: RemovalPolicy::default(),
            marker_color: Rgba::BLUE,
        }
    }

    /// Set the drawing settings.
    #[must_use]
    pub fn with_settings(mut self, settings: SessionSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the proximity tolerance (also the marker radius).
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance.abs();
        self
    }

    /// Set the removal policy.
    #[must_use]
    pub fn with_removal(mut self, removal: RemovalPolicy) -> Self {
        self.removal = removal;
        self
    }

    /// Set the control-point marker color.
    #[must_use]
    pub fn with_marker_color(mut self, color: Rgba) -> Self {
        self.marker_color = color;
        self
    }

    /// Control points in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Current settings.
    #[must_use]
    pub const fn settings(&self) -> SessionSettings {
        self.settings
    }

    /// Proximity tolerance.
    #[must_use]
    pub const fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// State derived from the number of control points.
    #[must_use]
    pub fn state(&self) -> SessionState {
        match self.points.len() {
            0 => SessionState::Empty,
            1 => SessionState::Partial,
            _ => SessionState::Active,
        }
    }

    /// Apply one event and redraw.
    pub fn handle<R: PointRenderer>(
        &mut self,
        canvas: &mut Canvas<R>,
        event: SessionEvent,
    ) -> Result<()> {
        match event {
            SessionEvent::Click(p) => return self.interact(canvas, Some(p)),
            SessionEvent::SetCurveType(kind) => self.settings.curve = kind,
            SessionEvent::SetStepSize(steps) => self.settings.steps = steps,
            SessionEvent::SetShowLines(show) => self.settings.show_lines = show,
        }
        self.interact(canvas, None)
    }

    /// Process an optional click and redraw the scene.
    ///
    /// # Errors
    ///
    /// Rejects a click at non-finite coordinates with
    /// [`Error::InvalidCommand`] and leaves the session untouched.
    pub fn interact<R: PointRenderer>(
        &mut self,
        canvas: &mut Canvas<R>,
        click: Option<Point>,
    ) -> Result<()> {
        if let Some(p) = click {
            if !p.is_finite() {
                return Err(Error::InvalidCommand(format!(
                    "Click at non-finite position ({}, {})",
                    p.x, p.y
                )));
            }
            let before = self.state();
            self.click(p);
            let after = self.state();
            if before != after {
                info!("session {before:?} -> {after:?} ({} points)", self.points.len());
            }
        }

        if let [a, b] = self.points[..] {
            canvas.draw_line(a, b)?;
        }

        canvas.clear();
        if self.points.len() > 1 {
            self.draw_curve_layer(canvas)?;
            if self.settings.show_lines {
                for pair in self.points.windows(2) {
                    canvas.draw_line(pair[0], pair[1])?;
                }
            }
        }
        self.draw_markers(canvas)
    }

    /// Remove the point under `p` or append `p`.
    fn click(&mut self, p: Point) {
        match self.nearest_within_tolerance(p) {
            Some(idx) => {
                self.points.remove(idx);
                if self.removal == RemovalPolicy::ClearAll {
                    self.points.clear();
                }
            }
            None => self.points.push(p),
        }
    }

    fn nearest_within_tolerance(&self, p: Point) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, q)| (i, q.chebyshev_distance(p)))
            .filter(|&(_, d)| d <= self.tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    fn draw_curve_layer<R: PointRenderer>(&self, canvas: &mut Canvas<R>) -> Result<()> {
        let params = CurveParams::open(self.settings.steps);
        match self.settings.curve.evaluate(&self.points, params) {
            Ok(points) => canvas.draw_pixels(points.into_iter().map(Point::round).collect()),
            Err(e) => {
                warn!("skipping {} curve: {e}", self.settings.curve);
                Ok(())
            }
        }
    }

    fn draw_markers<R: PointRenderer>(&self, canvas: &mut Canvas<R>) -> Result<()> {
        for &p in &self.points {
            let ring = rasterize_circle(p, self.tolerance);
            canvas.draw_pixels_in(ring, self.marker_color)?;
        }
        Ok(())
    }
}
