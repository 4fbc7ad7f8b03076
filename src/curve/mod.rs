//! Parametric curve evaluation.
//!
//! Two interchangeable strategies, selected by [`CurveKind`]:
//!
//! - **Chaikin**: iterative corner cutting; `steps` is the iteration count.
//! - **Bezier**: one Bernstein-basis segment; `steps` is the sample count.
//!
//! Evaluation always recomputes from the control points and never mutates
//! them.

mod bezier;
mod chaikin;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Point;

pub use bezier::{bernstein_weights, bezier};
pub use chaikin::{chaikin, subdivide};

/// Largest Chaikin iteration count. Each pass roughly doubles the point
/// count, so 16 passes already turn one segment into 65536 points.
pub const MAX_CHAIKIN_ITERATIONS: usize = 16;

/// Largest Bezier sample count.
pub const MAX_BEZIER_SAMPLES: usize = 1 << 16;

/// Curve construction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    /// Chaikin corner-cutting subdivision.
    #[default]
    Chaikin,
    /// Single-segment Bezier in the Bernstein basis.
    Bezier,
}

impl CurveKind {
    /// Evaluate the curve through `control`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCurveSteps`] for Bezier `steps` outside
    /// `2..=MAX_BEZIER_SAMPLES` and Chaikin `steps` above
    /// [`MAX_CHAIKIN_ITERATIONS`].
    pub fn evaluate(self, control: &[Point], params: CurveParams) -> Result<Vec<Point>> {
        match self {
            Self::Chaikin if params.steps > MAX_CHAIKIN_ITERATIONS => {
                Err(Error::InvalidCurveSteps {
                    steps: params.steps,
                    min: 0,
                    max: MAX_CHAIKIN_ITERATIONS,
                })
            }
            Self::Chaikin => Ok(chaikin(control, params.steps, params.closed)),
            Self::Bezier => bezier(control, params.steps),
        }
    }

    /// The lowercase tag used in commands and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chaikin => "chaikin",
            Self::Bezier => "bezier",
        }
    }
}

impl FromStr for CurveKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "chaikin" => Ok(Self::Chaikin),
            "bezier" => Ok(Self::Bezier),
            _ => Err(Error::UnknownCurveType(s.to_string())),
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluation parameters shared by both strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    /// Chaikin iterations or Bezier sample count.
    pub steps: usize,
    /// Whether the control polygon wraps around (Chaikin only).
    pub closed: bool,
}

impl CurveParams {
    /// Parameters for an open curve.
    #[must_use]
    pub const fn open(steps: usize) -> Self {
        Self { steps, closed: false }
    }

    /// Parameters for a closed curve.
    #[must_use]
    pub const fn closed(steps: usize) -> Self {
        Self { steps, closed: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!("chaikin".parse::<CurveKind>().unwrap(), CurveKind::Chaikin);
        assert_eq!("Bezier".parse::<CurveKind>().unwrap(), CurveKind::Bezier);
        assert!(matches!("spline".parse::<CurveKind>(), Err(Error::UnknownCurveType(_))));
    }

    #[test]
    fn test_display_round_trips() {
        for kind in [CurveKind::Chaikin, CurveKind::Bezier] {
            assert_eq!(kind.to_string().parse::<CurveKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_dispatch() {
        let ctrl = [Point::new(0.0, 0.0), Point::new(8.0, 8.0), Point::new(16.0, 0.0)];
        let chaikin = CurveKind::Chaikin.evaluate(&ctrl, CurveParams::open(2)).unwrap();
        assert_eq!(chaikin.len(), 6);
        let bezier = CurveKind::Bezier.evaluate(&ctrl, CurveParams::open(9)).unwrap();
        assert_eq!(bezier.len(), 9);
    }

    #[test]
    fn test_bezier_ignores_closed_flag() {
        let ctrl = [Point::new(0.0, 0.0), Point::new(8.0, 8.0), Point::new(16.0, 0.0)];
        assert_eq!(
            CurveKind::Bezier.evaluate(&ctrl, CurveParams::open(5)).unwrap(),
            CurveKind::Bezier.evaluate(&ctrl, CurveParams::closed(5)).unwrap()
        );
    }

    #[test]
    fn test_bezier_step_guard_propagates() {
        let ctrl = [Point::new(0.0, 0.0), Point::new(8.0, 8.0)];
        assert!(CurveKind::Bezier.evaluate(&ctrl, CurveParams::open(1)).is_err());
        assert!(CurveKind::Chaikin.evaluate(&ctrl, CurveParams::open(0)).is_ok());
    }

    #[test]
    fn test_iteration_limit() {
        let ctrl = [Point::new(0.0, 0.0), Point::new(8.0, 8.0), Point::new(16.0, 0.0)];
        let at_limit = CurveParams::open(MAX_CHAIKIN_ITERATIONS);
        assert!(CurveKind::Chaikin.evaluate(&ctrl, at_limit).is_ok());
        assert!(matches!(
            CurveKind::Chaikin.evaluate(&ctrl, CurveParams::closed(64)),
            Err(Error::InvalidCurveSteps { steps: 64, max: MAX_CHAIKIN_ITERATIONS, .. })
        ));
    }

    #[test]
    fn test_serde_lowercase() {
        let kind: CurveKind = serde_yaml_ng::from_str("bezier").unwrap();
        assert_eq!(kind, CurveKind::Bezier);
    }
}
