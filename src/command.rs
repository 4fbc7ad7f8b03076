//! Text command interface.
//!
//! Two grammars share this module. The batch grammar draws straight into a
//! [`Canvas`], bypassing any session:
//!
//! ```text
//! line x0 y0 x1 y1        - line segment
//! poly x y x y x y ...    - filled convex polygon (3+ vertices)
//! circle x y r            - circle outline
//! curve type x y ...      - open curve (type: chaikin | bezier)
//! closed type x y ...     - closed curve
//! color r g b             - drawing color (0-255)
//! clear                   - clear the display
//! ```
//!
//! Coordinates are integers in CSS pixels and are multiplied by the DPI
//! factor; scaled values beyond [`MAX_COORDINATE`] are rejected. The event
//! grammar drives a [`Session`](crate::session::Session):
//!
//! ```text
//! click x y               - add or remove a control point
//! type chaikin|bezier     - curve strategy
//! steps n                 - step count
//! lines on|off            - control polygon
//! ```
//!
//! # Example
//!
//! ```rust
//! use trueno_raster::command::{parse_command, Command};
//!
//! let cmd = parse_command("circle 10 10 5", 2.0).unwrap();
//! assert!(matches!(cmd, Command::Circle { radius, .. } if radius == 10.0));
//! ```

use std::str::FromStr;

use log::warn;

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::curve::CurveKind;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::render::PointRenderer;
use crate::session::{Session, SessionEvent};

/// Largest magnitude a scaled coordinate or radius may have.
pub const MAX_COORDINATE: f32 = 65_536.0;

/// A parsed batch command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Line segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// Filled polygon.
    Poly(Vec<Point>),
    /// Circle outline.
    Circle {
        /// Center.
        center: Point,
        /// Radius in device pixels.
        radius: f32,
    },
    /// Open or closed curve.
    Curve {
        /// Strategy.
        kind: CurveKind,
        /// Control points.
        points: Vec<Point>,
        /// Whether the control polygon wraps.
        closed: bool,
    },
    /// Change the drawing color.
    Color(Rgba),
    /// Clear the display.
    Clear,
}

impl Command {
    /// Run the command against a canvas.
    ///
    /// # Errors
    ///
    /// Propagates renderer failures and curve evaluation errors.
    pub fn execute<R: PointRenderer>(&self, canvas: &mut Canvas<R>) -> Result<()> {
        match self {
            Self::Line { from, to } => canvas.draw_line(*from, *to),
            Self::Poly(points) => canvas.draw_polygon(points),
            Self::Circle { center, radius } => canvas.draw_circle(*center, *radius),
            Self::Curve {
                kind,
                points,
                closed,
            } => canvas.draw_curve(*kind, points, *closed),
            Self::Color(color) => {
                canvas.set_color(*color);
                Ok(())
            }
            Self::Clear => {
                canvas.clear();
                Ok(())
            }
        }
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidCommand(message.into())
}

fn parse_number<T: FromStr>(token: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| invalid(format!("Invalid number: {token}")))
}

/// Check a DPI-scaled value against [`MAX_COORDINATE`].
fn in_range(value: f32, token: &str) -> Result<f32> {
    if value.is_finite() && value.abs() <= MAX_COORDINATE {
        Ok(value)
    } else {
        Err(invalid(format!("Coordinate out of range: {token}")))
    }
}

/// Parse integer arguments and scale them by `dpi`.
fn scaled(tokens: &[&str], dpi: f32) -> Result<Vec<f32>> {
    tokens
        .iter()
        .map(|t| in_range(parse_number::<i32>(t)? as f32 * dpi, t))
        .collect()
}

fn pairs(values: &[f32]) -> Vec<Point> {
    values
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect()
}

fn expect_args(verb: &str, args: &[&str], count: usize) -> Result<()> {
    if args.len() == count {
        Ok(())
    } else {
        Err(invalid(format!(
            "{verb} takes {count} arguments, got {}",
            args.len()
        )))
    }
}

fn point_list(verb: &str, args: &[&str], dpi: f32, min_points: usize) -> Result<Vec<Point>> {
    if args.len() % 2 != 0 || args.len() < 2 * min_points {
        return Err(invalid(format!(
            "{verb} takes at least {min_points} x y pairs"
        )));
    }
    Ok(pairs(&scaled(args, dpi)?))
}

/// Parse one line of the batch grammar.
///
/// # Errors
///
/// Returns [`Error::InvalidCommand`] for an empty line, an unknown verb, a
/// wrong argument count, a non-integer argument or a coordinate out of
/// range, and
/// [`Error::UnknownCurveType`] for a bad curve tag.
pub fn parse_command(input: &str, dpi: f32) -> Result<Command> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let Some((&verb, args)) = tokens.split_first() else {
        return Err(invalid("Empty command"));
    };

    match verb {
        "line" => {
            expect_args(verb, args, 4)?;
            let v = scaled(args, dpi)?;
            Ok(Command::Line {
                from: Point::new(v[0], v[1]),
                to: Point::new(v[2], v[3]),
            })
        }
        "poly" => Ok(Command::Poly(point_list(verb, args, dpi, 3)?)),
        "circle" => {
            expect_args(verb, args, 3)?;
            let v = scaled(args, dpi)?;
            Ok(Command::Circle {
                center: Point::new(v[0], v[1]),
                radius: v[2],
            })
        }
        "curve" | "closed" => {
            let Some((&tag, coords)) = args.split_first() else {
                return Err(invalid(format!("{verb} needs a curve type")));
            };
            let kind = tag.parse::<CurveKind>()?;
            Ok(Command::Curve {
                kind,
                points: point_list(verb, coords, dpi, 1)?,
                closed: verb == "closed",
            })
        }
        "color" => {
            expect_args(verb, args, 3)?;
            let r = parse_number::<u8>(args[0])?;
            let g = parse_number::<u8>(args[1])?;
            let b = parse_number::<u8>(args[2])?;
            Ok(Command::Color(Rgba::rgb(r, g, b)))
        }
        "clear" => {
            expect_args(verb, args, 0)?;
            Ok(Command::Clear)
        }
        _ => Err(invalid(format!("Unknown command: {verb}"))),
    }
}

fn parse_switch(token: &str) -> Result<bool> {
    match token {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => Err(invalid(format!("Expected on or off, got {token}"))),
    }
}

/// Parse one line of the session event grammar.
///
/// Click coordinates may be fractional and are scaled by `dpi`.
///
/// # Errors
///
/// Returns [`Error::InvalidCommand`] for anything that is not an event,
/// including clicks at non-finite or out-of-range coordinates.
pub fn parse_event(input: &str, dpi: f32) -> Result<SessionEvent> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    match tokens.as_slice() {
        ["click", x, y] => {
            let px = in_range(parse_number::<f32>(x)? * dpi, x)?;
            let py = in_range(parse_number::<f32>(y)? * dpi, y)?;
            Ok(SessionEvent::Click(Point::new(px, py)))
        }
        ["type", tag] => Ok(SessionEvent::SetCurveType(tag.parse()?)),
        ["steps", n] => Ok(SessionEvent::SetStepSize(parse_number(n)?)),
        ["lines", switch] => Ok(SessionEvent::SetShowLines(parse_switch(switch)?)),
        _ => Err(invalid(format!("Not a session event: {}", input.trim()))),
    }
}

/// Run one input line: a session event if it parses as one, otherwise a
/// batch command drawn straight into the canvas.
///
/// # Errors
///
/// Returns the batch parse or execution error when the line is neither.
pub fn run_line<R: PointRenderer>(
    line: &str,
    canvas: &mut Canvas<R>,
    session: &mut Session,
) -> Result<()> {
    let dpi = canvas.dpi();
    if let Ok(event) = parse_event(line, dpi) {
        return session.handle(canvas, event);
    }
    parse_command(line, dpi)
        .and_then(|cmd| cmd.execute(canvas))
        .map_err(|e| {
            warn!("rejected input {:?}: {e}", line.trim());
            e
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;
    use crate::geometry::Pixel;

    #[test]
    fn test_parse_line() {
        let cmd = parse_command("line 0 0 4 0", 1.0).unwrap();
        assert_eq!(
            cmd,
            Command::Line {
                from: Point::new(0.0, 0.0),
                to: Point::new(4.0, 0.0)
            }
        );
    }

    #[test]
    fn test_dpi_scaling() {
        let cmd = parse_command("line 1 2 3 4", 2.0).unwrap();
        assert_eq!(
            cmd,
            Command::Line {
                from: Point::new(2.0, 4.0),
                to: Point::new(6.0, 8.0)
            }
        );
    }

    #[test]
    fn test_parse_poly() {
        let cmd = parse_command("poly 0 0 10 0 10 10", 1.0).unwrap();
        assert!(matches!(cmd, Command::Poly(ref pts) if pts.len() == 3));
        assert!(parse_command("poly 0 0 10 0", 1.0).is_err());
        assert!(parse_command("poly 0 0 10 0 10", 1.0).is_err());
    }

    #[test]
    fn test_parse_curve() {
        let cmd = parse_command("closed bezier 0 0 5 5 10 0", 1.0).unwrap();
        match cmd {
            Command::Curve {
                kind,
                points,
                closed,
            } => {
                assert_eq!(kind, CurveKind::Bezier);
                assert_eq!(points.len(), 3);
                assert!(closed);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            parse_command("curve spline 0 0 1 1", 1.0),
            Err(Error::UnknownCurveType(_))
        ));
        assert!(parse_command("curve chaikin", 1.0).is_err());
        assert!(parse_command("curve", 1.0).is_err());
    }

    #[test]
    fn test_parse_color() {
        let cmd = parse_command("color 255 128 0", 1.0).unwrap();
        assert_eq!(cmd, Command::Color(Rgba::new(255, 128, 0, 255)));
        assert!(parse_command("color 256 0 0", 1.0).is_err());
        assert!(parse_command("color 1 2", 1.0).is_err());
    }

    #[test]
    fn test_malformed() {
        for bad in ["", "   ", "triangle 1 2 3", "line 1 2 3", "line a b c d", "clear now", "circle 1.5 2 3"] {
            assert!(
                matches!(parse_command(bad, 1.0), Err(Error::InvalidCommand(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_execute_sequence() {
        let mut canvas = Canvas::new(Framebuffer::new(32, 32).unwrap());
        for line in ["color 255 0 0", "line 0 0 4 0"] {
            parse_command(line, 1.0).unwrap().execute(&mut canvas).unwrap();
        }
        assert_eq!(canvas.renderer().painted_count(), 5);
        assert_eq!(canvas.renderer().pixel_at(Pixel::new(2, 0)), Some(Rgba::RED));

        parse_command("clear", 1.0).unwrap().execute(&mut canvas).unwrap();
        assert_eq!(canvas.renderer().painted_count(), 0);
    }

    #[test]
    fn test_parse_events() {
        assert_eq!(
            parse_event("click 10 20.5", 2.0).unwrap(),
            SessionEvent::Click(Point::new(20.0, 41.0))
        );
        assert_eq!(
            parse_event("type bezier", 1.0).unwrap(),
            SessionEvent::SetCurveType(CurveKind::Bezier)
        );
        assert_eq!(parse_event("steps 12", 1.0).unwrap(), SessionEvent::SetStepSize(12));
        assert_eq!(parse_event("lines off", 1.0).unwrap(), SessionEvent::SetShowLines(false));
        assert!(parse_event("lines maybe", 1.0).is_err());
        assert!(parse_event("steps -1", 1.0).is_err());
        assert!(parse_event("line 0 0 4 0", 1.0).is_err());
    }

    #[test]
    fn test_rejects_non_finite_clicks() {
        for bad in ["click inf 0", "click 0 -inf", "click NaN 0", "click 1e39 0"] {
            assert!(
                matches!(parse_event(bad, 1.0), Err(Error::InvalidCommand(_))),
                "{bad:?} should be rejected"
            );
        }
        assert!(parse_event("click 40000 0", 2.0).is_err());
        assert!(parse_event("click 30000 0", 2.0).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_coordinates() {
        for bad in ["circle 2147483647 0 5", "circle 0 0 2147483647", "line 0 0 100000 0"] {
            assert!(
                matches!(parse_command(bad, 1.0), Err(Error::InvalidCommand(_))),
                "{bad:?} should be rejected"
            );
        }
        assert!(parse_command("line 0 0 40000 0", 2.0).is_err());
        assert!(parse_command("line 0 0 65536 0", 1.0).is_ok());
    }

    #[test]
    fn test_run_line_rejects_extreme_input() {
        let mut canvas = Canvas::new(Framebuffer::new(16, 16).unwrap());
        let mut session = Session::new();
        for bad in ["circle 2147483647 0 5", "click inf 0", "click NaN NaN"] {
            assert!(run_line(bad, &mut canvas, &mut session).is_err(), "{bad:?}");
        }
        assert!(session.points().is_empty());
        assert_eq!(canvas.renderer().painted_count(), 0);
    }

    #[test]
    fn test_run_line_dispatch() {
        let mut canvas = Canvas::new(Framebuffer::new(32, 32).unwrap());
        let mut session = Session::new();

        run_line("click 5 5", &mut canvas, &mut session).unwrap();
        assert_eq!(session.points().len(), 1);

        run_line("line 0 20 4 20", &mut canvas, &mut session).unwrap();
        assert_eq!(session.points().len(), 1);
        assert_eq!(canvas.renderer().pixel_at(Pixel::new(4, 20)), Some(Rgba::BLACK));

        assert!(run_line("bogus", &mut canvas, &mut session).is_err());
    }
}
