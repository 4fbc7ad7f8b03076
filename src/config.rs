//! YAML configuration.
//!
//! Every field has a default, so an empty file (or no file) is valid.
//! Command-line flags override whatever is loaded here.
//!
//! ```yaml
//! version: 1
//! canvas:
//!   width: 800
//!   height: 600
//!   dpi: 1.0
//!   background: [255, 255, 255, 255]
//! draw:
//!   color: [0, 0, 0, 255]
//!   marker_color: [0, 0, 255, 255]
//!   steps: 8
//! session:
//!   tolerance: 5.0
//!   curve: chaikin
//!   show_lines: true
//!   removal: clear_all
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, DEFAULT_STEPS};
use crate::color::Rgba;
use crate::curve::CurveKind;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::session::{RemovalPolicy, Session, SessionSettings, DEFAULT_TOLERANCE};

/// Display surface settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Width in device pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Height in device pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Factor applied to text-command coordinates.
    #[serde(default = "default_dpi")]
    pub dpi: f32,

    /// Clear color as RGBA.
    #[serde(default = "default_background")]
    pub background: [u8; 4],
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    600
}
fn default_dpi() -> f32 {
    1.0
}
fn default_background() -> [u8; 4] {
    Rgba::WHITE.to_array()
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            dpi: default_dpi(),
            background: default_background(),
        }
    }
}

/// Drawing defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Initial drawing color.
    #[serde(default = "default_color")]
    pub color: [u8; 4],

    /// Control-point marker color.
    #[serde(default = "default_marker_color")]
    pub marker_color: [u8; 4],

    /// Initial curve step count.
    #[serde(default = "default_steps")]
    pub steps: usize,
}

fn default_color() -> [u8; 4] {
    Rgba::BLACK.to_array()
}
fn default_marker_color() -> [u8; 4] {
    Rgba::BLUE.to_array()
}
fn default_steps() -> usize {
    DEFAULT_STEPS
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            marker_color: default_marker_color(),
            steps: default_steps(),
        }
    }
}

/// Control-point session settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Proximity tolerance for removal, in device pixels.
    #[serde(default = "default_tolerance")]
    pub tolerance: f32,

    /// Initial curve strategy.
    #[serde(default)]
    pub curve: CurveKind,

    /// Draw the control polygon.
    #[serde(default = "default_show_lines")]
    pub show_lines: bool,

    /// What a click near a point does.
    #[serde(default)]
    pub removal: RemovalPolicy,
}

fn default_tolerance() -> f32 {
    DEFAULT_TOLERANCE
}
fn default_show_lines() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            curve: CurveKind::default(),
            show_lines: default_show_lines(),
            removal: RemovalPolicy::default(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Display surface.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Drawing defaults.
    #[serde(default)]
    pub draw: DrawConfig,

    /// Session behavior.
    #[serde(default)]
    pub session: SessionConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            canvas: CanvasConfig::default(),
            draw: DrawConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with the failing line if the YAML is invalid.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration or returns defaults on error.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Default config file location, if the platform has a config dir.
    #[cfg(feature = "cli")]
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("trueno-raster").join("config.yaml"))
    }

    /// Default config file location, if the platform has a config dir.
    #[cfg(not(feature = "cli"))]
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        None
    }

    /// Build a framebuffer-backed canvas from these settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured dimensions are zero.
    pub fn build_canvas(&self) -> Result<Canvas<Framebuffer>> {
        let fb = Framebuffer::with_background(
            self.canvas.width,
            self.canvas.height,
            Rgba::from_array(self.canvas.background),
        )?;
        let mut canvas = Canvas::new(fb).with_dpi(self.canvas.dpi);
        canvas.set_color(Rgba::from_array(self.draw.color));
        canvas.set_steps(self.draw.steps);
        Ok(canvas)
    }

    /// Build an empty session from these settings.
    #[must_use]
    pub fn build_session(&self) -> Session {
        Session::new()
            .with_settings(SessionSettings {
                curve: self.session.curve,
                steps: self.draw.steps,
                show_lines: self.session.show_lines,
            })
            .with_tolerance(self.session.tolerance)
            .with_removal(self.session.removal)
            .with_marker_color(Rgba::from_array(self.draw.marker_color))
    }
}
