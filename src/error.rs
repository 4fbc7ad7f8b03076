//! Error types for trueno-raster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Pixel and color lists handed to a renderer differ in length.
    #[error("Data length mismatch: {pixels} pixels but {colors} colors")]
    DataLengthMismatch {
        /// Number of pixels.
        pixels: usize,
        /// Number of colors.
        colors: usize,
    },

    /// Unrecognized text command or wrong argument list.
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Unknown curve type tag.
    #[error("Unknown curve type: {0}")]
    UnknownCurveType(String),

    /// Step count outside the range a curve strategy accepts.
    #[error("Invalid curve step count {steps}: expected {min} to {max}")]
    InvalidCurveSteps {
        /// Requested step count.
        steps: usize,
        /// Smallest accepted count.
        min: usize,
        /// Largest accepted count.
        max: usize,
    },

    /// Configuration parsing error with line number.
    #[error("Configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Vector kernel failure.
    #[error("Rendering error: {0}")]
    Rendering(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_data_length_mismatch() {
        let err = Error::DataLengthMismatch {
            pixels: 10,
            colors: 20,
        };
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains("20"));
    }

    #[test]
    fn test_invalid_curve_steps_mentions_count() {
        let err = Error::InvalidCurveSteps {
            steps: 1,
            min: 2,
            max: 65536,
        };
        assert!(err.to_string().contains("count 1"));
        assert!(err.to_string().contains("2 to 65536"));
    }

    #[test]
    fn test_io_error_converts() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
