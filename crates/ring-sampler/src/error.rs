//! Error types for sampling and color parsing

use std::fmt;

/// Error returned when a raster cannot be sampled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// No pixel fell inside the sampling ring (image smaller than the padding)
    EmptySample {
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
    },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::EmptySample { width, height } => {
                write!(f, "no pixels inside the sampling ring of a {width}x{height} image")
            }
        }
    }
}

impl std::error::Error for SampleError {}

/// Error returned when building a [`RasterImage`](crate::RasterImage) from raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// Buffer length does not match `width * height * 4`
    BufferSize {
        /// Expected byte count
        expected: usize,
        /// Actual byte count
        actual: usize,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::BufferSize { expected, actual } => {
                write!(f, "RGBA buffer has {actual} bytes, expected {expected}")
            }
        }
    }
}

impl std::error::Error for RasterError {}

/// Error returned when parsing an `rgb(r,g,b)` color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// The string contains no decimal digits at all
    NoComponents,
    /// A component is not a valid 0..=255 value
    OutOfRange(String),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::NoComponents => write!(f, "color string has no numeric components"),
            ParseColorError::OutOfRange(c) => write!(f, "color component out of range: {c}"),
        }
    }
}

impl std::error::Error for ParseColorError {}
