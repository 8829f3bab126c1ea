//! ring-sampler: dominant border color extraction for icon rasters
//!
//! Given a decoded RGBA image, [`RingSampler`] counts the exact RGB triples
//! on a thin ring just inside the image's inscribed circle and returns the
//! most frequent one. [`TextColor`] then picks a legible foreground for
//! that background.
//!
//! ```
//! use ring_sampler::{RasterImage, Rgb, RingSampler, TextColor};
//!
//! let icon = RasterImage::filled(64, 64, Rgb::new(255, 0, 0));
//! let sample = RingSampler::new().sample(&icon).unwrap();
//!
//! assert_eq!(sample.dominant, Rgb::new(255, 0, 0));
//! assert_eq!(TextColor::for_background(sample.dominant).as_hex(), "#fff");
//! ```
//!
//! # Determinism
//!
//! Pixels are visited top-to-bottom, left-to-right. When two colors have
//! the same count, the one whose first occurrence comes earlier in that
//! scan wins, so repeated runs over the same file always agree.

pub mod color;
pub mod contrast;
pub mod error;
pub mod raster;
pub mod sampler;


pub use color::Rgb;
pub use contrast::TextColor;
pub use error::{ParseColorError, RasterError, SampleError};
pub use raster::RasterImage;
pub use sampler::{Histogram, Ring, RingSampler, Sample, DEFAULT_PADDING};
