//! Ring sampling and dominant color selection
//!
//! Icons in the asset catalog are mostly circular badges drawn on a square
//! canvas. The background color of the badge is best read from a thin ring
//! just inside the circle's edge: far enough in to skip anti-aliased edge
//! pixels, far enough out to skip the artwork in the middle.
//!
//! For a `width x height` image the ring is every pixel whose distance from
//! `(width / 2, height / 2)` lies in `[radius - padding, radius]` where
//! `radius = min(width, height) / 2`. Distances are measured from the pixel's
//! integer coordinate, not its center.

use std::collections::HashMap;

use crate::color::Rgb;
use crate::error::SampleError;
use crate::raster::RasterImage;

/// Default inward padding of the sampling ring, in pixels.
pub const DEFAULT_PADDING: f64 = 7.0;

/// Annulus geometry for one image size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub inner_radius: f64,
}

impl Ring {
    pub fn for_size(width: u32, height: u32, padding: f64) -> Self {
        let radius = width.min(height) as f64 / 2.0;
        Self {
            center_x: width as f64 / 2.0,
            center_y: height as f64 / 2.0,
            radius,
            inner_radius: radius - padding,
        }
    }

    /// Whether the pixel at `(x, y)` lies on the ring (both bounds inclusive).
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        let dx = x as f64 - self.center_x;
        let dy = y as f64 - self.center_y;
        let distance = (dx * dx + dy * dy).sqrt();
        distance >= self.inner_radius && distance <= self.radius
    }
}

/// Frequency count of exact RGB triples, remembering first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    entries: Vec<(Rgb, usize)>,
    index: HashMap<Rgb, usize>,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, color: Rgb) {
        match self.index.get(&color) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(color, self.entries.len());
                self.entries.push((color, 1));
            }
        }
    }

    pub fn count(&self, color: Rgb) -> usize {
        self.index.get(&color).map_or(0, |&i| self.entries[i].1)
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of counted pixels.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// `(color, count)` pairs in the order each color was first seen.
    pub fn iter(&self) -> impl Iterator<Item = (Rgb, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Most frequent color. On equal counts the earliest-seen color wins.
    pub fn dominant(&self) -> Option<Rgb> {
        let mut best: Option<(Rgb, usize)> = None;
        for &(color, count) in &self.entries {
            if best.map_or(true, |(_, max)| count > max) {
                best = Some((color, count));
            }
        }
        best.map(|(color, _)| color)
    }
}

/// Result of sampling one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Most frequent color on the ring
    pub dominant: Rgb,
    /// All ring colors with their pixel counts
    pub histogram: Histogram,
}

/// Extracts the dominant color of the ring near an image's circular border.
///
/// ```
/// use ring_sampler::{RasterImage, Rgb, RingSampler};
///
/// let image = RasterImage::filled(32, 32, Rgb::new(0, 0, 255));
/// let sample = RingSampler::new().sample(&image).unwrap();
/// assert_eq!(sample.dominant.to_string(), "rgb(0,0,255)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSampler {
    padding: f64,
}

impl RingSampler {
    pub fn new() -> Self {
        Self {
            padding: DEFAULT_PADDING,
        }
    }

    /// Override the inward padding (ring thickness) in pixels.
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn ring_for(&self, image: &RasterImage) -> Ring {
        Ring::for_size(image.width(), image.height(), self.padding)
    }

    /// Count ring colors in row-major order and pick the dominant one.
    pub fn sample(&self, image: &RasterImage) -> Result<Sample, SampleError> {
        let ring = self.ring_for(image);
        let mut histogram = Histogram::new();

        for y in 0..image.height() {
            for x in 0..image.width() {
                if ring.contains(x, y) {
                    histogram.add(image.rgb_at(x, y));
                }
            }
        }

        let dominant = histogram.dominant().ok_or(SampleError::EmptySample {
            width: image.width(),
            height: image.height(),
        })?;

        Ok(Sample {
            dominant,
            histogram,
        })
    }

    /// Copy of `image` with every ring pixel painted opaque red.
    pub fn highlight(&self, image: &RasterImage) -> RasterImage {
        let ring = self.ring_for(image);
        let mut out = image.clone();
        for y in 0..image.height() {
            for x in 0..image.width() {
                if ring.contains(x, y) {
                    out.put_opaque(x, y, Rgb::RED);
                }
            }
        }
        out
    }
}

impl Default for RingSampler {
    fn default() -> Self {
        Self::new()
    }
}
