//! RGB color value and its `rgb(r,g,b)` text form
//!
//! The text form is what gets persisted, so [`Rgb`] must survive a
//! format-then-parse cycle unchanged. Parsing is deliberately lenient: it
//! pulls the first three runs of decimal digits out of the string and
//! treats missing components as zero, which accepts `rgb(1, 2, 3)`,
//! `rgb(1,2,3)` and bare `1,2,3` alike.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// An 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure red, used to paint the sampled ring in highlight images.
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness on a 0..=255 scale (ITU-R BT.601 weights).
    pub fn brightness(self) -> f64 {
        (self.r as f64 * 299.0 + self.g as f64 * 587.0 + self.b as f64 * 114.0) / 1000.0
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let runs: Vec<&str> = s
            .split(|c: char| !c.is_ascii_digit())
            .filter(|run| !run.is_empty())
            .take(3)
            .collect();

        if runs.is_empty() {
            return Err(ParseColorError::NoComponents);
        }

        let mut components = [0u8; 3];
        for (slot, run) in components.iter_mut().zip(&runs) {
            *slot = run
                .parse()
                .map_err(|_| ParseColorError::OutOfRange((*run).to_string()))?;
        }

        Ok(Rgb::from(components))
    }
}
