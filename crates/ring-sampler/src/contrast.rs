//! Foreground text color selection for a given background.

use std::fmt;

use crate::color::Rgb;

/// Backgrounds at or above this brightness get dark text.
pub const DARK_TEXT_THRESHOLD: f64 = 190.0;

/// Text color chosen for legibility on top of a background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    /// `#000`
    Dark,
    /// `#fff`
    Light,
}

impl TextColor {
    /// Pick dark text on bright backgrounds, light text otherwise.
    pub fn for_background(background: Rgb) -> Self {
        if background.brightness() >= DARK_TEXT_THRESHOLD {
            TextColor::Dark
        } else {
            TextColor::Light
        }
    }

    /// Short hex form as stored in the color cache.
    pub fn as_hex(self) -> &'static str {
        match self {
            TextColor::Dark => "#000",
            TextColor::Light => "#fff",
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_hex())
    }
}
