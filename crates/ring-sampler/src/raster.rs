//! Owned RGBA raster buffer

use crate::color::Rgb;
use crate::error::RasterError;

/// A decoded image as straight (non-premultiplied) RGBA8 pixels in
/// row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterImage {
    /// Wrap an RGBA8 buffer of exactly `width * height * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, RasterError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(RasterError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// An opaque image filled with a single color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        let pixel = [color.r, color.g, color.b, 255];
        let data = pixel
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn as_rgba(&self) -> &[u8] {
        &self.data
    }

    pub fn into_rgba(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// RGB of the pixel at `(x, y)`, ignoring alpha.
    ///
    /// # Panics
    /// Panics if the coordinates are outside the image.
    #[inline]
    pub fn rgb_at(&self, x: u32, y: u32) -> Rgb {
        let i = self.offset(x, y);
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Overwrite the pixel at `(x, y)` with an opaque color.
    ///
    /// # Panics
    /// Panics if the coordinates are outside the image.
    pub fn put_opaque(&mut self, x: u32, y: u32, color: Rgb) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, 255]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_rejects_short_buffer() {
        let result = RasterImage::from_rgba(2, 2, vec![0; 12]);
        assert_eq!(
            result,
            Err(RasterError::BufferSize {
                expected: 16,
                actual: 12
            })
        );
    }

    #[test]
    fn test_filled_image() {
        let image = RasterImage::filled(3, 2, Rgb::new(1, 2, 3));
        assert_eq!(image.as_rgba().len(), 24);
        assert_eq!(image.rgb_at(2, 1), Rgb::new(1, 2, 3));
        assert_eq!(&image.as_rgba()[20..24], &[1, 2, 3, 255]);
    }

    #[test]
    fn test_put_opaque_row_major() {
        let mut image = RasterImage::filled(3, 3, Rgb::new(0, 0, 0));
        image.put_opaque(2, 1, Rgb::RED);
        // row 1, column 2 -> pixel index 5
        assert_eq!(&image.as_rgba()[20..24], &[255, 0, 0, 255]);
        assert_eq!(image.rgb_at(1, 2), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_zero_sized_image() {
        let image = RasterImage::from_rgba(0, 0, Vec::new()).unwrap();
        assert_eq!(image.width(), 0);
        assert!(image.as_rgba().is_empty());
    }
}
