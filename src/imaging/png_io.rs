//! PNG to [`RasterImage`] and back.
//!
//! Decoding normalizes every PNG flavor (palette, grayscale, 16-bit) to
//! straight RGBA8. Fully transparent pixels are reported as black, matching
//! what a browser canvas returns for them, so an icon's transparent corners
//! always count as one color no matter what the encoder left in the RGB
//! channels.

use ring_sampler::RasterImage;
use std::io::Cursor;

use crate::error::ImageError;

/// Decode PNG bytes into an RGBA raster.
pub fn decode_png(bytes: &[u8]) -> Result<RasterImage, ImageError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| ImageError::Decode(e.to_string()))?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| ImageError::Decode(e.to_string()))?;
    buf.truncate(info.buffer_size());

    let pixels = info.width as usize * info.height as usize;
    let mut rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => {
            let mut out = Vec::with_capacity(pixels * 4);
            for px in buf.chunks_exact(3) {
                out.extend_from_slice(&[px[0], px[1], px[2], 255]);
            }
            out
        }
        png::ColorType::GrayscaleAlpha => {
            let mut out = Vec::with_capacity(pixels * 4);
            for px in buf.chunks_exact(2) {
                out.extend_from_slice(&[px[0], px[0], px[0], px[1]]);
            }
            out
        }
        png::ColorType::Grayscale => {
            let mut out = Vec::with_capacity(pixels * 4);
            for &v in &buf {
                out.extend_from_slice(&[v, v, v, 255]);
            }
            out
        }
        other => return Err(ImageError::UnsupportedColorType(format!("{other:?}"))),
    };

    for px in rgba.chunks_exact_mut(4) {
        if px[3] == 0 {
            px[..3].fill(0);
        }
    }

    Ok(RasterImage::from_rgba(info.width, info.height, rgba)?)
}

/// Encode an RGBA raster as an 8-bit RGBA PNG.
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, ImageError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ImageError::Encode(e.to_string()))?;
        writer
            .write_image_data(image.as_rgba())
            .map_err(|e| ImageError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
