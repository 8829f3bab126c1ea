//! Icon location to brand color: fetch, decode, sample.

use ring_sampler::{RasterImage, Rgb, RingSampler};
use std::path::{Path, PathBuf};

use super::IconSource;
use crate::error::IconError;
use crate::imaging::{decode_png, encode_png};

/// Turns icons into their dominant ring color.
pub struct ColorExtractor<S> {
    icons: S,
    sampler: RingSampler,
    /// When set, a copy of every sampled icon with the ring painted red is
    /// written here for visual inspection
    highlight_dir: Option<PathBuf>,
}

impl<S: IconSource> ColorExtractor<S> {
    pub fn new(icons: S) -> Self {
        Self {
            icons,
            sampler: RingSampler::new(),
            highlight_dir: None,
        }
    }

    pub fn highlight_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.highlight_dir = dir;
        self
    }

    pub fn icons(&self) -> &S {
        &self.icons
    }

    /// Dominant ring color of the icon at `location`.
    pub async fn extract(&self, location: &str) -> Result<Rgb, IconError> {
        let bytes = self.icons.fetch(location).await?;
        let image = decode_png(&bytes)?;
        let sample = self.sampler.sample(&image)?;

        if let Some(ref dir) = self.highlight_dir {
            if let Err(e) = self.write_highlight(dir, location, &image).await {
                tracing::warn!(%e, location, "Failed to save highlight image");
            }
        }

        Ok(sample.dominant)
    }

    async fn write_highlight(
        &self,
        dir: &Path,
        location: &str,
        image: &RasterImage,
    ) -> Result<(), IconError> {
        let png = encode_png(&self.sampler.highlight(image))?;
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(highlight_file_name(location));
        tokio::fs::write(&path, png).await?;
        tracing::debug!(path = %path.display(), "Highlight image saved");
        Ok(())
    }
}

/// `https://cdn/a/b/usdc.webp?v=2` -> `usdc.png`
fn highlight_file_name(location: &str) -> String {
    let last = location.rsplit(['/', '\\']).next().unwrap_or(location);
    let last = last.split('?').next().unwrap_or(last);
    let stem = match last.rfind('.') {
        Some(dot) if dot > 0 => &last[..dot],
        _ => last,
    };
    format!("{stem}.png")
}
