use std::path::PathBuf;

use ring_sampler::{RasterError, SampleError};
use thiserror::Error;

/// Failure to obtain the catalog from the registry.
///
/// Never escapes [`CatalogSource::fetch`](crate::services::CatalogSource):
/// the client logs it and degrades to an empty catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Registry returned status {0}")]
    Status(u16),

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid registry URL: {0}")]
    Url(String),
}

impl CatalogError {
    /// Client errors other than rate limiting will not improve on retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Status(code) => *code >= 500 || *code == 429,
            CatalogError::Url(_) => false,
            CatalogError::Http(_) | CatalogError::Parse(_) => true,
        }
    }
}

/// Per-entity failure while turning an icon into a color.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("Icon fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Icon not found: {0}")]
    NotFound(String),

    #[error("Icon server returned status {status} for {location}")]
    Status { status: u16, location: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Sampling error: {0}")]
    Sample(#[from] SampleError),
}

/// PNG decoding and encoding failures.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("PNG decode error: {0}")]
    Decode(String),

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("Unsupported PNG color type: {0}")]
    UnsupportedColorType(String),

    #[error("Invalid raster: {0}")]
    Raster(#[from] RasterError),
}

/// Failure to read or write the cache and ledger files.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Run incomplete, {} output file(s) not written", .0.len())]
    Incomplete(Vec<PersistenceError>),
}
