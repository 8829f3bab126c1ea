//! Icon lookup and loading
//!
//! Every icon is read as PNG. Chain icons are published as WebP, which the
//! decoder cannot read, so their URIs are rewritten to the PNG rendition.
//! Token icons come from a local directory of `{token key}.png` files.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::IconError;
use crate::models::{ChainEntity, TokenEntity};

/// Resolves entities to icon locations and loads icon bytes.
#[async_trait]
pub trait IconSource: Send + Sync {
    /// Location (path or URL) of a chain's icon.
    fn chain_icon(&self, chain: &ChainEntity) -> String;

    /// Location (path or URL) of a token's icon.
    fn token_icon(&self, token: &TokenEntity) -> String;

    /// Load the raw bytes at `location`.
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, IconError>;
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Icons on the local filesystem or behind HTTP(S) URLs.
pub struct IconStore {
    client: reqwest::Client,
    token_icon_dir: PathBuf,
}

impl IconStore {
    pub fn new(client: reqwest::Client, token_icon_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            token_icon_dir: token_icon_dir.into(),
        }
    }

    async fn fetch_remote(&self, location: &str) -> Result<Vec<u8>, IconError> {
        let response = self.client.get(location).send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(IconError::NotFound(location.to_string()));
        }
        if !status.is_success() {
            return Err(IconError::Status {
                status: status.as_u16(),
                location: location.to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn fetch_local(&self, location: &str) -> Result<Vec<u8>, IconError> {
        match tokio::fs::read(location).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(IconError::NotFound(location.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl IconSource for IconStore {
    fn chain_icon(&self, chain: &ChainEntity) -> String {
        chain.icon_uri.replace("webp", "png")
    }

    fn token_icon(&self, token: &TokenEntity) -> String {
        self.token_icon_dir
            .join(format!("{}.png", token.key()))
            .to_string_lossy()
            .into_owned()
    }

    async fn fetch(&self, location: &str) -> Result<Vec<u8>, IconError> {
        if location.is_empty() {
            return Err(IconError::NotFound("(no icon URI)".to_string()));
        }
        if is_remote(location) {
            self.fetch_remote(location).await
        } else {
            self.fetch_local(location).await
        }
    }
}
