//! Test icon sources.

use async_trait::async_trait;
use asset_colors::error::IconError;
use asset_colors::models::{ChainEntity, TokenEntity};
use asset_colors::services::{IconSource, IconStore};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Serves token icons from `{base_url}/tokens/{key}.png` and chain icons
/// from their catalog URI, through the real `IconStore` HTTP path.
pub struct UrlIcons {
    base_url: String,
    store: IconStore,
}

impl UrlIcons {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            store: IconStore::new(reqwest::Client::new(), "unused"),
        }
    }
}

#[async_trait]
impl IconSource for UrlIcons {
    fn chain_icon(&self, chain: &ChainEntity) -> String {
        self.store.chain_icon(chain)
    }

    fn token_icon(&self, token: &TokenEntity) -> String {
        format!("{}/tokens/{}.png", self.base_url, token.key())
    }

    async fn fetch(&self, location: &str) -> Result<Vec<u8>, IconError> {
        self.store.fetch(location).await
    }
}

/// Wraps another source and records every fetched location.
pub struct CountingIcons<S> {
    inner: S,
    count: AtomicUsize,
    fetched: Mutex<Vec<String>>,
}

impl<S> CountingIcons<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            count: AtomicUsize::new(0),
            fetched: Mutex::new(Vec::new()),
        }
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
        self.fetched.lock().unwrap().clear();
    }
}

#[async_trait]
impl<S: IconSource> IconSource for CountingIcons<S> {
    fn chain_icon(&self, chain: &ChainEntity) -> String {
        self.inner.chain_icon(chain)
    }

    fn token_icon(&self, token: &TokenEntity) -> String {
        self.inner.token_icon(token)
    }

    async fn fetch(&self, location: &str) -> Result<Vec<u8>, IconError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.fetched.lock().unwrap().push(location.to_string());
        self.inner.fetch(location).await
    }
}
