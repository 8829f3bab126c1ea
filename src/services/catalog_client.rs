//! Asset registry client
//!
//! Fetches the chain/token catalog from `{registry_url}/v2/sdk-info`,
//! retrying transient failures with exponential backoff. Callers always get
//! a [`Catalog`]: once retries are exhausted the error is logged and an
//! empty catalog is returned, which turns the run into a no-op.

use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

use crate::error::CatalogError;
use crate::models::{Catalog, RawCatalog};

const SDK_INFO_PATH: &str = "/v2/sdk-info";
const INTEGRATOR_HEADER: &str = "x-integrator-id";

/// Source of the chain/token catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the catalog. Never fails; degrades to an empty catalog.
    async fn fetch(&self) -> Catalog;
}

/// A catalog that is already in memory.
pub struct StaticCatalog(pub Catalog);

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch(&self) -> Catalog {
        self.0.clone()
    }
}

/// HTTP client for the asset registry.
pub struct RegistryClient {
    client: reqwest::Client,
    base_url: String,
    integrator_id: Option<String>,
    retries: u32,
    backoff: Duration,
}

impl RegistryClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            integrator_id: None,
            retries: 3,
            backoff: Duration::from_millis(500),
        }
    }

    pub fn integrator_id(mut self, id: Option<String>) -> Self {
        self.integrator_id = id;
        self
    }

    /// Extra attempts after the first failure.
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Delay before the first retry; doubles after each failed attempt.
    pub fn backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    fn endpoint(&self) -> Result<Url, CatalogError> {
        Url::parse(&self.base_url)
            .and_then(|base| base.join(SDK_INFO_PATH))
            .map_err(|e| CatalogError::Url(format!("{}: {e}", self.base_url)))
    }

    async fn fetch_once(&self, url: &Url) -> Result<Catalog, CatalogError> {
        let mut request = self
            .client
            .get(url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(ref id) = self.integrator_id {
            request = request.header(INTEGRATOR_HEADER, id);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let raw: RawCatalog = serde_json::from_slice(&body)?;
        Ok(Catalog::from_raw(raw))
    }

    /// Fetch with retries, surfacing the last error.
    pub async fn try_fetch(&self) -> Result<Catalog, CatalogError> {
        let url = self.endpoint()?;
        let mut delay = self.backoff;
        let mut attempt = 0;

        loop {
            match self.fetch_once(&url).await {
                Ok(catalog) => {
                    tracing::info!(
                        chains = catalog.chains.len(),
                        tokens = catalog.tokens.len(),
                        "Fetched asset catalog"
                    );
                    return Ok(catalog);
                }
                Err(e) if e.is_retryable() && attempt < self.retries => {
                    attempt += 1;
                    tracing::warn!(
                        %e,
                        attempt,
                        max_retries = self.retries,
                        delay_ms = delay.as_millis() as u64,
                        "Catalog fetch failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[async_trait]
impl CatalogSource for RegistryClient {
    async fn fetch(&self) -> Catalog {
        match self.try_fetch().await {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(%e, url = %self.base_url, "Error fetching asset catalog, continuing with an empty catalog");
                Catalog::default()
            }
        }
    }
}
