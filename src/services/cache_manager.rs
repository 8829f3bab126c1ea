//! Incremental color cache population
//!
//! One run loads the persisted cache, fills in every chain and token that
//! does not have a color yet, and writes the cache plus a ledger of this
//! run's failures. Entries with a color are never touched again, so a run
//! only costs as much as the new and previously failed entities.
//!
//! Chains are independent and sampled concurrently. Tokens are sampled one
//! at a time with a pause before each fetch, to go easy on the icon host.

use futures_util::future::join_all;
use ring_sampler::TextColor;
use std::time::Duration;

use super::{CacheStore, ColorExtractor, IconSource};
use crate::error::PersistenceError;
use crate::models::{Catalog, ColorCache, FailureLedger};

/// Per-entity-kind outcome counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Newly colored this run
    pub resolved: usize,
    /// Fell back to a placeholder this run
    pub failed: usize,
    /// Already colored before this run
    pub skipped: usize,
}

/// Outcome of [`CacheManager::run`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub chains: Tally,
    pub tokens: Tally,
}

/// Owns the extraction pipeline and the cache files for a run.
pub struct CacheManager<S> {
    extractor: ColorExtractor<S>,
    store: CacheStore,
    token_delay: Duration,
}

impl<S: IconSource> CacheManager<S> {
    pub fn new(extractor: ColorExtractor<S>, store: CacheStore) -> Self {
        Self {
            extractor,
            store,
            token_delay: Duration::from_millis(100),
        }
    }

    /// Pause before each token icon fetch.
    pub fn token_delay(mut self, delay: Duration) -> Self {
        self.token_delay = delay;
        self
    }

    pub fn extractor(&self) -> &ColorExtractor<S> {
        &self.extractor
    }

    /// Load, update and persist the cache for `catalog`.
    ///
    /// Fails without touching any file if the existing cache cannot be read,
    /// and with [`PersistenceError::Incomplete`] if either output file could
    /// not be written.
    pub async fn run(&self, catalog: &Catalog) -> Result<RunSummary, PersistenceError> {
        let mut cache = self.store.load_cache().await?;
        let (ledger, summary) = self.update(catalog, &mut cache).await;

        tracing::info!(
            chains_resolved = summary.chains.resolved,
            chains_failed = summary.chains.failed,
            chains_skipped = summary.chains.skipped,
            tokens_resolved = summary.tokens.resolved,
            tokens_failed = summary.tokens.failed,
            tokens_skipped = summary.tokens.skipped,
            "Color extraction finished"
        );

        self.store.save(&cache, &ledger).await?;
        Ok(summary)
    }

    /// Fill in missing colors in `cache`, returning this run's failures.
    pub async fn update(&self, catalog: &Catalog, cache: &mut ColorCache) -> (FailureLedger, RunSummary) {
        let mut ledger = FailureLedger::new();
        let chains = self.update_chains(catalog, cache, &mut ledger).await;
        let tokens = self.update_tokens(catalog, cache, &mut ledger).await;
        (ledger, RunSummary { chains, tokens })
    }

    async fn update_chains(
        &self,
        catalog: &Catalog,
        cache: &mut ColorCache,
        ledger: &mut FailureLedger,
    ) -> Tally {
        let mut tally = Tally::default();

        let pending: Vec<_> = catalog
            .chains
            .iter()
            .filter(|chain| {
                let resolved = cache.is_chain_resolved(&chain.chain_id);
                if resolved {
                    tracing::debug!(chain = %chain.network_name, "Chain already has a color, skipping");
                    tally.skipped += 1;
                }
                !resolved
            })
            .collect();

        let outcomes = join_all(pending.into_iter().map(|chain| async move {
            let location = self.extractor.icons().chain_icon(chain);
            let result = self.extractor.extract(&location).await;
            (chain, location, result)
        }))
        .await;

        for (chain, location, result) in outcomes {
            match result {
                Ok(color) => {
                    cache.set_chain_color(&chain.chain_id, color);
                    tally.resolved += 1;
                    tracing::info!(
                        chain = %chain.network_name,
                        chain_id = %chain.chain_id,
                        color = %color,
                        "Chain {} saved",
                        chain.network_name
                    );
                }
                Err(e) => {
                    cache.set_chain_placeholder(&chain.chain_id);
                    ledger.record_chain(chain, &location);
                    tally.failed += 1;
                    tracing::warn!(
                        %e,
                        chain_id = %chain.chain_id,
                        at = %location,
                        "Chain {} saved using fallback color",
                        chain.network_name
                    );
                }
            }
        }

        tally
    }

    async fn update_tokens(
        &self,
        catalog: &Catalog,
        cache: &mut ColorCache,
        ledger: &mut FailureLedger,
    ) -> Tally {
        let mut tally = Tally::default();

        for token in &catalog.tokens {
            cache.ensure_chain(&token.chain_id);
            let chain_name = catalog.chain_name(&token.chain_id);

            let key = token.key();
            if cache.is_token_resolved(&key) {
                tracing::debug!(token = %token.symbol, chain = %chain_name, "Token already has a color, skipping");
                tally.skipped += 1;
                continue;
            }

            if !self.token_delay.is_zero() {
                tokio::time::sleep(self.token_delay).await;
            }

            let location = self.extractor.icons().token_icon(token);
            match self.extractor.extract(&location).await {
                Ok(color) => {
                    let text = TextColor::for_background(color);
                    cache.set_token_colors(&key, color, text);
                    tally.resolved += 1;
                    tracing::info!(
                        key = %key,
                        color = %color,
                        text_color = %text,
                        "Token {} on {} saved",
                        token.symbol,
                        chain_name
                    );
                }
                Err(e) => {
                    cache.set_token_placeholder(&key);
                    ledger.record_token(token, &location);
                    tally.failed += 1;
                    tracing::warn!(
                        %e,
                        key = %key,
                        at = %location,
                        "Token {} on {} saved using fallback colors",
                        token.symbol,
                        chain_name
                    );
                }
            }
        }

        tally
    }
}
