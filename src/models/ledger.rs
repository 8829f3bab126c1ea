//! Per-run record of entities that fell back to placeholder colors.

use serde::{Deserialize, Serialize};

use super::catalog::{ChainEntity, TokenEntity};

/// A chain whose icon could not be turned into a color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainFailure {
    pub id: String,
    pub name: String,
    /// Icon location that was tried
    pub file_name: String,
}

/// A token whose icon could not be turned into a color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenFailure {
    pub symbol: String,
    pub chain_id: String,
    pub address: String,
    /// Icon location that was tried
    pub file_name: String,
    /// Icon URL as published in the catalog, for manual re-download
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
}

/// Failures from the current run only; rebuilt from scratch every run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureLedger {
    #[serde(default)]
    pub chains: Vec<ChainFailure>,
    #[serde(default)]
    pub tokens: Vec<TokenFailure>,
}

impl FailureLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty() && self.tokens.is_empty()
    }

    pub fn record_chain(&mut self, chain: &ChainEntity, location: &str) {
        self.chains.push(ChainFailure {
            id: chain.chain_id.clone(),
            name: chain.network_name.clone(),
            file_name: location.to_string(),
        });
    }

    pub fn record_token(&mut self, token: &TokenEntity, location: &str) {
        self.tokens.push(TokenFailure {
            symbol: token.symbol.clone(),
            chain_id: token.chain_id.clone(),
            address: token.address.clone(),
            file_name: location.to_string(),
            original_url: Some(token.icon_uri.clone()).filter(|u| !u.is_empty()),
        });
    }
}
