//! Chain and token catalog
//!
//! The registry payload is loosely shaped, so it is read into `Raw*` types
//! that tolerate missing fields, then validated and normalized into
//! [`ChainEntity`] / [`TokenEntity`]. Nothing past [`Catalog::from_raw`]
//! has to deal with optional identity fields.

use serde::Deserialize;
use std::collections::HashMap;

use super::keys::{self, is_sanctum_automated_token, normalize_evmos_address};

/// A blockchain network from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainEntity {
    pub chain_id: String,
    pub network_name: String,
    pub icon_uri: String,
    pub native_currency_symbol: String,
    pub is_evmos: bool,
}

/// A token from the catalog, with its address already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEntity {
    pub chain_id: String,
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub icon_uri: String,
}

impl TokenEntity {
    /// Color cache key for this token.
    pub fn key(&self) -> String {
        keys::token_key(&self.chain_id, &self.address)
    }
}

/// Validated catalog of chains and tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub chains: Vec<ChainEntity>,
    pub tokens: Vec<TokenEntity>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty() && self.tokens.is_empty()
    }

    /// Human-readable network name for a chain ID, falling back to the ID.
    pub fn chain_name<'a>(&'a self, chain_id: &'a str) -> &'a str {
        self.chains
            .iter()
            .find(|c| c.chain_id == chain_id)
            .map(|c| c.network_name.as_str())
            .unwrap_or(chain_id)
    }

    /// Validate and normalize a registry payload.
    ///
    /// - entries that do not deserialize, chains without an ID, and tokens
    ///   without a chain ID or address are dropped with a warning
    /// - Sanctum automated tokens are dropped
    /// - token addresses on Evmos-style chains are rewritten to EVM form
    pub fn from_raw(raw: RawCatalog) -> Self {
        let chains: Vec<ChainEntity> = raw
            .chains
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<RawChain>(value) {
                Ok(chain) => chain.validate(),
                Err(e) => {
                    tracing::warn!(%e, "Skipping malformed chain entry");
                    None
                }
            })
            .collect();

        let evmos_natives: HashMap<&str, &str> = chains
            .iter()
            .filter(|c| c.is_evmos)
            .map(|c| (c.chain_id.as_str(), c.native_currency_symbol.as_str()))
            .collect();

        let tokens: Vec<TokenEntity> = raw
            .tokens
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<RawToken>(value) {
                Ok(token) => token.validate(),
                Err(e) => {
                    tracing::warn!(%e, "Skipping malformed token entry");
                    None
                }
            })
            .filter(|t| !is_sanctum_automated_token(&t.chain_id, &t.name, &t.symbol))
            .map(|mut t| {
                if let Some(native) = evmos_natives.get(t.chain_id.as_str()) {
                    t.address = normalize_evmos_address(&t.address, &t.symbol, native);
                }
                t
            })
            .collect();

        Self { chains, tokens }
    }
}

/// Registry payload before validation. Entries are kept as JSON values so
/// one bad element cannot reject the whole catalog.
#[derive(Debug, Default, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub chains: Vec<serde_json::Value>,
    #[serde(default)]
    pub tokens: Vec<serde_json::Value>,
}

/// Chain IDs arrive as strings for most networks and as numbers for some.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IdValue {
    Text(String),
    Number(u64),
}

impl IdValue {
    fn into_string(self) -> String {
        match self {
            IdValue::Text(s) => s,
            IdValue::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawNativeCurrency {
    symbol: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChain {
    chain_id: Option<IdValue>,
    network_name: Option<String>,
    #[serde(rename = "chainIconURI")]
    chain_icon_uri: Option<String>,
    native_currency: Option<RawNativeCurrency>,
    is_evmos: Option<bool>,
}

impl RawChain {
    fn validate(self) -> Option<ChainEntity> {
        let Some(chain_id) = self.chain_id.map(IdValue::into_string) else {
            tracing::warn!(name = ?self.network_name, "Skipping chain without chainId");
            return None;
        };

        Some(ChainEntity {
            network_name: self.network_name.unwrap_or_else(|| chain_id.clone()),
            icon_uri: self.chain_icon_uri.unwrap_or_default(),
            native_currency_symbol: self
                .native_currency
                .and_then(|n| n.symbol)
                .unwrap_or_default(),
            is_evmos: self.is_evmos.unwrap_or(false),
            chain_id,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawToken {
    chain_id: Option<IdValue>,
    address: Option<String>,
    symbol: Option<String>,
    name: Option<String>,
    #[serde(rename = "logoURI")]
    logo_uri: Option<String>,
}

impl RawToken {
    fn validate(self) -> Option<TokenEntity> {
        let (Some(chain_id), Some(address)) = (self.chain_id, self.address) else {
            tracing::warn!(symbol = ?self.symbol, "Skipping token without chainId or address");
            return None;
        };

        Some(TokenEntity {
            chain_id: chain_id.into_string(),
            address,
            symbol: self.symbol.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            icon_uri: self.logo_uri.unwrap_or_default(),
        })
    }
}
