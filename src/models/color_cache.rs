//! Persisted color cache
//!
//! ```json
//! {
//!   "chains": { "1": { "bgColor": "rgb(98,126,234)" } },
//!   "tokens": { "1_0xa0b8": { "bgColor": "rgb(39,117,202)", "textColor": "#fff" } }
//! }
//! ```
//!
//! An empty `bgColor` marks an entity that was attempted and failed. Any
//! non-empty `bgColor` is final: the setters here refuse to replace it.

use ring_sampler::{ParseColorError, Rgb, TextColor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A color as stored in the cache file. Empty means "unresolved".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorValue(String);

impl ColorValue {
    pub fn unresolved() -> Self {
        Self(String::new())
    }

    pub fn is_resolved(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Structured form of a background color, if this holds one.
    pub fn to_rgb(&self) -> Result<Rgb, ParseColorError> {
        self.0.parse()
    }
}

impl From<Rgb> for ColorValue {
    fn from(color: Rgb) -> Self {
        Self(color.to_string())
    }
}

impl From<TextColor> for ColorValue {
    fn from(color: TextColor) -> Self {
        Self(color.as_hex().to_string())
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One cached entity. `text_color` is only present for tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorCacheEntry {
    #[serde(default)]
    pub bg_color: ColorValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<ColorValue>,
}

impl ColorCacheEntry {
    pub fn is_resolved(&self) -> bool {
        self.bg_color.is_resolved()
    }

    fn chain_placeholder() -> Self {
        Self {
            bg_color: ColorValue::unresolved(),
            text_color: None,
        }
    }

    fn token_placeholder() -> Self {
        Self {
            bg_color: ColorValue::unresolved(),
            text_color: Some(ColorValue::unresolved()),
        }
    }
}

/// Colors for every chain and token seen so far, keyed by chain ID and
/// token key. Sorted maps keep the written file stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCache {
    #[serde(default)]
    pub chains: BTreeMap<String, ColorCacheEntry>,
    #[serde(default)]
    pub tokens: BTreeMap<String, ColorCacheEntry>,
}

impl ColorCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_chain_resolved(&self, chain_id: &str) -> bool {
        self.chains.get(chain_id).is_some_and(|e| e.is_resolved())
    }

    pub fn is_token_resolved(&self, key: &str) -> bool {
        self.tokens.get(key).is_some_and(|e| e.is_resolved())
    }

    /// Store a chain's background color. Returns false if the chain was
    /// already resolved and nothing changed.
    pub fn set_chain_color(&mut self, chain_id: &str, bg: Rgb) -> bool {
        if self.is_chain_resolved(chain_id) {
            return false;
        }
        self.chains.insert(
            chain_id.to_string(),
            ColorCacheEntry {
                bg_color: bg.into(),
                text_color: None,
            },
        );
        true
    }

    /// Mark a chain as seen but unresolved. Never replaces a resolved entry.
    pub fn set_chain_placeholder(&mut self, chain_id: &str) -> bool {
        if self.is_chain_resolved(chain_id) {
            return false;
        }
        self.chains
            .insert(chain_id.to_string(), ColorCacheEntry::chain_placeholder());
        true
    }

    /// Add a placeholder for a chain that has no entry at all.
    pub fn ensure_chain(&mut self, chain_id: &str) {
        self.chains
            .entry(chain_id.to_string())
            .or_insert_with(ColorCacheEntry::chain_placeholder);
    }

    /// Store a token's background and text colors. Returns false if the
    /// token was already resolved.
    pub fn set_token_colors(&mut self, key: &str, bg: Rgb, text: TextColor) -> bool {
        if self.is_token_resolved(key) {
            return false;
        }
        self.tokens.insert(
            key.to_string(),
            ColorCacheEntry {
                bg_color: bg.into(),
                text_color: Some(text.into()),
            },
        );
        true
    }

    /// Mark a token as seen but unresolved. Never replaces a resolved entry.
    pub fn set_token_placeholder(&mut self, key: &str) -> bool {
        if self.is_token_resolved(key) {
            return false;
        }
        self.tokens
            .insert(key.to_string(), ColorCacheEntry::token_placeholder());
        true
    }

    /// Number of chain and token entries with a color.
    pub fn resolved_counts(&self) -> (usize, usize) {
        (
            self.chains.values().filter(|e| e.is_resolved()).count(),
            self.tokens.values().filter(|e| e.is_resolved()).count(),
        )
    }
}
