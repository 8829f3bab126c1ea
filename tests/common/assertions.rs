//! Assertion helpers for tests.

use asset_colors::models::{ColorCache, FailureLedger};
use pretty_assertions::assert_eq;
use std::path::Path;

/// Read and parse the persisted color cache
pub fn read_cache(path: &Path) -> ColorCache {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Cache file {} unreadable: {e}", path.display()));
    serde_json::from_str(&text).expect("Cache file should be valid JSON")
}

/// Read and parse the persisted failure ledger
pub fn read_ledger(path: &Path) -> FailureLedger {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Ledger file {} unreadable: {e}", path.display()));
    serde_json::from_str(&text).expect("Ledger file should be valid JSON")
}

/// Assert a chain entry has the given background color string
pub fn assert_chain_color(cache: &ColorCache, chain_id: &str, expected: &str) {
    let entry = cache
        .chains
        .get(chain_id)
        .unwrap_or_else(|| panic!("Chain {chain_id} missing from cache: {cache:?}"));
    assert_eq!(entry.bg_color.as_str(), expected, "bgColor of chain {chain_id}");
    assert_eq!(entry.text_color, None, "chains carry no textColor");
}

/// Assert a token entry has the given background and text color strings
pub fn assert_token_colors(cache: &ColorCache, key: &str, bg: &str, text: &str) {
    let entry = cache
        .tokens
        .get(key)
        .unwrap_or_else(|| panic!("Token {key} missing from cache: {cache:?}"));
    assert_eq!(entry.bg_color.as_str(), bg, "bgColor of token {key}");
    assert_eq!(
        entry.text_color.as_ref().map(|c| c.as_str()),
        Some(text),
        "textColor of token {key}"
    );
}
