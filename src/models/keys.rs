//! Entity keys and address normalization
//!
//! Token colors are cached under `{chainId}_{address}` with the address
//! lowercased and stripped of `/`, which keeps keys usable as file names
//! (token icons are stored as `{key}.png`) and makes lookups
//! case-insensitive.

use regex::Regex;
use std::sync::OnceLock;

/// Placeholder address used for the native gas token on EVM-family chains.
pub const NATIVE_EVM_TOKEN_ADDRESS: &str = "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee";

/// Prefix some Evmos-style chains put in front of ERC-20 contract addresses.
const ERC20_PREFIX: &str = "erc20/";

const SANCTUM_CHAIN_ID: &str = "solana-mainnet-beta";
const SANCTUM_NAME_PREFIX: &str = "Sanctum Automated ";

fn sanctum_symbol_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z0-9]{5}SOL$").expect("static regex is valid"))
}

/// Normalize an address for use inside a cache key.
pub fn normalize_address(address: &str) -> String {
    address.replace('/', "").to_lowercase()
}

/// Cache key for a token: `{chain_id}_{normalized address}`.
pub fn token_key(chain_id: &str, address: &str) -> String {
    format!("{chain_id}_{}", normalize_address(address))
}

/// Rewrite a token address found on an Evmos-style chain to its canonical
/// EVM form.
///
/// The chain's native currency (matched by symbol, or by an address equal to
/// the lowercased symbol) maps to [`NATIVE_EVM_TOKEN_ADDRESS`]. Addresses of
/// the form `erc20/0x...` lose the prefix. Anything else is returned as is.
pub fn normalize_evmos_address(address: &str, symbol: &str, native_symbol: &str) -> String {
    if !native_symbol.is_empty()
        && (symbol.eq_ignore_ascii_case(native_symbol)
            || address.eq_ignore_ascii_case(native_symbol))
    {
        return NATIVE_EVM_TOKEN_ADDRESS.to_string();
    }

    match address.get(..ERC20_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(ERC20_PREFIX) => {
            address[ERC20_PREFIX.len()..].to_lowercase()
        }
        _ => address.to_string(),
    }
}

/// Auto-generated Sanctum LST wrappers on Solana (e.g. `Sanctum Automated
/// abcdeSOL`) have no meaningful artwork and are left out of the catalog.
pub fn is_sanctum_automated_token(chain_id: &str, name: &str, symbol: &str) -> bool {
    chain_id == SANCTUM_CHAIN_ID
        && name.starts_with(SANCTUM_NAME_PREFIX)
        && sanctum_symbol_pattern().is_match(symbol)
}
