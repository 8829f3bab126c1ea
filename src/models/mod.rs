pub mod catalog;
pub mod color_cache;
pub mod config;
pub mod keys;
pub mod ledger;

pub use catalog::{Catalog, ChainEntity, RawCatalog, TokenEntity};
pub use color_cache::{ColorCache, ColorCacheEntry, ColorValue};
pub use config::AppConfig;
pub use keys::{token_key, NATIVE_EVM_TOKEN_ADDRESS};
pub use ledger::{ChainFailure, FailureLedger, TokenFailure};
