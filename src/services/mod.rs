pub mod cache_manager;
pub mod cache_store;
pub mod catalog_client;
pub mod color_extractor;
pub mod icon_store;

pub use cache_manager::{CacheManager, RunSummary, Tally};
pub use cache_store::CacheStore;
pub use catalog_client::{CatalogSource, RegistryClient, StaticCatalog};
pub use color_extractor::ColorExtractor;
pub use icon_store::{IconSource, IconStore};
