//! asset-colors - brand colors for chain and token icons
//!
//! Samples the border ring of every chain and token icon in the asset
//! catalog and keeps the results in an incremental JSON cache.
//! This library exposes modules for integration testing.

pub mod error;
pub mod imaging;
pub mod models;
pub mod services;
