//! Reading and writing the cache and ledger files
//!
//! Files are written to a sibling `*.tmp` file and renamed into place, so a
//! failed or interrupted write leaves the previous file untouched.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::PersistenceError;
use crate::models::{ColorCache, FailureLedger};

/// Locations of the two output files.
#[derive(Debug, Clone)]
pub struct CacheStore {
    cache_path: PathBuf,
    ledger_path: PathBuf,
}

impl CacheStore {
    pub fn new(cache_path: impl Into<PathBuf>, ledger_path: impl Into<PathBuf>) -> Self {
        Self {
            cache_path: cache_path.into(),
            ledger_path: ledger_path.into(),
        }
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    pub fn ledger_path(&self) -> &Path {
        &self.ledger_path
    }

    /// Load the color cache. A missing file is an empty cache; an unreadable
    /// or corrupt file is an error, so it never gets replaced by an empty one.
    pub async fn load_cache(&self) -> Result<ColorCache, PersistenceError> {
        let bytes = match tokio::fs::read(&self.cache_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.cache_path.display(), "No color cache yet, starting empty");
                return Ok(ColorCache::new());
            }
            Err(source) => {
                return Err(PersistenceError::Io {
                    path: self.cache_path.clone(),
                    source,
                })
            }
        };

        let cache: ColorCache =
            serde_json::from_slice(&bytes).map_err(|source| PersistenceError::Parse {
                path: self.cache_path.clone(),
                source,
            })?;
        tracing::info!(
            path = %self.cache_path.display(),
            chains = cache.chains.len(),
            tokens = cache.tokens.len(),
            "Loaded color cache"
        );
        Ok(cache)
    }

    /// Write both files. Each write is attempted even if the other fails.
    pub async fn save(
        &self,
        cache: &ColorCache,
        ledger: &FailureLedger,
    ) -> Result<(), PersistenceError> {
        let (cache_result, ledger_result) = tokio::join!(
            write_json_atomic(&self.cache_path, cache),
            write_json_atomic(&self.ledger_path, ledger),
        );

        let mut errors = Vec::new();
        for (result, path, what) in [
            (cache_result, &self.cache_path, "Colors"),
            (ledger_result, &self.ledger_path, "Failed URLs"),
        ] {
            match result {
                Ok(()) => tracing::info!(path = %path.display(), "{what} saved"),
                Err(e) => {
                    tracing::error!(%e, "Error writing {}", what.to_lowercase());
                    errors.push(e);
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(PersistenceError::Incomplete(errors))
        }
    }
}

/// Pretty-print `value` to `path` via a temporary sibling and a rename.
pub async fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistenceError> {
    let mut json = serde_json::to_vec_pretty(value)?;
    json.push(b'\n');

    let io_err = |source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    tokio::fs::write(&tmp_path, &json).await.map_err(io_err)?;
    if let Err(e) = tokio::fs::rename(&tmp_path, path).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(io_err(e));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ring_sampler::{Rgb, TextColor};

    #[tokio::test]
    async fn test_load_missing_cache_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path().join("colors.json"), dir.path().join("errors.json"));
        assert_eq!(store.load_cache().await.unwrap(), ColorCache::new());
        // loading does not create the file
        assert!(!store.cache_path().exists());
    }

    #[tokio::test]
    async fn test_load_corrupt_cache_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = CacheStore::new(&path, dir.path().join("errors.json"));
        assert!(matches!(
            store.load_cache().await,
            Err(PersistenceError::Parse { .. })
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(
            dir.path().join("nested/colors.json"),
            dir.path().join("errors.json"),
        );
        let mut cache = ColorCache::new();
        cache.set_chain_color("1", Rgb::new(1, 2, 3));
        cache.set_token_colors("1_0xabc", Rgb::new(4, 5, 6), TextColor::Light);

        store.save(&cache, &FailureLedger::new()).await.unwrap();

        assert_eq!(store.load_cache().await.unwrap(), cache);
        let ledger = std::fs::read_to_string(store.ledger_path()).unwrap();
        assert!(ledger.contains("\"chains\": []"));
        assert!(!dir.path().join("nested/colors.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_failed_write_keeps_previous_file_and_writes_other() {
        let dir = tempfile::tempdir().unwrap();
        // a directory where the ledger file should go makes the rename fail
        let ledger_path = dir.path().join("errors.json");
        std::fs::create_dir(&ledger_path).unwrap();
        std::fs::write(ledger_path.join("keep"), "x").unwrap();

        let cache_path = dir.path().join("colors.json");
        let store = CacheStore::new(&cache_path, &ledger_path);

        let result = store.save(&ColorCache::new(), &FailureLedger::new()).await;
        match result {
            Err(PersistenceError::Incomplete(errors)) => assert_eq!(errors.len(), 1),
            other => panic!("Expected Incomplete, got {other:?}"),
        }
        assert!(cache_path.exists());
        assert!(ledger_path.join("keep").exists());
        assert!(!dir.path().join("errors.json.tmp").exists());
    }
}
