use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration loaded from a YAML file.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the asset registry (`/v2/sdk-info` is appended)
    pub registry_url: Option<String>,

    /// Value for the `x-integrator-id` header
    pub integrator_id: Option<String>,

    /// Color cache JSON file
    pub cache_file: PathBuf,

    /// Failure ledger JSON file
    pub ledger_file: PathBuf,

    /// Directory holding token icons as `{token key}.png`
    pub token_icon_dir: PathBuf,

    /// Pause before each token icon fetch, in milliseconds
    pub token_delay_ms: u64,

    /// Extra catalog fetch attempts after the first one fails
    pub catalog_retries: u32,

    /// Backoff before the first catalog retry; doubles on each attempt
    pub catalog_backoff_ms: u64,

    /// Timeout for each HTTP request, in seconds
    pub http_timeout_secs: u64,

    /// Write a copy of each sampled icon with the ring painted red
    pub highlight: bool,

    /// Where highlight images go
    pub highlight_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            registry_url: None,
            integrator_id: None,
            cache_file: PathBuf::from("colors.json"),
            ledger_file: PathBuf::from("url_fetch_errors.json"),
            token_icon_dir: PathBuf::from("images/migration/png"),
            token_delay_ms: 100,
            catalog_retries: 3,
            catalog_backoff_ms: 500,
            http_timeout_secs: 30,
            highlight: false,
            highlight_dir: PathBuf::from("images/highlighted-area"),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults.
    ///
    /// `None` means no file was configured; that is not worth a warning.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Apply `REGISTRY_URL` and `INTEGRATOR_ID` from the environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var("REGISTRY_URL").ok(),
            std::env::var("INTEGRATOR_ID").ok(),
        )
    }

    fn with_overrides(mut self, registry_url: Option<String>, integrator_id: Option<String>) -> Self {
        if registry_url.is_some() {
            self.registry_url = registry_url;
        }
        if integrator_id.is_some() {
            self.integrator_id = integrator_id;
        }
        self
    }

    pub fn token_delay(&self) -> Duration {
        Duration::from_millis(self.token_delay_ms)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.cache_file, PathBuf::from("colors.json"));
        assert_eq!(config.ledger_file, PathBuf::from("url_fetch_errors.json"));
        assert_eq!(config.token_delay(), Duration::from_millis(100));
        assert_eq!(config.catalog_retries, 3);
        assert!(!config.highlight);
        assert!(config.registry_url.is_none());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let yaml = r#"
registry_url: "https://registry.example.com"
integrator_id: "widget-1"
token_icon_dir: assets/png
token_delay_ms: 0
highlight: true
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(
            config.registry_url.as_deref(),
            Some("https://registry.example.com")
        );
        assert_eq!(config.integrator_id.as_deref(), Some("widget-1"));
        assert_eq!(config.token_icon_dir, PathBuf::from("assets/png"));
        assert_eq!(config.token_delay_ms, 0);
        assert!(config.highlight);
        // untouched fields keep defaults
        assert_eq!(config.catalog_backoff_ms, 500);
        assert_eq!(config.cache_file, PathBuf::from("colors.json"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/colors.yaml")));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_invalid_yaml_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "token_delay_ms: [not, a, number]").unwrap();
        assert_eq!(AppConfig::load(Some(&path)), AppConfig::default());
    }

    #[test]
    fn test_load_no_path() {
        assert_eq!(AppConfig::load(None), AppConfig::default());
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = AppConfig {
            integrator_id: Some("from-file".to_string()),
            ..Default::default()
        }
        .with_overrides(Some("https://env.example".to_string()), None);

        assert_eq!(config.registry_url.as_deref(), Some("https://env.example"));
        assert_eq!(config.integrator_id.as_deref(), Some("from-file"));
    }
}
