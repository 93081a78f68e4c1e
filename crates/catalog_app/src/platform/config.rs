use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use catalog_core::SortKey;
use catalog_engine::CatalogSettings;
use catalog_logging::LogDestination;
use serde::{Deserialize, Serialize};

/// Environment variable holding the catalog API key.
pub const API_KEY_ENV: &str = "TMDB_API";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogTarget {
    #[default]
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

/// Optional overrides read from the RON config file. Unset fields keep the
/// engine defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub language: Option<String>,
    pub connect_timeout_ms: Option<u64>,
    pub request_timeout_ms: Option<u64>,
    pub max_bytes: Option<u64>,
    pub highlight_count: Option<usize>,
    pub preview_count: Option<usize>,
    pub page_cap: Option<u32>,
    pub log_level: Option<String>,
    pub log_target: LogTarget,
    pub log_file: PathBuf,
    pub initial_category: Option<u64>,
    pub sort: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            language: None,
            connect_timeout_ms: None,
            request_timeout_ms: None,
            max_bytes: None,
            highlight_count: None,
            preview_count: None,
            page_cap: None,
            log_level: None,
            log_target: LogTarget::File,
            log_file: PathBuf::from("catalog.log"),
            initial_category: None,
            sort: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Reads `path`. A missing file is not an error and yields the defaults.
pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl AppConfig {
    /// Engine settings with this config's overrides applied. A non-empty
    /// `env_api_key` wins over the file.
    pub fn catalog_settings(&self, env_api_key: Option<String>) -> CatalogSettings {
        let defaults = CatalogSettings::default();
        let api_key = env_api_key
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone())
            .unwrap_or(defaults.api_key);

        CatalogSettings {
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            api_key,
            language: self.language.clone().unwrap_or(defaults.language),
            connect_timeout: self
                .connect_timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.connect_timeout),
            request_timeout: self
                .request_timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.request_timeout),
            max_bytes: self.max_bytes.unwrap_or(defaults.max_bytes),
            highlight_count: self.highlight_count.unwrap_or(defaults.highlight_count),
            preview_count: self.preview_count.unwrap_or(defaults.preview_count),
            page_cap: self.page_cap.unwrap_or(defaults.page_cap),
        }
    }

    /// Initial sort key; unknown names fall back to arrival order.
    pub fn sort_key(&self) -> SortKey {
        self.sort
            .as_deref()
            .and_then(|name| name.parse().ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load(&temp.path().join("absent.ron")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.sort_key(), SortKey::None);
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.ron");
        fs::write(
            &path,
            r#"(
                base_url: Some("http://localhost:9000/3"),
                request_timeout_ms: Some(1500),
                page_cap: Some(20),
                log_target: Both,
                sort: Some("rating-desc"),
            )"#,
        )
        .unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.log_target, LogTarget::Both);
        assert_eq!(config.sort_key(), SortKey::RatingDesc);

        let settings = config.catalog_settings(None);
        assert_eq!(settings.base_url, "http://localhost:9000/3");
        assert_eq!(settings.request_timeout, Duration::from_millis(1500));
        assert_eq!(settings.page_cap, 20);
        assert_eq!(settings.language, "en-US");
        assert_eq!(settings.highlight_count, 5);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.ron");
        fs::write(&path, "(page_cap: \"lots\"").unwrap();
        assert!(matches!(load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn environment_key_wins_over_file_key() {
        let config = AppConfig {
            api_key: Some("from-file".into()),
            ..AppConfig::default()
        };
        assert_eq!(
            config.catalog_settings(Some("from-env".into())).api_key,
            "from-env"
        );
        assert_eq!(
            config.catalog_settings(Some("  ".into())).api_key,
            "from-file"
        );
        assert_eq!(AppConfig::default().catalog_settings(None).api_key, "");
    }

    #[test]
    fn unknown_sort_name_falls_back_to_arrival_order() {
        let config = AppConfig {
            sort: Some("shuffle".into()),
            ..AppConfig::default()
        };
        assert_eq!(config.sort_key(), SortKey::None);
    }
}
