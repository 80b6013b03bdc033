//! Optional `browser.ron` settings, with an environment override for the
//! backend URL.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use browser_core::{QueryState, DEFAULT_PAGE_SIZE};
use browser_engine::FetchSettings;
use browser_logging::{browser_info, browser_warn};
use serde::{Deserialize, Serialize};

use crate::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "browser.ron";
pub const BACKEND_URL_ENV: &str = "BROWSER_BACKEND_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend_url: String,
    pub page_size: u32,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub max_bytes: u64,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            backend_url: fetch.base_url,
            page_size: DEFAULT_PAGE_SIZE,
            connect_timeout_ms: duration_ms(fetch.connect_timeout),
            request_timeout_ms: duration_ms(fetch.request_timeout),
            max_bytes: fetch.max_bytes,
            log_destination: LogDestination::File,
        }
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl AppConfig {
    /// Replaces the backend URL when the override is set and non-blank.
    pub fn with_backend_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            self.backend_url = url;
        }
        self
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.backend_url.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_bytes: self.max_bytes,
        }
    }

    /// Initial query. A zero page size falls back to the default.
    pub fn initial_query(&self) -> QueryState {
        QueryState::with_page_size(self.page_size).unwrap_or_else(|err| {
            browser_warn!("Config page_size {}: {}; using default", self.page_size, err);
            QueryState::new()
        })
    }
}

pub fn parse_config(text: &str) -> Result<AppConfig, ConfigError> {
    Ok(ron::from_str(text)?)
}

/// Reads `browser.ron` from `dir`, or `None` when the file does not exist.
pub fn read_config(dir: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(ConfigError::Read { path, source }),
    };
    parse_config(&content).map(Some)
}

/// Loads the config from `dir`, falling back to defaults on any problem, then
/// applies the environment override.
pub fn load_config(dir: &Path) -> AppConfig {
    let config = match read_config(dir) {
        Ok(Some(config)) => {
            browser_info!("Loaded config from {:?}", dir.join(CONFIG_FILENAME));
            config
        }
        Ok(None) => AppConfig::default(),
        Err(err) => {
            browser_warn!("{}; using defaults", err);
            AppConfig::default()
        }
    };
    config.with_backend_override(std::env::var(BACKEND_URL_ENV).ok())
}
