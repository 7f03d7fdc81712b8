use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use board_logging::board_info;
use jobboard_core::DEFAULT_PAGE_SIZE;
use jobboard_engine::FetchSettings;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "jobboard.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub page_size: usize,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_body_bytes: u64,
    pub log_destination: LogDestination,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            base_url: fetch.base_url,
            page_size: DEFAULT_PAGE_SIZE,
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            max_body_bytes: fetch.max_bytes,
            log_destination: LogDestination::default(),
            log_level: "info".to_string(),
        }
    }
}

/// Values given on the command line; each one overrides the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub page_size: Option<usize>,
    pub log_destination: Option<LogDestination>,
}

impl AppConfig {
    pub fn from_ron(text: &str) -> anyhow::Result<Self> {
        ron::from_str(text).context("invalid config")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_ron(&text).with_context(|| format!("in {}", path.display()))?;
        board_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// An explicit path must exist; the default file is optional.
    pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        if let Some(page_size) = overrides.page_size {
            self.page_size = page_size;
        }
        if let Some(destination) = overrides.log_destination {
            self.log_destination = destination;
        }
    }

    pub fn level(&self) -> LevelFilter {
        board_logging::parse_level(&self.log_level)
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_body_bytes,
            ..FetchSettings::default()
        }
    }
}
