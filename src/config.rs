use std::fs;
use std::path::{Path, PathBuf};

use dirs::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{GroupBy, OrderBy, ViewOptions};
use crate::client::{DEFAULT_URL, URL_ENV};

const APP_NAME: &str = "kanban-board";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// URL of the tickets-and-users endpoint
    pub endpoint: String,
    /// Initial grouping
    pub group_by: GroupBy,
    /// Initial ordering
    pub order_by: OrderBy,
    /// BCP-47 tag used to collate titles. `None` means root collation.
    pub locale: Option<String>,
    /// Port for `kanban serve`
    pub port: u16,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_URL.to_string(),
            group_by: GroupBy::default(),
            order_by: OrderBy::default(),
            locale: None,
            port: 3000,
        }
    }
}

impl BoardConfig {
    /// Load configuration from the user's config directory, then apply the
    /// `KANBAN_BOARD_URL` override.
    pub fn load() -> Self {
        Self::load_file().with_endpoint_override(std::env::var(URL_ENV).ok())
    }

    /// Load only what is on disk. Falls back to defaults if the file is
    /// missing or unreadable.
    pub fn load_file() -> Self {
        match default_config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Replace the endpoint when an override is present.
    pub fn with_endpoint_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.endpoint = url;
        }
        self
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        fs::write(path, content).map_err(io_err)
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions::new(self.group_by, self.order_by)
    }
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let mut path = config_dir().ok_or(ConfigError::NoConfigDir)?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
