//! Optional user configuration
//!
//! Read from `<config dir>/ff-lookup/config.toml` when present. Every key is
//! optional; missing keys fall back to the defaults below.
//!
//! ```toml
//! lookup_delay_ms = 1500
//! reveal_step_ms = 120
//! operator = "Admin"
//! sidebar = true
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const CONFIG_DIR: &str = "ff-lookup";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Simulated lookup latency
    pub lookup_delay_ms: u64,
    /// Gap between result sections appearing
    pub reveal_step_ms: u64,
    /// Name shown in the header
    pub operator: String,
    /// Start with the sidebar visible
    pub sidebar: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lookup_delay_ms: 1500,
            reveal_step_ms: 120,
            operator: "Admin".to_string(),
            sidebar: true,
        }
    }
}

impl Config {
    /// `<config dir>/ff-lookup/config.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load `explicit` if given (it must exist), otherwise the default path if
    /// it exists, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_path(&path),
            _ => {
                log::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn lookup_delay(&self) -> Duration {
        Duration::from_millis(self.lookup_delay_ms)
    }

    pub fn reveal_step(&self) -> Duration {
        Duration::from_millis(self.reveal_step_ms)
    }
}
