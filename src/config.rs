//! Global configuration management
//!
//! Config is stored at `~/.bylines/config.toml`:
//!
//! ```toml
//! [store]
//! backend = "toml"                 # or "memory"
//! path = ".bylines/records.toml"   # records file for the toml backend
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::ports::BackendKind;
use crate::paths;

/// Global bylines configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Record storage settings
    #[serde(default)]
    pub store: StoreConfig,
}

/// Record storage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Which backend holds the records
    #[serde(default)]
    pub backend: BackendKind,

    /// Records file for the toml backend
    #[serde(default = "paths::records_file")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            path: paths::records_file(),
        }
    }
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or the default if missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, or the default if missing or unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|content| Ok(toml::from_str::<Self>(&content)?))
        {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring config at {}: {err}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Replace the records path (e.g. from a command-line flag)
    #[must_use]
    pub fn with_records_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.store.path = path;
        }
        self
    }
}
