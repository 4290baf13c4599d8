//! Configuration loading logic

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::schema::Config;

/// Environment variable overriding the bookmark file location
pub const STORE_ENV: &str = "BM_STORE";

const APP_DIR: &str = "bm";
const SETTINGS_FILE: &str = "config.toml";
const STORE_FILE: &str = "bookmarks.json";

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load settings from the data directory
    ///
    /// A missing settings file yields the defaults.
    ///
    /// # Errors
    /// Returns an error if the settings file exists but cannot be read or parsed
    pub fn load() -> Result<Self> {
        match Self::settings_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Per-user data directory
    /// Respects `XDG_CONFIG_HOME` environment variable on all platforms.
    /// Fallback: `$HOME/.config/bm`
    #[must_use]
    pub fn data_dir() -> Option<PathBuf> {
        let config_home = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;

        Some(config_home.join(APP_DIR))
    }

    #[must_use]
    pub fn settings_path() -> Option<PathBuf> {
        Self::data_dir().map(|dir| dir.join(SETTINGS_FILE))
    }

    /// Resolve the bookmark file location
    ///
    /// Priority (highest to lowest):
    /// 1. `BM_STORE` environment variable
    /// 2. `store.path` in the settings file
    /// 3. `bookmarks.json` in the data directory
    ///
    /// # Errors
    /// Returns an error if no location can be determined (no home directory)
    pub fn store_path(&self) -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(STORE_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let Some(data_dir) = Self::data_dir() else {
            anyhow::bail!(
                "Could not determine bookmark location (HOME directory not found). \
                 Please set HOME, XDG_CONFIG_HOME or {STORE_ENV}."
            );
        };

        Ok(self.store.path.as_ref().map_or_else(
            || data_dir.join(STORE_FILE),
            |configured| data_dir.join(configured),
        ))
    }
}
