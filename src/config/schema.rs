//! Settings schema

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings read from `config.toml` in the data directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub jump: JumpConfig,
}

/// Where the bookmark list lives
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Bookmark file location
    /// Relative paths are resolved against the data directory
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// How `jump` opens a shell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JumpConfig {
    /// Terminal emulator to launch (Unix only)
    #[serde(default)]
    pub terminal: Option<String>,
    /// Shell started inside the terminal (Unix only)
    #[serde(default)]
    pub shell: Option<String>,
}
