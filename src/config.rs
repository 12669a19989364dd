//! Configuration loaded from `<config_dir>/snipcard/config.toml`.

use crate::models::STORAGE_KEY;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Roughly what browsers allow per origin in local storage.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Overrides the platform data directory.
    pub data_dir: Option<PathBuf>,
    pub storage_key: String,
    /// `None` disables the quota.
    pub quota_bytes: Option<usize>,
    /// Default log filter when neither `SNIPCARD_LOG` nor `RUST_LOG` is set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: STORAGE_KEY.to_string(),
            quota_bytes: Some(DEFAULT_QUOTA_BYTES),
            log_level: String::from("warn"),
        }
    }
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    data_dir: Option<String>,
    storage_key: Option<String>,
    /// `0` disables the quota.
    quota_bytes: Option<usize>,
    log_level: Option<String>,
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("snipcard").join("config.toml"))
    }

    /// Loads the default config file, falling back to defaults when it doesn't exist.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        let defaults = Self::default();

        let storage_key = match file.storage_key {
            Some(key) if key.trim().is_empty() => anyhow::bail!("storage_key must not be empty"),
            Some(key) => key,
            None => defaults.storage_key,
        };

        Ok(Self {
            data_dir: file.data_dir.map(PathBuf::from),
            storage_key,
            quota_bytes: match file.quota_bytes {
                Some(0) => None,
                Some(limit) => Some(limit),
                None => defaults.quota_bytes,
            },
            log_level: file.log_level.unwrap_or(defaults.log_level),
        })
    }
}
