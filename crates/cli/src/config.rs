// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration management.
//!
//! Configuration is stored in `.barriers/config.toml` and includes:
//! - `metadata`: Path to the metadata document (status labels, countries, sectors)
//! - `date_format`: chrono format string used for text output
//! - `wrap_width`: Maximum width of wrapped note and summary text

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = ".barriers";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration stored in `.barriers/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Metadata document path (relative paths resolve against the config file).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PathBuf>,
    /// Timestamp format for text output.
    pub date_format: String,
    /// Wrap width for note and summary text (excluding indent).
    pub wrap_width: usize,
    /// File this configuration was read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            metadata: None,
            date_format: "%Y-%m-%d %H:%M".to_string(),
            wrap_width: 96,
            source: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::ConfigNotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if config.wrap_width == 0 {
            return Err(Error::Config {
                path: path.to_path_buf(),
                reason: "wrap_width must be greater than zero".to_string(),
            });
        }

        if StrftimeItems::new(&config.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::Config {
                path: path.to_path_buf(),
                reason: format!("invalid date_format '{}'", config.date_format),
            });
        }

        if let (Some(metadata), Some(dir)) = (&config.metadata, path.parent()) {
            if metadata.is_relative() {
                config.metadata = Some(dir.join(metadata));
            }
        }
        config.source = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Find and load configuration for the current process.
    ///
    /// Lookup order: explicit path, `$BARRIERS_CONFIG`, `.barriers/config.toml`
    /// in the current directory, then the user config directory.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let from_env = env::config_path();
        let cwd = std::env::current_dir()?;
        let user = dirs::config_dir().map(|d| d.join("barriers").join(CONFIG_FILE_NAME));
        Self::discover_from(explicit, from_env.as_deref(), &cwd, user.as_deref())
    }

    /// Testable form of [`Config::discover`].
    pub fn discover_from(
        explicit: Option<&Path>,
        env: Option<&Path>,
        cwd: &Path,
        user: Option<&Path>,
    ) -> Result<Self> {
        // Explicitly named files must exist
        if let Some(path) = explicit.or(env) {
            return Self::load(path);
        }

        let local = cwd.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if local.is_file() {
            return Self::load(&local);
        }

        match user {
            Some(path) if path.is_file() => Self::load(path),
            _ => Ok(Config::default()),
        }
    }

    /// The metadata document to use, preferring a command-line override.
    pub fn metadata_path(&self, flag: Option<&Path>) -> Result<PathBuf> {
        flag.map(Path::to_path_buf)
            .or_else(|| self.metadata.clone())
            .ok_or(Error::MissingMetadata)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
