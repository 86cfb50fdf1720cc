//! Settings Persistence
//!
//! Locates the configuration file in the platform config directory and
//! loads it, falling back to defaults when none has been written yet.

use crate::config::Config;
use std::path::{Path, PathBuf};
use stitchkit_core::{Error, Result};

/// Application directory name under the platform config directory
pub const APP_DIR: &str = "stitchkit";

/// Configuration file name
pub const CONFIG_FILE: &str = "config.toml";

/// Locates and loads the persisted configuration
pub struct SettingsManager;

impl SettingsManager {
    /// Platform config directory for StitchKit
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .map(|p| p.join(APP_DIR))
            .ok_or_else(|| Error::other("Could not determine config directory"))
    }

    /// Default configuration file path
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Create the config directory if it does not exist
    pub fn ensure_config_dir() -> Result<PathBuf> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Load `path`, or the default config file when `path` is `None`.
    ///
    /// A missing default file yields the default configuration. A missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Config::load_from_file(path),
            None => {
                let default_path = Self::config_file_path()?;
                Self::load_or_default(&default_path)
            }
        }
    }

    /// Load `path` if it exists, otherwise return defaults
    pub fn load_or_default(path: &Path) -> Result<Config> {
        if path.exists() {
            Config::load_from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Config::default())
        }
    }

    /// Save to the default config file, creating its directory
    pub fn save(config: &Config) -> Result<PathBuf> {
        let path = Self::ensure_config_dir()?.join(CONFIG_FILE);
        config.save_to_file(&path)?;
        tracing::info!(path = %path.display(), "Saved configuration");
        Ok(path)
    }
}
