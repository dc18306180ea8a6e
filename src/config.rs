//! Configuration module for reelmap
//!
//! Manages application defaults such as the catalog location. Configuration
//! is stored in the user's config directory and created silently with
//! defaults on first run; command-line flags override it per invocation.

use crate::catalog::CatalogError;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ReelmapConfig {
    /// Default catalog CSV to load when `--data` is not given
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Default cap on fuzzy search results
    #[serde(default = "default_top_results")]
    pub top_results: usize,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

fn default_top_results() -> usize {
    crate::search::TOP_RESULTS
}

impl Default for ReelmapConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            top_results: crate::search::TOP_RESULTS,
            quiet: false,
        }
    }
}

impl ReelmapConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be
    /// determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("reelmap").join("config.toml"))
    }

    /// Load configuration from file, creating the default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or
    /// created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, creating the default if it
    /// doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or
    /// created.
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to its default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be
    /// written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to an explicit path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be
    /// written.
    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Resolve the catalog path for this invocation: the command-line
    /// override if given, the configured default otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotConfigured`] when neither is present.
    pub fn catalog_path(&self, cli_override: Option<PathBuf>) -> Result<PathBuf, CatalogError> {
        cli_override
            .or_else(|| self.catalog.clone())
            .ok_or(CatalogError::NotConfigured)
    }
}
