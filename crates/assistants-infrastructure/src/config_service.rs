//! Configuration service implementation.
//!
//! Loads `ConsoleConfig` from `config.toml` (by default
//! `~/.config/assistant-console/config.toml`) and caches it.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use assistants_core::config::ConsoleConfig;
use assistants_core::error::{AssistantError, Result};

use crate::paths::ConsolePaths;

/// Configuration service that loads and caches the console configuration.
///
/// A missing file is not an error: the defaults are used instead.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit config file; `None` resolves the platform default lazily.
    path: Option<PathBuf>,
    config: Arc<RwLock<Option<ConsoleConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService reading the platform default location.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a ConfigService reading a custom file (for testing).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<ConsoleConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|e| AssistantError::internal(format!("config lock poisoned: {}", e)))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let path = self.config_path()?;
        let loaded = Self::load_from(&path)?;
        tracing::debug!(path = %path.display(), "[ConfigService] configuration loaded");

        let mut write_lock = self
            .config
            .write()
            .map_err(|e| AssistantError::internal(format!("config lock poisoned: {}", e)))?;
        *write_lock = Some(loaded.clone());

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    /// Reads and validates a config file, returning defaults when it is absent.
    pub fn load_from(path: &Path) -> Result<ConsoleConfig> {
        if !path.exists() {
            tracing::info!(
                path = %path.display(),
                "[ConfigService] no config file, using defaults"
            );
            return Ok(ConsoleConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: ConsoleConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => ConsolePaths::config_file().map_err(|e| AssistantError::config(e.to_string())),
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
