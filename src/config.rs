//! Configuration loading and persistence.
//!
//! Handles reading the pushlink configuration file. The store key is
//! never written to disk; it comes from the environment (or whatever
//! secret storage the embedding app wires in).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Build-time/app-level configuration for the notification flow.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct AppConfig {
    /// Push project identifier used when requesting a delivery token.
    /// An explicit [`crate::provision::RegisterOptions::project_id`] takes
    /// precedence over this value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Base URL of the remote device store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_url: Option<String>,
    /// API key for the remote device store - NOT serialized to disk.
    #[serde(skip)]
    pub store_key: Option<String>,
}

impl AppConfig {
    /// Returns the configuration directory path, creating it if necessary.
    ///
    /// Directory selection priority:
    /// 1. `PUSHLINK_CONFIG_DIR` env var: explicit override (tests)
    /// 2. Default: platform config dir (macOS: ~/Library/Application Support/pushlink)
    pub fn config_dir() -> Result<PathBuf> {
        let dir = if let Ok(custom_dir) = std::env::var("PUSHLINK_CONFIG_DIR") {
            PathBuf::from(custom_dir)
        } else {
            dirs::config_dir()
                .context("Could not determine config directory")?
                .join("pushlink")
        };
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Loads configuration from file, with environment variable overrides.
    ///
    /// A missing or unreadable file yields the defaults; configuration is
    /// optional (a token can be provisioned without a project id when the
    /// backend does not require one).
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from_file().unwrap_or_default();
        config.apply_env_overrides();
        Ok(config)
    }

    /// Applies `PUSHLINK_PROJECT_ID`, `PUSHLINK_STORE_URL`, and
    /// `PUSHLINK_STORE_KEY` overrides from the environment.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(project_id) = std::env::var("PUSHLINK_PROJECT_ID") {
            if !project_id.is_empty() {
                self.project_id = Some(project_id);
            }
        }
        if let Ok(store_url) = std::env::var("PUSHLINK_STORE_URL") {
            if !store_url.is_empty() {
                self.store_url = Some(store_url);
            }
        }
        if let Ok(store_key) = std::env::var("PUSHLINK_STORE_KEY") {
            if !store_key.is_empty() {
                self.store_key = Some(store_key);
            }
        }
    }

    fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("pushlink.json"))
    }

    fn load_from_file() -> Result<Self> {
        let path = Self::config_file()?;
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Saves the non-secret fields to the config file.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file()?;
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}
