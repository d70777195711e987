//! Console configuration management.
//!
//! This module handles loading and saving the console configuration, which
//! includes an optional backend address override and the last used admin
//! email.
//!
//! Configuration is stored at `~/.config/haven-console/config.json`. The
//! backend address can also be overridden with the `HAVEN_API_BASE_URL`
//! environment variable (a `.env` file is honored at startup).

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "haven-console";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Default backend address (the development server).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8101";

/// Environment variable overriding the backend address.
pub const BASE_URL_ENV: &str = "HAVEN_API_BASE_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub last_email: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Effective backend address: environment, then config, then default.
    pub fn base_url(&self) -> String {
        Self::resolve_base_url(std::env::var(BASE_URL_ENV).ok(), self.api_base_url.clone())
    }

    fn resolve_base_url(env: Option<String>, configured: Option<String>) -> String {
        env.filter(|v| !v.is_empty())
            .or(configured)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Directory holding the persisted token document.
    pub fn cache_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_base_url_prefers_env() {
        let url = Config::resolve_base_url(
            Some("https://api.haven.test".to_string()),
            Some("http://configured".to_string()),
        );
        assert_eq!(url, "https://api.haven.test");
    }

    #[test]
    fn test_resolve_base_url_ignores_empty_env() {
        let url = Config::resolve_base_url(Some(String::new()), Some("http://configured".to_string()));
        assert_eq!(url, "http://configured");
    }

    #[test]
    fn test_resolve_base_url_default() {
        assert_eq!(Config::resolve_base_url(None, None), DEFAULT_BASE_URL);
    }
}
