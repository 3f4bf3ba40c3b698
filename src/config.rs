use crate::error::{LivestockAiError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_PROXY_URL: &str = "http://localhost:8787/classify";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Classification proxy endpoint the CLI posts images to
    pub proxy_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proxy_url: DEFAULT_PROXY_URL.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| LivestockAiError::Config("Home directory not found".into()))?;
        Ok(home.join(".config").join("livestock-ai").join("config.json"))
    }

    /// Effective proxy URL: CLI flag wins, then environment, then the
    /// config file.
    pub fn resolve_proxy_url(&self, flag: Option<&str>) -> String {
        if let Some(url) = flag {
            return url.to_string();
        }
        if let Ok(url) = std::env::var("LIVESTOCK_PROXY_URL") {
            return url;
        }
        self.proxy_url.clone()
    }

    pub fn set_proxy_url(&mut self, url: String) -> Result<()> {
        self.proxy_url = url;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.proxy_url, DEFAULT_PROXY_URL);
    }

    #[test]
    fn test_resolve_proxy_url_flag_wins() {
        let config = Config::default();
        let url = config.resolve_proxy_url(Some("http://override/classify"));
        assert_eq!(url, "http://override/classify");
    }

    #[test]
    fn test_config_roundtrip_json() {
        let config = Config {
            proxy_url: "http://example.com/classify".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.proxy_url, config.proxy_url);
    }
}
