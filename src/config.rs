use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub cricket: CricketConfig,
    pub webhook: WebhookConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CricketConfig {
    pub api_key: String,
    /// Endpoint the match list is fetched from. Configurable because the
    /// upstream path has not been confirmed against the payload it returns.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WebhookConfig {
    pub url: String,
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_avatar_url")]
    pub avatar_url: String,
}

fn default_base_url() -> String {
    "https://api.cricapi.com/v1/countries".to_string()
}

fn default_username() -> String {
    "Cricket Live".to_string()
}

fn default_avatar_url() -> String {
    "https://i.imgur.com/pEURUtL_d.webp?maxwidth=1520&fidelity=grand".to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }
}
