use crate::global;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub activity: ActivityConfig,
    pub ptt: PttConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityConfig {
    /// Milliseconds without input before the session is considered idle.
    pub idle_timeout_ms: u64,
}

impl ActivityConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms)
    }
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            idle_timeout_ms: 4000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PttConfig {
    /// Key that drives push-to-talk, as reported by the host event source.
    /// The default is the space key.
    pub key: String,
    /// Whether push-to-talk mode starts enabled for the session.
    pub start_enabled: bool,
}

impl Default for PttConfig {
    fn default() -> Self {
        Self {
            key: " ".to_string(),
            start_enabled: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;

        info!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        global::config_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.activity.idle_timeout_ms, 4000);
        assert_eq!(config.activity.timeout(), Duration::from_millis(4000));
        assert_eq!(config.ptt.key, " ");
        assert!(!config.ptt.start_enabled);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[activity]\nidle_timeout_ms = 10000\n").unwrap();
        assert_eq!(config.activity.idle_timeout_ms, 10000);
        assert_eq!(config.ptt.key, " ");
    }
}
