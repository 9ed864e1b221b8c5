use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::maze::types::Policy;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "mazebot";

const DEFAULT_PACE_MS: u64 = 500;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Turn-priority policy: "right-first" or "left-first".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,

    /// Milliseconds between moves when animating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pace_ms: Option<u64>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `mazebot config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents =
            format!("# Mazebot configuration — https://github.com/mklab-se/mazebot\n{yaml}");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.policy" => {
                if Policy::from_name(value).is_none() {
                    anyhow::bail!(
                        "Invalid policy: {value}. Must be 'right-first' or 'left-first'."
                    );
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .policy = Some(value.to_string());
            }
            "defaults.pace_ms" => {
                let pace: u64 = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid pace_ms: {value}. Must be a number of milliseconds."))?;
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .pace_ms = Some(pace);
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.policy, defaults.pace_ms"
            ),
        }
        Ok(())
    }

    /// The configured default policy, falling back to right-first.
    pub fn default_policy(&self) -> Policy {
        self.defaults
            .as_ref()
            .and_then(|d| d.policy.as_deref())
            .and_then(Policy::from_name)
            .unwrap_or_default()
    }

    /// The configured animation pace, falling back to 500 ms.
    pub fn default_pace_ms(&self) -> u64 {
        self.defaults
            .as_ref()
            .and_then(|d| d.pace_ms)
            .unwrap_or(DEFAULT_PACE_MS)
    }
}
