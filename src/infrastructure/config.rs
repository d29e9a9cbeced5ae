// src/infrastructure/config.rs
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    DEFAULT_CONNECT_URL, DEFAULT_DECK, DEFAULT_SOURCE_LANGUAGE, DEFAULT_TARGET_LANGUAGE,
    DEFAULT_TEMPLATE,
};

/// TOML configuration: where AnkiConnect listens and which deck/template/
/// language pair new notes default to.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub connect: ConnectConfig,
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ConnectConfig {
    #[serde(default = "default_url")]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Defaults {
    #[serde(default = "default_deck")]
    pub deck: String,
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
    #[serde(default = "default_audio")]
    pub audio: bool,
}

// Default value functions
fn default_url() -> String {
    DEFAULT_CONNECT_URL.to_string()
}
fn default_deck() -> String {
    DEFAULT_DECK.to_string()
}
fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}
fn default_source_language() -> String {
    DEFAULT_SOURCE_LANGUAGE.to_string()
}
fn default_target_language() -> String {
    DEFAULT_TARGET_LANGUAGE.to_string()
}
fn default_audio() -> bool {
    true
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            deck: default_deck(),
            template: default_template(),
            source_language: default_source_language(),
            target_language: default_target_language(),
            audio: default_audio(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Load from the user's config directory, falling back to defaults
    /// when no file exists there.
    pub fn load_or_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!(?path, "Loading config file");
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// `$XDG_CONFIG_HOME/vocanki/config.toml` (platform equivalent)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vocanki").join("config.toml"))
    }
}
