//! Demerit configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemeritConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub handbook: HandbookConfig,
}

impl Default for DemeritConfig {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig::default(),
            handbook: HandbookConfig::default(),
        }
    }
}

/// HTTP gateway settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "0.0.0.0".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

/// Handbook document and retrieval settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandbookConfig {
    /// Path to the handbook text file. Supports `~` expansion.
    #[serde(default = "default_handbook_path")]
    pub path: String,
    /// Paragraphs shorter than this many characters are never returned.
    #[serde(default = "default_min_passage_len")]
    pub min_passage_len: usize,
    /// Passage cap for the plain handbook search endpoint.
    #[serde(default = "default_search_max_passages")]
    pub search_max_passages: usize,
    /// Passage cap for the chatbot's focused retrieval step.
    #[serde(default = "default_chat_max_passages")]
    pub chat_max_passages: usize,
}

fn default_handbook_path() -> String {
    "~/.demerit/handbook.txt".into()
}
fn default_min_passage_len() -> usize {
    40
}
fn default_search_max_passages() -> usize {
    3
}
fn default_chat_max_passages() -> usize {
    2
}

impl Default for HandbookConfig {
    fn default() -> Self {
        Self {
            path: default_handbook_path(),
            min_passage_len: default_min_passage_len(),
            search_max_passages: default_search_max_passages(),
            chat_max_passages: default_chat_max_passages(),
        }
    }
}

impl HandbookConfig {
    /// Handbook path with `~` expanded.
    pub fn resolved_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.path).into_owned())
    }
}

impl DemeritConfig {
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".demerit")
            .join("config.toml")
    }

    /// Load from the default path, or defaults if no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::error::DemeritError::Config(format!("Failed to read config: {e}"))
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            crate::error::DemeritError::Config(format!("Failed to parse config: {e}"))
        })?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::error::DemeritError::Config(format!("Failed to serialize config: {e}"))
        })?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}
