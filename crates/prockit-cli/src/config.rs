//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON)
//! - Command-line arguments (applied by the handlers)

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Longest hex token the CLI will generate
pub const MAX_HEX_LENGTH: usize = 4096;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// URI validation defaults
    pub uri: UriConfig,

    /// Hex token defaults
    pub hex: HexConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no -v flag or RUST_LOG is given
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<String>,
}

/// URI validation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UriConfig {
    /// Require an explicit scheme instead of prefixing http://
    pub strict: bool,
}

/// Hex token configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexConfig {
    /// Default token length in characters
    pub length: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Default for HexConfig {
    fn default() -> Self {
        Self { length: 32 }
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("yaml") | Some("yml")
    )
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;

        let config: Config = if is_yaml(path) {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => {
                        tracing::debug!(path = %path.display(), "Loaded configuration");
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to load config");
                    }
                }
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Path of the per-user config file
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("prockit").join("config.yaml"))
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            // Current directory
            PathBuf::from(".prockit.yaml"),
            PathBuf::from(".prockit.json"),
            PathBuf::from("prockit.yaml"),
            PathBuf::from("prockit.json"),
        ];

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let prockit_dir = config_dir.join("prockit");
            paths.push(prockit_dir.join("config.yaml"));
            paths.push(prockit_dir.join("config.json"));
        }

        // Home directory
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".prockit.yaml"));
            paths.push(home_dir.join(".prockit.json"));
        }

        paths
    }

    /// Reject values the handlers cannot use
    pub fn validate(&self) -> Result<()> {
        if self.hex.length == 0 {
            return Err(Error::config("hex.length must be at least 1"));
        }
        if self.hex.length > MAX_HEX_LENGTH {
            return Err(Error::config(format!(
                "hex.length must be at most {} (got {})",
                MAX_HEX_LENGTH, self.hex.length
            )));
        }
        if let Some(format) = &self.logging.format {
            if !matches!(format.to_lowercase().as_str(), "compact" | "full" | "json") {
                return Err(Error::config(format!(
                    "logging.format must be compact, full or json (got '{}')",
                    format
                )));
            }
        }
        Ok(())
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_yaml(path) {
            serde_yaml::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
