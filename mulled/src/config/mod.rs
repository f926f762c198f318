use crate::format::{ColorChoice, OutputFormat};
use libmulled::client::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the catalog API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Network configuration
    #[serde(default)]
    pub network: NetworkConfig,
    /// Style configuration
    #[serde(default)]
    pub style: StyleConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            network: NetworkConfig::default(),
            style: StyleConfig::default(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Network configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Request timeout in seconds; 0 disables the timeout
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
        }
    }
}

/// Style configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StyleConfig {
    /// Output format: pretty, json, yaml
    #[serde(default)]
    pub format: OutputFormat,
    /// Color output control: auto, always, never
    #[serde(default)]
    pub color: ColorChoice,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }
}

/// Get the config file path, respecting MULLED_CONFIG environment variable
pub fn get_config_path() -> PathBuf {
    if let Ok(config_path) = env::var("MULLED_CONFIG") {
        return PathBuf::from(config_path);
    }

    // Default to ~/.config/mulled/config.toml
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("mulled").join("config.toml")
    } else {
        // Fallback to current directory
        PathBuf::from("config.toml")
    }
}
