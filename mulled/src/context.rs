//! Application context that holds resolved configuration
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Config file values
//! 3. Environment variables
//! 4. CLI flags
//!
//! Once built, the context is passed as read-only throughout the application.

use crate::config::{self, Config};
use crate::format::{ColorChoice, OutputFormat};
use libmulled::ClientConfig;
use std::env;

/// How much diagnostic output goes to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    Normal,
    /// -v: one line per request
    Verbose,
    /// -vv: resolved settings and response sizes
    VeryVerbose,
    /// -vvv and above: request headers
    Trace,
}

impl VerbosityLevel {
    /// Map the number of `-v` flags to a level
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => VerbosityLevel::Normal,
            1 => VerbosityLevel::Verbose,
            2 => VerbosityLevel::VeryVerbose,
            _ => VerbosityLevel::Trace,
        }
    }
}

/// Settings given on the command line; `None` means "not set"
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub color: Option<ColorChoice>,
    pub format: Option<OutputFormat>,
    pub timeout: Option<u64>,
}

/// Application context with resolved configuration and runtime state
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Resolved configuration
    pub config: Config,
    /// Diagnostic verbosity from -v flags
    pub verbosity: VerbosityLevel,
}

impl AppContext {
    /// Build context with precedence: defaults > config file > env vars > CLI flags
    pub fn build(cli: CliOverrides, verbosity: VerbosityLevel) -> Self {
        // 1. Start with defaults, 2. replace with the config file if present
        let config_path = config::get_config_path();
        let config = Config::load(&config_path).unwrap_or_default();

        Self::resolve(config, cli, verbosity)
    }

    /// Apply environment and CLI overrides on top of a loaded config
    pub fn resolve(mut config: Config, cli: CliOverrides, verbosity: VerbosityLevel) -> Self {
        // 3. Apply environment variable overrides
        if let Ok(endpoint) = env::var("MULLED_ENDPOINT")
            && !endpoint.trim().is_empty()
        {
            config.endpoint = endpoint;
        }
        if let Ok(color) = env::var("MULLED_COLOR") {
            config.style.color = ColorChoice::from(color.as_str());
        }

        // 4. Apply CLI flag overrides (highest priority)
        if let Some(endpoint) = cli.endpoint {
            config.endpoint = endpoint;
        }
        if let Some(color) = cli.color {
            config.style.color = color;
        }
        if let Some(format) = cli.format {
            config.style.format = format;
        }
        if let Some(timeout) = cli.timeout {
            config.network.timeout = timeout;
        }

        Self { config, verbosity }
    }

    /// HTTP client settings derived from the resolved configuration
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new().with_timeout(self.config.network.timeout)
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
