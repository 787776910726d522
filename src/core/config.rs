//! Application configuration management
//!
//! This module handles loading and validating configuration from TOML
//! files. All configuration is validated at startup.

use crate::core::constants::{API_ENDPOINT, DEFAULT_VERSION};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT: u64 = 90;

/// Default server port
const DEFAULT_PORT: u16 = 8082;

#[derive(Debug, Clone, Deserialize)]
pub struct WatsonConfig {
    pub username: String,
    pub password: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestConfig {
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            request_timeout: default_request_timeout(),
        }
    }
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

fn default_base_url() -> String {
    API_ENDPOINT.to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT
}

#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    pub watson: WatsonConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub request: RequestConfig,
}

/// Application configuration loaded from TOML files
///
/// All values are loaded and validated at startup so the application fails
/// fast if misconfigured.
#[derive(Debug, Clone)]
pub struct Config {
    /// Service username for upstream basic auth
    pub watson_username: String,

    /// Service password for upstream basic auth
    pub watson_password: String,

    /// API version sent with every upstream call
    pub watson_version: String,

    /// Upstream endpoint URL
    pub watson_base_url: String,

    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Logging level
    pub log_level: String,

    /// Upstream request timeout in seconds
    pub request_timeout: u64,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed, or if required
    /// values are missing.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read configuration file")?;

        let config: TomlConfig =
            toml::from_str(&content).context("Failed to parse TOML configuration")?;

        Ok(Config {
            watson_username: config.watson.username,
            watson_password: config.watson.password,
            watson_version: config.watson.version,
            watson_base_url: config.watson.base_url,
            host: config.server.host,
            port: config.server.port,
            log_level: config.server.log_level,
            request_timeout: config.request.request_timeout,
        })
    }

    /// Load configuration from environment and config file
    ///
    /// Looks for config.toml in current directory by default
    pub fn from_env() -> Result<Self> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        Self::from_file(config_path)
    }

    /// Validate that both credentials are present
    pub fn validate_credentials(&self) -> bool {
        !self.watson_username.is_empty() && !self.watson_password.is_empty()
    }
}
