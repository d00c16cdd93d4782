//! Configuration management for the notation service
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (MILLER_*)
//! 3. Config file (~/.config/miller/config.toml)
//! 4. Default values

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port the server listens on
    pub port: u16,

    /// Origin allowed by CORS (the visualization frontend)
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8081,
            cors_origin: "http://localhost:3000".to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/miller/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("miller").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - MILLER_PORT: Port the server listens on
    /// - MILLER_CORS_ORIGIN: Origin allowed by CORS
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(port) = std::env::var("MILLER_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::Config(format!("Invalid MILLER_PORT: {}", port)))?;
        }

        if let Ok(origin) = std::env::var("MILLER_CORS_ORIGIN") {
            self.server.cors_origin = origin;
        }

        Ok(self)
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, port: Option<u16>, cors_origin: Option<String>) -> Self {
        if let Some(port) = port {
            self.server.port = port;
        }

        if let Some(origin) = cors_origin {
            self.server.cors_origin = origin;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(port: Option<u16>, cors_origin: Option<String>) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()?
            .with_cli_overrides(port, cors_origin))
    }
}
