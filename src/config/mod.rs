//! Configuration management for the gateway
//!
//! This module handles loading and validation of all gateway configuration.
//! Configuration comes from a YAML file when one exists, with environment
//! variables filling in the two required vendor secrets.

pub mod models;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the gateway
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Language-model vendor configuration
    #[serde(default)]
    pub completion: CompletionConfig,
    /// Speech-synthesis vendor configuration
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();

        if let Ok(host) = std::env::var("GATEWAY_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("GATEWAY_PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid port: {}", e)))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    ///
    /// Fails when either vendor secret is missing, so the process refuses to
    /// start without them.
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| GatewayError::Config(format!("Server config error: {}", e)))?;

        self.server
            .cors
            .validate()
            .map_err(|e| GatewayError::Config(format!("CORS config error: {}", e)))?;

        self.completion
            .validate()
            .map_err(|e| GatewayError::Config(format!("Completion config error: {}", e)))?;

        self.speech
            .validate()
            .map_err(|e| GatewayError::Config(format!("Speech config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }
}
