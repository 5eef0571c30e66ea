//! Configuration for the waitlist service.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Service configuration. Every field has a default, so the service starts
/// with no environment at all.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level, overridden by RUST_LOG when set
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables (`SERVER__PORT` etc.).
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_field() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert_eq!(config.server.listen_addr, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config: Config = serde_json::from_str(r#"{"server": {"port": 8080}}"#).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.listen_addr, "0.0.0.0");
    }
}
