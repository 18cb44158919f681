//! Configuration module for ordergate-server.
//!
//! Handles loading configuration from the TOML file and CLI arguments and
//! converting it into the adapter's runtime [`GatewayConfig`].

pub mod file;

use crate::config::file::FileConfig;
use ordergate_core::config::GatewayConfig;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Loaded configuration result containing all parts.
pub struct LoadedConfig {
    pub listen: SocketAddr,
    pub gateway: GatewayConfig,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: std::path::PathBuf,
    listen_override: Option<SocketAddr>,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, listen_override: Option<SocketAddr>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            listen_override,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file
    /// 2. Apply CLI overrides
    /// 3. Validate the configuration
    /// 4. Build the runtime gateway configuration
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let config_content = std::fs::read_to_string(&self.config_path)?;
        let mut file_config: FileConfig = toml::from_str(&config_content)?;

        if let Some(listen) = self.listen_override {
            file_config.server.listen = listen;
        }

        self.validate(&file_config)?;

        Ok(build_loaded_config(file_config))
    }

    /// Reload the configuration (used during SIGHUP).
    pub fn reload(&self) -> Result<LoadedConfig, ConfigError> {
        self.load()
    }

    fn validate(&self, config: &FileConfig) -> Result<(), ConfigError> {
        if config.gateway.user_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "gateway.user_name must not be empty".to_string(),
            ));
        }
        if config.gateway.password.is_empty() {
            return Err(ConfigError::ValidationError(
                "gateway.password must not be empty".to_string(),
            ));
        }
        if config.gateway.base_url.cannot_be_a_base() {
            return Err(ConfigError::ValidationError(format!(
                "gateway.base_url is not a usable base URL: {}",
                config.gateway.base_url
            )));
        }
        Ok(())
    }
}

fn build_loaded_config(file_config: FileConfig) -> LoadedConfig {
    let mut base_url = file_config.gateway.base_url;
    // Url::join replaces the last path segment unless the base ends with a
    // slash, so normalize here rather than at every call site.
    if !base_url.path().ends_with('/') {
        base_url.set_path(&format!("{}/", base_url.path()));
    }

    let gateway = GatewayConfig::new(
        base_url,
        file_config.gateway.user_name,
        file_config.gateway.password,
    )
    .with_request_timeout(Duration::from_secs(file_config.gateway.request_timeout_secs));

    LoadedConfig {
        listen: file_config.server.listen,
        gateway,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file::{GatewaySection, ServerSection};
    use url::Url;

    fn file_config(base_url: &str) -> FileConfig {
        FileConfig {
            server: ServerSection {
                listen: "127.0.0.1:3000".parse().unwrap(),
            },
            gateway: GatewaySection {
                base_url: Url::parse(base_url).unwrap(),
                user_name: "merchant-api".to_string(),
                password: "secret".to_string(),
                request_timeout_secs: 30,
            },
        }
    }

    #[test]
    fn base_url_gains_a_trailing_slash() {
        let loaded = build_loaded_config(file_config("https://pay.example.com/payment/rest"));
        assert_eq!(
            loaded.gateway.base_url.as_str(),
            "https://pay.example.com/payment/rest/"
        );
        assert_eq!(
            loaded
                .gateway
                .base_url
                .join("register.do")
                .unwrap()
                .as_str(),
            "https://pay.example.com/payment/rest/register.do"
        );
    }

    #[test]
    fn already_normalized_base_url_is_untouched() {
        let loaded = build_loaded_config(file_config("https://pay.example.com/payment/rest/"));
        assert_eq!(
            loaded.gateway.base_url.as_str(),
            "https://pay.example.com/payment/rest/"
        );
    }
}
