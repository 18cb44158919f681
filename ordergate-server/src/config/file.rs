//! TOML file configuration structures.
//!
//! These structs directly map to the `ordergate-config.toml` file format.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use url::Url;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub server: ServerSection,
    pub gateway: GatewaySection,
}

/// Server configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    /// The address and port to listen on (e.g., "0.0.0.0:8080").
    #[serde(default = "default_listen_addr")]
    pub listen: SocketAddr,
}

fn default_listen_addr() -> SocketAddr {
    "0.0.0.0:8080".parse().expect("valid default address")
}

/// Payment processor connection section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewaySection {
    /// Root URL of the processor's REST API.
    pub base_url: Url,
    /// Merchant API login (`userName` form field).
    pub user_name: String,
    /// Merchant API password.
    pub password: String,
    /// Outbound request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_parses() {
        let toml_str = r#"
[server]
listen = "127.0.0.1:3000"

[gateway]
base_url = "https://pay.example.com/payment/rest/"
user_name = "merchant-api"
password = "secret"
request_timeout_secs = 10
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.listen.port(), 3000);
        assert_eq!(config.gateway.user_name, "merchant-api");
        assert_eq!(config.gateway.request_timeout_secs, 10);
    }

    #[test]
    fn listen_and_timeout_have_defaults() {
        let toml_str = r#"
[server]

[gateway]
base_url = "https://pay.example.com/payment/rest/"
user_name = "merchant-api"
password = "secret"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.listen.port(), 8080);
        assert_eq!(config.gateway.request_timeout_secs, 30);
    }

    #[test]
    fn missing_credentials_fail_to_parse() {
        let toml_str = r#"
[server]

[gateway]
base_url = "https://pay.example.com/payment/rest/"
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }
}
