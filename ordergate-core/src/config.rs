//! Gateway configuration.
//!
//! The validated runtime configuration for the processor connection. Loading
//! and parsing live in the server crate; the adapter only ever sees this
//! explicit, constructor-injected value. No ambient globals.

use std::time::Duration;
use url::Url;

/// Connection settings for the payment processor.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Root URL of the processor's REST API,
    /// e.g. `https://pay.example.com/payment/rest/`.
    pub base_url: Url,
    /// Merchant API login, sent as the `userName` form field.
    pub user_name: String,
    /// Merchant API password.
    pub password: String,
    /// Timeout applied to every outbound request.
    pub request_timeout: Duration,
}

impl GatewayConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a new `GatewayConfig` with the default request timeout.
    pub fn new(base_url: Url, user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url,
            user_name: user_name.into(),
            password: password.into(),
            request_timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
