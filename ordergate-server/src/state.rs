//! Application state shared across all request handlers.

use ordergate_core::gateway::GatewayClient;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state that is shared across all request handlers.
///
/// This is cloneable and cheap to pass around (everything is behind Arc).
#[derive(Clone)]
pub struct AppState {
    /// Gateway client (replaced wholesale on SIGHUP config reload).
    pub gateway: Arc<RwLock<GatewayClient>>,
}

impl AppState {
    /// Create a new AppState with the given gateway client.
    pub fn new(gateway: GatewayClient) -> Self {
        Self {
            gateway: Arc::new(RwLock::new(gateway)),
        }
    }

    /// Snapshot the current gateway client.
    ///
    /// The client is cheap to clone (the connection pool is shared), and a
    /// snapshot keeps a reload from blocking in-flight requests.
    pub async fn gateway(&self) -> GatewayClient {
        self.gateway.read().await.clone()
    }

    /// Replace the gateway client (used during SIGHUP reload).
    pub async fn replace_gateway(&self, new_client: GatewayClient) {
        let mut gateway = self.gateway.write().await;
        *gateway = new_client;
    }
}
