//! Payments API client (merchant backend → ordergate server).

use reqwest::Client;
use url::Url;

use super::ClientError;
use crate::objects::payments::{CheckStatusResponse, CreateOrderRequest, CreateOrderResponse};

/// Typed HTTP client for the ordergate **payments API**.
#[derive(Debug, Clone)]
pub struct PaymentsClient {
    http: Client,
    base_url: Url,
}

impl PaymentsClient {
    /// Create a new `PaymentsClient`.
    ///
    /// * `base_url` – root URL of the ordergate server
    ///   (e.g. `https://pay.example.com`).
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// `POST /payments/create-order` – register a new order with the
    /// processor and obtain the hosted payment page URL.
    pub async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, ClientError> {
        let url = self.base_url.join("/payments/create-order")?;

        let resp = self.http.post(url).json(request).send().await?;

        parse_response(resp).await
    }

    /// `GET /payments/check-status/{order_id}` – poll the processor-side
    /// status of a previously created order.
    pub async fn check_status(&self, order_id: &str) -> Result<CheckStatusResponse, ClientError> {
        let url = self
            .base_url
            .join(&format!("/payments/check-status/{order_id}"))?;

        let resp = self.http.get(url).send().await?;

        parse_response(resp).await
    }
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Api { status, body });
    }
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ClientError::Json)
}
