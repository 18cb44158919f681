//! Request and response objects of the payments API.
//!
//! Shared between the server handlers and the merchant client so both sides
//! agree on field names. Everything is camelCase on the wire.

use serde::{Deserialize, Serialize};

/// Request payload for `POST /payments/create-order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Amount in minor currency units. Must be at least 1.
    pub amount: u64,
    /// ISO 4217 alphabetic code. The adapter resolves it against the
    /// supported table ([`crate::currency::Currency`]) and rejects anything
    /// outside it before contacting the processor.
    pub currency: String,
    pub description: String,
    /// URL the payer is sent back to after the hosted payment page.
    pub return_url: String,
    /// Optional server-to-server notification URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

/// Successful response of `POST /payments/create-order`.
///
/// `md_order` and `order_id` carry the same processor-assigned identifier;
/// the processor uses either field name depending on the endpoint, so the
/// adapter exposes both for compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub success: bool,
    pub md_order: String,
    pub order_id: String,
    /// Hosted payment page to redirect the payer to.
    pub form_url: String,
}

/// Successful response of `GET /payments/check-status/{order_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckStatusResponse {
    pub success: bool,
    /// Raw processor order status. `0` for orders the processor has not
    /// indexed yet.
    pub status: i64,
    /// Order amount in minor units, if the processor reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    /// Numeric ISO currency code as reported by the processor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_description: Option<String>,
    pub paid: bool,
}

/// Uniform failure envelope for all payments endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
