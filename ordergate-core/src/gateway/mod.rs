//! Adapter for the processor's order registration and status API.
//!
//! Two operations: register an order, look up its status. The processor is
//! the source of truth; the adapter keeps no state between calls and every
//! call is an independent outbound request. Retry policy belongs to the
//! caller.

mod client;
mod order_number;
mod status;
mod wire;

pub use client::{GatewayClient, OrderRequest, RegisteredOrder};
pub use order_number::generate_order_number;
pub use status::{
    ERROR_CODE_ORDER_NOT_FOUND, ORDER_STATUS_FULLY_AUTHORIZED, OrderState, OrderStatus,
    is_order_not_found,
};
pub use wire::{OrderStatusExtendedResponse, PaymentAmountInfo, RegisterResponse};

use ordergate_sdk::currency::UnsupportedCurrency;
use reqwest::StatusCode;

/// Errors produced by the gateway adapter.
///
/// `Transport` and `BadStatus` are both transport-level failures (network
/// error vs. non-2xx response); the remaining variants are processor-level
/// rejections or bad input caught before any request is made.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The requested currency is outside the supported table. Rejected
    /// pre-flight, no request is issued.
    #[error(transparent)]
    UnsupportedCurrency(#[from] UnsupportedCurrency),

    /// The order amount is below one minor unit. Rejected pre-flight.
    #[error("invalid amount: {0}")]
    InvalidAmount(u64),

    /// Network-level failure contacting the processor.
    #[error("gateway transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The processor answered with a non-2xx status code.
    #[error("gateway returned status {status}: {body}")]
    BadStatus { status: StatusCode, body: String },

    /// The processor declined order creation.
    #[error("{message}")]
    OrderRejected { code: String, message: String },

    /// The processor declined the status lookup for a reason other than
    /// "order not found".
    #[error("{message}")]
    StatusLookupFailed { code: String, message: String },

    /// The processor's response body could not be parsed.
    #[error("invalid gateway response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// A success response was missing a required field.
    #[error("malformed gateway response: missing {0}")]
    MissingField(&'static str),

    /// The endpoint path could not be joined onto the base URL.
    #[error("invalid gateway url: {0}")]
    Url(#[from] url::ParseError),
}
