//! Payments API handlers.
//!
//! Thin HTTP surface over the gateway adapter. Every adapter error is
//! translated into the uniform `{ success: false, error }` envelope with a
//! 400 status; the failure is logged with its order context first.
//!
//! # Endpoints
//!
//! - `POST /payments/create-order`            – register an order with the processor
//! - `GET  /payments/check-status/{order_id}` – poll the processor-side status

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use ordergate_core::gateway::{GatewayError, OrderRequest};
use ordergate_sdk::objects::payments::{
    CheckStatusResponse, CreateOrderRequest, CreateOrderResponse, ErrorResponse,
};

use crate::state::AppState;

/// Build the payments API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/payments/create-order", post(create_order))
        .route("/payments/check-status/{order_id}", get(check_status))
}

/// `POST /payments/create-order` — register a new order.
async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, PaymentsApiError> {
    let gateway = state.gateway().await;

    let request = OrderRequest {
        amount: body.amount,
        currency: body.currency,
        description: body.description,
        return_url: body.return_url,
        callback_url: body.callback_url,
    };

    let registered = gateway.register_order(&request).await.map_err(|e| {
        tracing::error!(
            amount = request.amount,
            currency = %request.currency,
            error = %e,
            "order creation failed"
        );
        PaymentsApiError(e)
    })?;

    tracing::info!(
        order_id = %registered.order_id,
        amount = request.amount,
        currency = %request.currency,
        "order registered"
    );

    Ok(Json(CreateOrderResponse {
        success: true,
        md_order: registered.order_id.clone(),
        order_id: registered.order_id,
        form_url: registered.form_url,
    }))
}

/// `GET /payments/check-status/{order_id}` — poll order status.
///
/// An order the processor has not indexed yet resolves to a pending status,
/// not an error; see the reconciliation rules in `ordergate_core`.
async fn check_status(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, PaymentsApiError> {
    let gateway = state.gateway().await;

    let status = gateway.order_status(&order_id).await.map_err(|e| {
        tracing::error!(order_id = %order_id, error = %e, "status lookup failed");
        PaymentsApiError(e)
    })?;

    tracing::info!(
        order_id = %order_id,
        state = %status.state(),
        paid = status.paid,
        "order status resolved"
    );

    Ok(Json(CheckStatusResponse {
        success: true,
        status: status.status,
        amount: status.amount,
        currency: status.currency,
        order_description: status.order_description,
        paid: status.paid,
    }))
}

/// Adapter error surfaced through the payments API.
#[derive(Debug)]
struct PaymentsApiError(GatewayError);

impl IntoResponse for PaymentsApiError {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(self.0.to_string())),
        )
            .into_response()
    }
}
