//! Form-encoded HTTP client for the processor.

use ordergate_sdk::currency::Currency;
use tracing::debug;

use super::wire::{
    OrderStatusExtendedResponse, RegisterOrderForm, RegisterResponse, StatusQueryForm,
};
use super::{GatewayError, OrderStatus, generate_order_number, status};
use crate::config::GatewayConfig;

/// An order to register with the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// Amount in minor currency units. Must be at least 1.
    pub amount: u64,
    /// ISO 4217 alphabetic code; resolved against the supported table
    /// before any request is built.
    pub currency: String,
    pub description: String,
    pub return_url: String,
    pub callback_url: Option<String>,
}

/// A successfully registered order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredOrder {
    /// Processor-assigned identifier. Returned under both `orderId` and
    /// `mdOrder` by the API surface; this is the one logical value.
    pub order_id: String,
    /// Hosted payment page to redirect the payer to.
    pub form_url: String,
}

/// Client for the processor's order registration and status endpoints.
///
/// Stateless between calls: registering an order leaves no local record, and
/// status lookups have no side effects on the processor, so concurrent calls
/// for the same or different orders are safe.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl GatewayClient {
    /// Create a new client from explicit configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { http, config }
    }

    /// Replace the default `reqwest::Client` with a custom one.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    /// Register a new order via `register.do`.
    ///
    /// Generates a fresh order number, resolves the currency code and
    /// submits the registration form. Input problems (amount below 1,
    /// unsupported currency) fail before any request is issued.
    pub async fn register_order(
        &self,
        order: &OrderRequest,
    ) -> Result<RegisteredOrder, GatewayError> {
        let order_number = generate_order_number();
        let form = build_register_form(&self.config, order, order_number)?;

        debug!(
            order_number = %form.order_number,
            amount = form.amount,
            currency = form.currency,
            "registering order"
        );

        let url = self.config.base_url.join("register.do")?;
        let resp = self.http.post(url).form(&form).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GatewayError::BadStatus { status, body });
        }

        let body = resp.bytes().await?;
        let parsed: RegisterResponse = serde_json::from_slice(&body)?;
        interpret_register(parsed)
    }

    /// Look up the status of a registered order via
    /// `getOrderStatusExtended.do`.
    ///
    /// A processor-side "order not found" resolves to a pending status
    /// rather than an error; see the reconciliation rules in `status`.
    pub async fn order_status(&self, order_id: &str) -> Result<OrderStatus, GatewayError> {
        let form = StatusQueryForm {
            user_name: self.config.user_name.clone(),
            password: self.config.password.clone(),
            order_id: order_id.to_string(),
        };

        debug!(order_id, "querying order status");

        let url = self.config.base_url.join("getOrderStatusExtended.do")?;
        let resp = self.http.post(url).form(&form).send().await?;

        let http_status = resp.status();
        if !http_status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GatewayError::BadStatus {
                status: http_status,
                body,
            });
        }

        let body = resp.bytes().await?;
        let parsed: OrderStatusExtendedResponse = serde_json::from_slice(&body)?;
        status::reconcile(parsed)
    }
}

/// Validate the order and build the registration form.
///
/// All pre-flight rejections happen here, before the client touches the
/// network.
fn build_register_form(
    config: &GatewayConfig,
    order: &OrderRequest,
    order_number: String,
) -> Result<RegisterOrderForm, GatewayError> {
    if order.amount == 0 {
        return Err(GatewayError::InvalidAmount(order.amount));
    }
    let currency = Currency::from_iso(&order.currency)?;

    Ok(RegisterOrderForm {
        user_name: config.user_name.clone(),
        password: config.password.clone(),
        order_number,
        amount: order.amount,
        currency: currency.numeric_code(),
        return_url: order.return_url.clone(),
        description: order.description.clone(),
        callback_url: order.callback_url.clone(),
    })
}

/// Interpret a `register.do` response.
fn interpret_register(resp: RegisterResponse) -> Result<RegisteredOrder, GatewayError> {
    if let Some(code) = resp.error_code.as_deref()
        && code != "0"
    {
        let message = resp
            .error_message
            .unwrap_or_else(|| format!("gateway error code {code}"));
        return Err(GatewayError::OrderRejected {
            code: code.to_string(),
            message,
        });
    }

    // The processor returns the identifier as orderId or mdOrder depending
    // on gateway version; accept either.
    let order_id = resp
        .order_id
        .or(resp.md_order)
        .ok_or(GatewayError::MissingField("orderId"))?;
    let form_url = resp
        .form_url
        .ok_or(GatewayError::MissingField("formUrl"))?;

    Ok(RegisteredOrder { order_id, form_url })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use url::Url;

    fn test_config() -> GatewayConfig {
        GatewayConfig::new(
            Url::parse("https://pay.example.com/payment/rest/").unwrap(),
            "merchant-api",
            "secret",
        )
        .with_request_timeout(Duration::from_secs(5))
    }

    fn order(currency: &str) -> OrderRequest {
        OrderRequest {
            amount: 7199,
            currency: currency.to_string(),
            description: "Course access".to_string(),
            return_url: "https://merchant.example/return".to_string(),
            callback_url: None,
        }
    }

    #[test]
    fn unsupported_currency_fails_before_any_request() {
        let err = build_register_form(&test_config(), &order("JPY"), "ORDER_1_1".to_string())
            .unwrap_err();
        assert!(matches!(err, GatewayError::UnsupportedCurrency(_)));
    }

    #[test]
    fn zero_amount_fails_before_any_request() {
        let mut req = order("RUB");
        req.amount = 0;
        let err =
            build_register_form(&test_config(), &req, "ORDER_1_1".to_string()).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidAmount(0)));
    }

    #[test]
    fn form_carries_credentials_and_numeric_currency() {
        let form =
            build_register_form(&test_config(), &order("EUR"), "ORDER_1_1".to_string()).unwrap();
        assert_eq!(form.user_name, "merchant-api");
        assert_eq!(form.password, "secret");
        assert_eq!(form.currency, 978);
        assert_eq!(form.amount, 7199);
    }

    #[test]
    fn register_success_accepts_either_identifier_field() {
        let by_order_id: RegisterResponse = serde_json::from_str(
            r#"{"orderId": "a1b2", "formUrl": "https://pay.example.com/form/a1b2"}"#,
        )
        .unwrap();
        let registered = interpret_register(by_order_id).unwrap();
        assert_eq!(registered.order_id, "a1b2");

        let by_md_order: RegisterResponse = serde_json::from_str(
            r#"{"mdOrder": "a1b2", "formUrl": "https://pay.example.com/form/a1b2"}"#,
        )
        .unwrap();
        assert_eq!(interpret_register(by_md_order).unwrap().order_id, "a1b2");
    }

    #[test]
    fn register_error_code_zero_is_not_a_rejection() {
        let resp: RegisterResponse = serde_json::from_str(
            r#"{"errorCode": "0", "orderId": "a1b2",
                "formUrl": "https://pay.example.com/form/a1b2"}"#,
        )
        .unwrap();
        assert!(interpret_register(resp).is_ok());
    }

    #[test]
    fn register_rejection_surfaces_the_processor_message() {
        let resp: RegisterResponse = serde_json::from_str(
            r#"{"errorCode": "1", "errorMessage": "Order number is duplicated"}"#,
        )
        .unwrap();
        let err = interpret_register(resp).unwrap_err();
        match err {
            GatewayError::OrderRejected { code, message } => {
                assert_eq!(code, "1");
                assert_eq!(message, "Order number is duplicated");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn register_success_without_form_url_is_malformed() {
        let resp: RegisterResponse =
            serde_json::from_str(r#"{"orderId": "a1b2"}"#).unwrap();
        let err = interpret_register(resp).unwrap_err();
        assert!(matches!(err, GatewayError::MissingField("formUrl")));
    }
}
