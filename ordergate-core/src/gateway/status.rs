//! Status reconciliation for `getOrderStatusExtended.do`.
//!
//! The processor inverts the usual convention: **`errorCode: "0"` means the
//! lookup succeeded**. Only a present, non-zero code is a real error, so a
//! truthiness check on the field is wrong in both directions.
//!
//! One class of real errors is absorbed: "order not found". The processor
//! needs a moment to index a freshly registered order, and a client polling
//! right after creation would otherwise see a hard failure for an order that
//! is perfectly fine. Those lookups resolve to status 0 (pending) instead.

use super::GatewayError;
use super::wire::OrderStatusExtendedResponse;

/// Processor order status meaning full authorization.
pub const ORDER_STATUS_FULLY_AUTHORIZED: i64 = 2;

/// Processor error code for an order id it has not indexed.
pub const ERROR_CODE_ORDER_NOT_FOUND: &str = "6";

/// Reconciled view of an order at the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderStatus {
    /// Raw processor `orderStatus`, 0 when the processor has not indexed
    /// the order yet.
    pub status: i64,
    /// Order amount in minor units, if reported.
    pub amount: Option<u64>,
    /// Numeric ISO currency code, if reported.
    pub currency: Option<String>,
    pub order_description: Option<String>,
    /// True if the order is fully authorized *or* funds were approved
    /// against it. The two signals do not always agree; either one is
    /// sufficient.
    pub paid: bool,
}

/// Derived order state, for logging and callers that do not care about raw
/// processor codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderState {
    /// Not yet visible at the processor, or visible but not paid through.
    Pending,
    Paid,
    /// A processor status code outside the mapped set.
    Unknown,
}

impl OrderStatus {
    pub fn state(&self) -> OrderState {
        if self.paid {
            OrderState::Paid
        } else if matches!(self.status, 0 | 1) {
            OrderState::Pending
        } else {
            OrderState::Unknown
        }
    }

    fn pending() -> Self {
        Self {
            status: 0,
            amount: None,
            currency: None,
            order_description: None,
            paid: false,
        }
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderState::Pending => f.write_str("pending"),
            OrderState::Paid => f.write_str("paid"),
            OrderState::Unknown => f.write_str("unknown"),
        }
    }
}

/// Whether a processor error actually means "order not indexed yet".
///
/// Matches the dedicated error code as well as the known message wordings,
/// case-insensitively. The message heuristic exists because the processor
/// has returned not-found under other codes; if its wording changes, this
/// predicate is the single place to update.
pub fn is_order_not_found(code: &str, message: Option<&str>) -> bool {
    if code == ERROR_CODE_ORDER_NOT_FOUND {
        return true;
    }
    let Some(message) = message else {
        return false;
    };
    let message = message.to_lowercase();
    message.contains("не найден") || message.contains("not found")
}

fn is_success_code(code: Option<&str>) -> bool {
    matches!(code, None | Some("0"))
}

/// Interpret an extended status response into an [`OrderStatus`].
pub(crate) fn reconcile(
    resp: OrderStatusExtendedResponse,
) -> Result<OrderStatus, GatewayError> {
    let code = resp.error_code.as_deref();
    if !is_success_code(code) {
        let code = code.unwrap_or_default().to_string();
        if is_order_not_found(&code, resp.error_message.as_deref()) {
            return Ok(OrderStatus::pending());
        }
        let message = resp
            .error_message
            .unwrap_or_else(|| format!("gateway error code {code}"));
        return Err(GatewayError::StatusLookupFailed { code, message });
    }

    let approved_amount = resp
        .payment_amount_info
        .as_ref()
        .and_then(|info| info.approved_amount);
    let status = resp.order_status.unwrap_or(0);
    let paid =
        status == ORDER_STATUS_FULLY_AUTHORIZED || approved_amount.is_some_and(|a| a > 0);

    Ok(OrderStatus {
        status,
        amount: resp.amount,
        currency: resp.currency,
        order_description: resp.order_description,
        paid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_json(json: &str) -> OrderStatusExtendedResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn error_code_zero_is_success() {
        let status = reconcile(from_json(
            r#"{"errorCode": "0", "orderStatus": 2,
                "paymentAmountInfo": {"approvedAmount": 7199}}"#,
        ))
        .unwrap();
        assert!(status.paid);
        assert_eq!(status.status, 2);
        assert_eq!(status.state(), OrderState::Paid);
    }

    #[test]
    fn absent_error_code_is_success() {
        let status = reconcile(from_json(r#"{"orderStatus": 1}"#)).unwrap();
        assert!(!status.paid);
        assert_eq!(status.state(), OrderState::Pending);
    }

    #[test]
    fn unpaid_order_is_not_paid() {
        let status = reconcile(from_json(
            r#"{"errorCode": "0", "orderStatus": 1,
                "paymentAmountInfo": {"approvedAmount": 0}}"#,
        ))
        .unwrap();
        assert!(!status.paid);
        assert_eq!(status.status, 1);
    }

    #[test]
    fn approved_amount_alone_marks_paid() {
        // The two payment signals are independent; a positive approved
        // amount is sufficient even without the authorized status code.
        let status = reconcile(from_json(
            r#"{"errorCode": "0", "orderStatus": 1,
                "paymentAmountInfo": {"approvedAmount": 500}}"#,
        ))
        .unwrap();
        assert!(status.paid);
    }

    #[test]
    fn not_found_message_resolves_to_pending() {
        let status = reconcile(from_json(
            r#"{"errorCode": "2", "errorMessage": "Order not found"}"#,
        ))
        .unwrap();
        assert_eq!(status.status, 0);
        assert!(!status.paid);
        assert_eq!(status.state(), OrderState::Pending);
    }

    #[test]
    fn not_found_code_resolves_to_pending() {
        let status =
            reconcile(from_json(r#"{"errorCode": "6", "errorMessage": "whatever"}"#)).unwrap();
        assert_eq!(status.status, 0);
        assert!(!status.paid);
    }

    #[test]
    fn russian_not_found_wording_resolves_to_pending() {
        let status = reconcile(from_json(
            r#"{"errorCode": "2", "errorMessage": "Заказ не найден"}"#,
        ))
        .unwrap();
        assert_eq!(status.status, 0);
    }

    #[test]
    fn other_errors_propagate_with_the_processor_message() {
        let err = reconcile(from_json(
            r#"{"errorCode": "5", "errorMessage": "Invalid signature"}"#,
        ))
        .unwrap_err();
        match err {
            GatewayError::StatusLookupFailed { code, message } => {
                assert_eq!(code, "5");
                assert_eq!(message, "Invalid signature");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn numeric_error_code_zero_is_still_success() {
        let status = reconcile(from_json(r#"{"errorCode": 0, "orderStatus": 0}"#)).unwrap();
        assert_eq!(status.status, 0);
        assert!(!status.paid);
    }

    #[test]
    fn amount_fields_pass_through_unmodified() {
        let status = reconcile(from_json(
            r#"{"errorCode": "0", "orderStatus": 2, "amount": "7199",
                "currency": "643", "orderDescription": "Course access",
                "paymentAmountInfo": {"approvedAmount": 7199}}"#,
        ))
        .unwrap();
        assert_eq!(status.amount, Some(7199));
        assert_eq!(status.currency.as_deref(), Some("643"));
        assert_eq!(status.order_description.as_deref(), Some("Course access"));
    }

    #[test]
    fn unknown_status_codes_classify_as_unknown() {
        let status = reconcile(from_json(r#"{"errorCode": "0", "orderStatus": 6}"#)).unwrap();
        assert_eq!(status.state(), OrderState::Unknown);
    }

    #[test]
    fn predicate_matches_all_known_wordings() {
        assert!(is_order_not_found("6", None));
        assert!(is_order_not_found("2", Some("Order not found")));
        assert!(is_order_not_found("2", Some("ORDER NOT FOUND")));
        assert!(is_order_not_found("2", Some("заказ НЕ НАЙДЕН")));
        assert!(!is_order_not_found("2", Some("Invalid signature")));
        assert!(!is_order_not_found("5", None));
    }
}
