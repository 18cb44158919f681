//! Wire types for the processor's REST API.
//!
//! The processor takes form-encoded POST bodies and answers with JSON. Its
//! numeric fields arrive as either JSON numbers or strings depending on the
//! endpoint, so everything numeric goes through a string-or-number
//! deserializer. Absent fields stay `None`, they are never coerced to 0.

use serde::{Deserialize, Deserializer, Serialize};

/// Form body of `POST register.do`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterOrderForm {
    pub user_name: String,
    pub password: String,
    pub order_number: String,
    pub amount: u64,
    /// ISO 4217 numeric code.
    pub currency: u16,
    pub return_url: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

/// Form body of `POST getOrderStatusExtended.do`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatusQueryForm {
    pub user_name: String,
    pub password: String,
    pub order_id: String,
}

/// Response of `POST register.do`.
///
/// On success the processor returns the assigned identifier under either
/// `orderId` or `mdOrder` (sometimes both) plus the hosted payment page URL.
/// On failure it returns `errorCode`/`errorMessage` instead.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[serde(default, deserialize_with = "opt_code")]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub md_order: Option<String>,
    #[serde(default)]
    pub form_url: Option<String>,
}

/// Response of `POST getOrderStatusExtended.do`.
///
/// `errorCode` of `"0"` (or absent) means the lookup succeeded; see the
/// `status` module for the full interpretation rules.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusExtendedResponse {
    #[serde(default, deserialize_with = "opt_code")]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub order_status: Option<i64>,
    #[serde(default, deserialize_with = "opt_u64")]
    pub amount: Option<u64>,
    #[serde(default, deserialize_with = "opt_code")]
    pub currency: Option<String>,
    #[serde(default)]
    pub order_description: Option<String>,
    #[serde(default)]
    pub payment_amount_info: Option<PaymentAmountInfo>,
}

/// `paymentAmountInfo` block of the extended status response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAmountInfo {
    #[serde(default, deserialize_with = "opt_u64")]
    pub approved_amount: Option<u64>,
    #[serde(default)]
    pub payment_state: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Number(i64),
    String(String),
}

fn opt_code<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<StringOrNumber>::deserialize(de)? {
        None => None,
        Some(StringOrNumber::Number(n)) => Some(n.to_string()),
        Some(StringOrNumber::String(s)) => Some(s),
    })
}

fn opt_i64<'de, D: Deserializer<'de>>(de: D) -> Result<Option<i64>, D::Error> {
    match Option::<StringOrNumber>::deserialize(de)? {
        None => Ok(None),
        Some(StringOrNumber::Number(n)) => Ok(Some(n)),
        Some(StringOrNumber::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

fn opt_u64<'de, D: Deserializer<'de>>(de: D) -> Result<Option<u64>, D::Error> {
    match opt_i64(de)? {
        None => Ok(None),
        Some(n) => u64::try_from(n).map(Some).map_err(serde::de::Error::custom),
    }
}
