//! Merchant-side order number generation.
//!
//! Format: `ORDER_<unix millis>_<0-999>`. Wall-clock time plus a small
//! random suffix is a best-effort uniqueness scheme, not a guaranteed one:
//! two calls within the same millisecond can draw the same suffix. The
//! random source is not cryptographic and must not be treated as a secret.

use rand::Rng;
use time::OffsetDateTime;

/// Generate a new order number for `register.do`.
pub fn generate_order_number() -> String {
    let suffix = rand::rng().random_range(0..1000u16);
    format_order_number(unix_millis_now(), suffix)
}

fn format_order_number(unix_millis: i128, suffix: u16) -> String {
    format!("ORDER_{unix_millis}_{suffix}")
}

fn unix_millis_now() -> i128 {
    OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000
}
