//! Shared types for the ordergate payment adapter.
//!
//! Contains the supported-currency table and the request/response objects
//! of the adapter's HTTP API. With the `client` cargo feature enabled it
//! also provides a typed `reqwest` client for merchant backends.

pub mod currency;
pub mod objects;

#[cfg(feature = "client")]
pub mod client;

pub use currency::{Currency, UnsupportedCurrency};
