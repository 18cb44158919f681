//! Supported-currency table.
//!
//! The processor addresses currencies by ISO 4217 numeric code. The table is
//! closed: anything outside it is rejected before a request is built, there
//! is no silent default.

use serde::{Deserialize, Serialize};

/// Currencies the adapter accepts for order creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Rub,
    Usd,
    Eur,
}

/// The requested currency is not in the supported table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported currency: {0}")]
pub struct UnsupportedCurrency(pub String);

impl Currency {
    /// ISO 4217 numeric code, as the processor expects it on the wire.
    pub fn numeric_code(self) -> u16 {
        match self {
            Currency::Rub => 643,
            Currency::Usd => 840,
            Currency::Eur => 978,
        }
    }

    /// ISO 4217 alphabetic code.
    pub fn iso_code(self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Resolve an alphabetic code, case-insensitively.
    pub fn from_iso(code: &str) -> Result<Self, UnsupportedCurrency> {
        match code.to_ascii_uppercase().as_str() {
            "RUB" => Ok(Currency::Rub),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            other => Err(UnsupportedCurrency(other.to_string())),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = UnsupportedCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_iso(s)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.iso_code())
    }
}
