// src/money.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display currency for bid amounts.
///
/// The backend ships plain numeric amounts; which currency they denote is a
/// deployment-level setting, so it lives here as configuration rather than on
/// the wire types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    INR,
    USD,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "₹",
            Currency::USD => "$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::INR => write!(f, "INR"),
            Currency::USD => write!(f, "USD"),
        }
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INR" => Ok(Currency::INR),
            "USD" => Ok(Currency::USD),
            _ => Err(format!("Unknown currency: {}", s)),
        }
    }
}

pub type AmountValue = i64;

/// Formats an amount for user-facing output, e.g. `₹6500`.
pub fn format_amount(currency: Currency, value: AmountValue) -> String {
    format!("{}{}", currency.symbol(), value)
}
