//! Exchange rate types and logic.

use olooh_shared::types::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Exchange rate between two currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency.
    pub from_currency: Currency,
    /// Target currency.
    pub to_currency: Currency,
    /// Exchange rate (1 from_currency = rate to_currency).
    pub rate: Decimal,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    #[must_use]
    pub const fn new(from_currency: Currency, to_currency: Currency, rate: Decimal) -> Self {
        Self {
            from_currency,
            to_currency,
            rate,
        }
    }
}

impl std::fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "1 {} = {} {}",
            self.from_currency, self.rate, self.to_currency
        )
    }
}
