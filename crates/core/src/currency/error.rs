//! Currency error types.

use olooh_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while configuring currency conversion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyError {
    /// Currency code outside the supported set.
    #[error("Unsupported currency: {0}")]
    Unsupported(String),

    /// Exchange rate must be strictly positive.
    #[error("Exchange rate must be positive, got {0}")]
    NonPositiveRate(Decimal),

    /// A peg must link the pivot currency with another currency.
    #[error("Exchange rate must quote {expected} per unit of another currency")]
    InvalidPeg {
        /// Expected target currency code.
        expected: String,
    },
}

impl From<CurrencyError> for AppError {
    fn from(err: CurrencyError) -> Self {
        Self::Configuration(err.to_string())
    }
}
