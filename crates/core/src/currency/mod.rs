//! Multi-currency handling.
//!
//! Every amount is routed through a single pivot currency (XOF) before it is
//! re-expressed in a display currency.

pub(crate) mod arithmetic;
pub mod converter;
pub mod error;
pub mod exchange;

#[cfg(test)]
mod props;

pub use converter::{CurrencyConverter, EUR_TO_XOF, FixedPegConverter, PIVOT_CURRENCY};
pub use error::CurrencyError;
pub use exchange::ExchangeRate;
