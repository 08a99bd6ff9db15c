//! Currency conversion through the pivot currency.
//!
//! CRITICAL: No rounding happens here. Amounts are rounded only when they are
//! rendered, never before summation.

use olooh_shared::types::{Currency, Money};
use rust_decimal::Decimal;

use super::arithmetic;
use super::error::CurrencyError;
use super::exchange::ExchangeRate;

/// Currency every conversion is routed through.
pub const PIVOT_CURRENCY: Currency = Currency::Xof;

/// Fixed peg: 1 EUR = 655.957 XOF.
pub const EUR_TO_XOF: Decimal = Decimal::from_parts(655_957, 0, 0, false, 3);

/// Converts amounts between supported currencies.
///
/// Implementors only describe the hop to and from the pivot; `convert`
/// composes the two.
pub trait CurrencyConverter {
    /// The pivot currency.
    fn pivot(&self) -> Currency {
        PIVOT_CURRENCY
    }

    /// Expresses `amount` (in `currency`) in the pivot currency.
    fn to_pivot(&self, amount: Decimal, currency: Currency) -> Decimal;

    /// Expresses a pivot amount in `currency`.
    fn from_pivot(&self, amount: Decimal, currency: Currency) -> Decimal;

    /// Converts between any two supported currencies.
    ///
    /// Same-currency conversion returns `amount` untouched.
    fn convert(&self, amount: Decimal, from: Currency, to: Currency) -> Decimal {
        if from == to {
            return amount;
        }
        self.from_pivot(self.to_pivot(amount, from), to)
    }

    /// Converts a `Money` value into `to`.
    fn convert_money(&self, money: Money, to: Currency) -> Money {
        Money::new(self.convert(money.amount, money.currency, to), to)
    }
}

/// Converter backed by a single fixed exchange rate against the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPegConverter {
    peg: ExchangeRate,
}

impl FixedPegConverter {
    /// Creates a converter quoting `rate` pivot units per EUR.
    ///
    /// # Errors
    ///
    /// Returns an error if `rate` is zero or negative.
    pub fn new(rate: Decimal) -> Result<Self, CurrencyError> {
        Self::from_rate(ExchangeRate::new(Currency::Eur, PIVOT_CURRENCY, rate))
    }

    /// Creates a converter from an explicit exchange rate.
    ///
    /// # Errors
    ///
    /// Returns an error if the rate does not quote the pivot currency per unit
    /// of another currency, or is not strictly positive.
    pub fn from_rate(peg: ExchangeRate) -> Result<Self, CurrencyError> {
        if peg.to_currency != PIVOT_CURRENCY || peg.from_currency == PIVOT_CURRENCY {
            return Err(CurrencyError::InvalidPeg {
                expected: PIVOT_CURRENCY.to_string(),
            });
        }
        if peg.rate <= Decimal::ZERO {
            return Err(CurrencyError::NonPositiveRate(peg.rate));
        }
        Ok(Self { peg })
    }

    /// The exchange rate this converter applies.
    #[must_use]
    pub const fn rate(&self) -> ExchangeRate {
        self.peg
    }
}

impl Default for FixedPegConverter {
    fn default() -> Self {
        Self {
            peg: ExchangeRate::new(Currency::Eur, PIVOT_CURRENCY, EUR_TO_XOF),
        }
    }
}

impl CurrencyConverter for FixedPegConverter {
    fn to_pivot(&self, amount: Decimal, currency: Currency) -> Decimal {
        match currency {
            Currency::Xof => amount,
            Currency::Eur => arithmetic::mul(amount, self.peg.rate),
        }
    }

    fn from_pivot(&self, amount: Decimal, currency: Currency) -> Decimal {
        match currency {
            Currency::Xof => amount,
            Currency::Eur => amount.checked_div(self.peg.rate).unwrap_or(Decimal::ZERO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_eur_to_pivot_multiplies() {
        let converter = FixedPegConverter::default();
        assert_eq!(converter.to_pivot(dec!(20), Currency::Eur), dec!(13119.14));
    }

    #[test]
    fn test_pivot_to_eur_divides() {
        let converter = FixedPegConverter::default();
        assert_eq!(converter.from_pivot(dec!(13119.14), Currency::Eur), dec!(20));
    }

    #[test]
    fn test_pivot_is_identity_for_xof() {
        let converter = FixedPegConverter::default();
        assert_eq!(converter.to_pivot(dec!(5000), Currency::Xof), dec!(5000));
        assert_eq!(converter.from_pivot(dec!(5000), Currency::Xof), dec!(5000));
    }

    #[test]
    fn test_same_currency_is_untouched() {
        let converter = FixedPegConverter::default();
        let amount = dec!(0.0000001234567890123456789);
        assert_eq!(converter.convert(amount, Currency::Eur, Currency::Eur), amount);
    }

    #[test]
    fn test_convert_money() {
        let converter = FixedPegConverter::default();
        let money = converter.convert_money(Money::new(dec!(1), Currency::Eur), Currency::Xof);
        assert_eq!(money, Money::new(dec!(655.957), Currency::Xof));
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        assert_eq!(
            FixedPegConverter::new(dec!(0)),
            Err(CurrencyError::NonPositiveRate(dec!(0)))
        );
        assert!(FixedPegConverter::new(dec!(-1)).is_err());
    }

    #[test]
    fn test_rejects_peg_not_quoting_pivot() {
        let rate = ExchangeRate::new(Currency::Xof, Currency::Eur, dec!(0.0015));
        assert!(matches!(
            FixedPegConverter::from_rate(rate),
            Err(CurrencyError::InvalidPeg { .. })
        ));
    }

    #[test]
    fn test_default_rate() {
        assert_eq!(FixedPegConverter::default().rate().rate, dec!(655.957));
        assert_eq!(FixedPegConverter::new(EUR_TO_XOF), Ok(FixedPegConverter::default()));
    }
}
