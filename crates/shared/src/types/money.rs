//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::lenient;

/// Represents a monetary amount with currency.
///
/// An amount is meaningless without its currency tag: arithmetic between two
/// `Money` values must go through a converter first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major units (e.g. 5000 CFA, 20.50 EUR).
    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the system.
///
/// Adding a variant forces every `match` on currency to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// West African CFA franc (pivot currency).
    Xof,
    /// Euro
    Eur,
}

impl Currency {
    /// All supported currencies.
    pub const ALL: [Self; 2] = [Self::Xof, Self::Eur];

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Xof => "XOF",
            Self::Eur => "EUR",
        }
    }

    /// Symbol used when rendering amounts for people.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Xof => "CFA",
            Self::Eur => "€",
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Multiplies the amount by a quantity, keeping the currency.
    ///
    /// Returns `None` if the product does not fit in a `Decimal`.
    #[must_use]
    pub fn checked_times(&self, quantity: u32) -> Option<Self> {
        self.amount
            .checked_mul(Decimal::from(quantity))
            .map(|amount| Self::new(amount, self.currency))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", to_fixed(self.amount, 2), self.currency.symbol())
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "XOF" | "CFA" | "FCFA" => Ok(Self::Xof),
            "EUR" => Ok(Self::Eur),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

/// Renders a value with exactly `decimal_places` digits after the point.
///
/// Rounds half away from zero and never renders a negative zero.
#[must_use]
pub fn to_fixed(value: Decimal, decimal_places: u32) -> String {
    let mut rounded =
        value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(decimal_places);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_money_new() {
        let amount = dec!(100.00);
        let money = Money::new(amount, Currency::Eur);
        assert_eq!(money.amount, amount);
        assert_eq!(money.currency, Currency::Eur);
    }

    #[test]
    fn test_money_is_negative() {
        assert!(!Money::new(dec!(10), Currency::Xof).is_negative());
        assert!(Money::new(dec!(-10), Currency::Xof).is_negative());
        assert!(!Money::new(dec!(0), Currency::Xof).is_negative());
    }

    #[test]
    fn test_money_checked_times() {
        let unit = Money::new(dec!(5000), Currency::Xof);
        assert_eq!(
            unit.checked_times(2),
            Some(Money::new(dec!(10000), Currency::Xof))
        );
        assert_eq!(Money::new(Decimal::MAX, Currency::Eur).checked_times(2), None);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(dec!(10000), Currency::Xof).to_string(), "10000.00 CFA");
        assert_eq!(Money::new(dec!(19.999), Currency::Eur).to_string(), "20.00 €");
    }

    #[test]
    fn test_currency_aliases() {
        assert_eq!(Currency::from_str("cfa").unwrap(), Currency::Xof);
        assert_eq!(Currency::from_str(" FCFA ").unwrap(), Currency::Xof);
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(dec!(23119.14), 2), "23119.14");
        assert_eq!(to_fixed(dec!(1), 2), "1.00");
        assert_eq!(to_fixed(dec!(0.005), 2), "0.01");
        assert_eq!(to_fixed(dec!(-0.005), 2), "-0.01");
        assert_eq!(to_fixed(dec!(-0.001), 2), "0.00");
    }
}
