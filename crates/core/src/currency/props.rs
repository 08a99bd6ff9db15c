//! Property-based tests for currency conversion.
//!
//! - Round trip: converting A -> B -> A returns the original amount
//! - Identity: converting A -> A returns the amount bit-for-bit

use olooh_shared::types::Currency;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::converter::{CurrencyConverter, FixedPegConverter};

/// Strategy to generate amounts with two decimals (-10,000,000.00 to 10,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate pegs (0.001 to 10,000.000).
fn peg_rate() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|v| Decimal::new(v, 3))
}

fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![Just(Currency::Xof), Just(Currency::Eur)]
}

fn tolerance() -> Decimal {
    Decimal::new(1, 9)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Converting there and back returns the original amount within tolerance.
    #[test]
    fn prop_round_trip(
        x in amount(),
        rate in peg_rate(),
        from in currency(),
        to in currency(),
    ) {
        let converter = FixedPegConverter::new(rate).unwrap();
        let there = converter.convert(x, from, to);
        let back = converter.convert(there, to, from);
        prop_assert!(
            (back - x).abs() <= tolerance(),
            "{} {} -> {} {} -> {}", x, from, there, to, back
        );
    }

    /// Converting into the same currency is exact.
    #[test]
    fn prop_identity(x in amount(), c in currency()) {
        let converter = FixedPegConverter::default();
        prop_assert_eq!(converter.convert(x, c, c), x);
    }

    /// Conversion preserves sign.
    #[test]
    fn prop_sign_preserved(x in amount(), from in currency(), to in currency()) {
        let converter = FixedPegConverter::default();
        let converted = converter.convert(x, from, to);
        prop_assert_eq!(converted.is_zero(), x.is_zero());
        if !x.is_zero() {
            prop_assert_eq!(converted.is_sign_negative(), x.is_sign_negative());
        }
    }
}
