//! Property-based tests for sale creation.
//!
//! - Stock never goes negative
//! - A sale is accepted exactly when the stock covers it
//! - The total always equals unit price times quantity

use chrono::{TimeZone, Utc};
use olooh_shared::types::{Currency, Money, ProductId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::types::{NewSale, Product, Sale};

fn price() -> impl Strategy<Value = Money> {
    (0i64..10_000_000i64, prop_oneof![Just(Currency::Xof), Just(Currency::Eur)])
        .prop_map(|(cents, currency)| Money::new(Decimal::new(cents, 2), currency))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_stock_decrement(stock in 0u32..1_000, quantity in 1u32..1_000, unit_price in price()) {
        let product = Product {
            id: ProductId::new(),
            name: "Item".into(),
            reference: "REF".into(),
            unit_price,
            stock: Some(stock),
        };
        let input = NewSale {
            product_id: product.id,
            quantity,
            location: "Paris".into(),
            payment_method: "Carte bancaire".into(),
            occurred_at: None,
        };
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();

        match Sale::record(&product, input, now) {
            Ok((sale, remaining)) => {
                prop_assert!(quantity <= stock);
                prop_assert_eq!(remaining, Some(stock - quantity));
                prop_assert_eq!(sale.total.amount, unit_price.amount * Decimal::from(quantity));
                prop_assert_eq!(sale.total.currency, unit_price.currency);
            }
            Err(_) => prop_assert!(quantity > stock),
        }
    }
}
