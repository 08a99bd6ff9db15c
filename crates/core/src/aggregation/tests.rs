//! Scenario and property-based tests for the aggregator.
//!
//! - Series sums match the totals within display rounding
//! - Margin identity holds on every day
//! - Gain and loss days never exceed the days of the month
//! - Ranking ties resolve by first appearance, identically on every run

use chrono::{DateTime, Duration, TimeZone, Utc};
use olooh_shared::types::{Currency, ExpenseId, Money, SaleId};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::breakdown::{BreakdownEntry, Direction, PLACEHOLDER_KEY, breakdown_by};
use super::service::Aggregator;
use crate::currency::FixedPegConverter;
use crate::ledger::{Expense, Sale};
use crate::period::Period;

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap()
}

fn sale(name: &str, quantity: u32, unit_price: Money, location: &str, when: DateTime<Utc>) -> Sale {
    Sale {
        id: SaleId::new(),
        product_id: None,
        product_name: name.into(),
        product_reference: format!("REF-{name}"),
        quantity,
        unit_price,
        total: unit_price.checked_times(quantity).unwrap(),
        location: location.into(),
        payment_method: "Espèces".into(),
        occurred_at: when,
    }
}

fn expense(title: &str, amount: Money, when: DateTime<Utc>) -> Expense {
    Expense {
        id: ExpenseId::new(),
        title: title.into(),
        amount,
        location: "Abidjan".into(),
        category: "Autres".into(),
        occurred_at: when,
    }
}

fn xof(amount: Decimal) -> Money {
    Money::new(amount, Currency::Xof)
}

fn eur(amount: Decimal) -> Money {
    Money::new(amount, Currency::Eur)
}

fn pivot_aggregator() -> Aggregator {
    Aggregator::new(FixedPegConverter::default(), Currency::Xof)
}

fn march() -> Period {
    Period::new(2025, 3).unwrap()
}

mod unit_tests {
    use super::*;

    fn march_records() -> (Vec<Sale>, Vec<Expense>) {
        let sales = vec![
            sale("Sac Kente", 2, xof(dec!(5000)), "Abidjan", at(1, 10)),
            sale("Pagne Wax", 1, eur(dec!(20)), "Paris", at(2, 15)),
        ];
        let expenses = vec![expense("Tissu", xof(dec!(3000)), at(1, 9))];
        (sales, expenses)
    }

    #[test]
    fn test_march_scenario_totals() {
        let (sales, expenses) = march_records();
        let aggregator = pivot_aggregator();

        assert_eq!(aggregator.total_revenue(&sales), xof(dec!(23119.14)));
        assert_eq!(aggregator.total_expenses(&expenses), xof(dec!(3000)));
        assert_eq!(
            aggregator.margin(
                aggregator.total_revenue(&sales),
                aggregator.total_expenses(&expenses)
            ),
            xof(dec!(20119.14))
        );
    }

    #[test]
    fn test_march_scenario_series() {
        let (sales, expenses) = march_records();
        let series = pivot_aggregator().daily_series(&sales, &expenses, &march());

        assert_eq!(series.len(), 31);
        assert_eq!(series.days.first(), Some(&1));
        assert_eq!(series.days.last(), Some(&31));
        assert_eq!(series.revenue[0], dec!(10000));
        assert_eq!(series.expense[0], dec!(3000));
        assert_eq!(series.margin[0], dec!(7000));
        assert_eq!(series.revenue[1], dec!(13119.14));
        assert_eq!(series.margin[1], dec!(13119.14));
        for day in 2..31 {
            assert!(series.revenue[day].is_zero());
            assert!(series.expense[day].is_zero());
            assert!(series.margin[day].is_zero());
        }
    }

    #[test]
    fn test_march_scenario_in_euros() {
        let (sales, expenses) = march_records();
        let aggregator = Aggregator::default();

        let summary = aggregator.summarize(&sales, &expenses, &march(), None, 5);
        assert_eq!(summary.revenue.pivot, xof(dec!(23119.14)));
        assert_eq!(summary.display_currency(), Currency::Eur);
        assert_eq!(summary.revenue.display.amount.round_dp(2), dec!(35.24));
        assert_eq!(summary.daily.revenue[1], dec!(20));
    }

    #[test]
    fn test_empty_period() {
        let aggregator = pivot_aggregator();
        let summary = aggregator.summarize(&[], &[], &march(), None, 5);

        assert!(summary.revenue.display.is_zero());
        assert!(summary.expenses.display.is_zero());
        assert!(summary.margin.display.is_zero());
        assert_eq!(summary.stats.gain_days, 0);
        assert_eq!(summary.stats.loss_days, 0);
        assert!(summary.stats.best_day.is_placeholder());
        assert!(summary.stats.worst_day.is_placeholder());
        assert!(summary.revenue_by_location.is_empty());
        assert!(summary.top_products.is_empty());
        assert_eq!(summary.top_product, BreakdownEntry::placeholder());
        assert_eq!(summary.best_location, BreakdownEntry::placeholder());
        assert_eq!(summary.worst_location, BreakdownEntry::placeholder());
        assert_eq!(summary.daily.len(), 31);
    }

    #[test]
    fn test_offsetting_day_is_neither_gain_nor_loss() {
        let sales = vec![sale("Bracelet", 1, xof(dec!(2500)), "Abidjan", at(5, 12))];
        let expenses = vec![expense("Perles", xof(dec!(2500)), at(5, 8))];
        let aggregator = pivot_aggregator();

        let series = aggregator.daily_series(&sales, &expenses, &march());
        assert_eq!(series.margin[4], Decimal::ZERO);

        let stats = aggregator.gain_loss_stats(&series);
        assert_eq!(stats.gain_days, 0);
        assert_eq!(stats.loss_days, 0);
    }

    #[test]
    fn test_negative_margin_is_a_loss() {
        let expenses = vec![expense("Loyer", xof(dec!(100000)), at(3, 8))];
        let summary = pivot_aggregator().summarize(&[], &expenses, &march(), None, 5);

        assert!(summary.is_loss());
        assert_eq!(summary.margin.pivot, xof(dec!(-100000)));
        assert_eq!(summary.stats.loss_days, 1);
        assert_eq!(summary.stats.total_losses, dec!(-100000));
        assert_eq!(summary.stats.worst_day, BreakdownEntry::new("3", dec!(-100000)));
    }

    #[test]
    fn test_record_outside_period_is_dropped() {
        let sales = vec![
            sale("Sac", 1, xof(dec!(1000)), "Abidjan", at(31, 23)),
            sale("Sac", 1, xof(dec!(9999)), "Abidjan", at(31, 23) + Duration::hours(2)),
        ];
        let series = pivot_aggregator().daily_series(&sales, &[], &march());

        assert_eq!(series.len(), 31);
        assert_eq!(series.revenue[30], dec!(1000));
        assert_eq!(series.total_revenue(), dec!(1000));
    }

    #[test]
    fn test_breakdowns_and_rankings() {
        let sales = vec![
            sale("Sac", 3, xof(dec!(1000)), "Abidjan", at(1, 10)),
            sale("Pagne", 3, eur(dec!(10)), "Paris", at(2, 10)),
            sale("Bracelet", 1, eur(dec!(5)), "", at(3, 10)),
            sale("", 2, eur(dec!(5)), "En ligne", at(4, 10)),
        ];
        let aggregator = pivot_aggregator();
        let summary = aggregator.summarize(&sales, &[], &march(), Some("Abidjan"), 2);

        assert_eq!(
            summary.top_products,
            vec![
                BreakdownEntry::new("Sac", dec!(3)),
                BreakdownEntry::new("Pagne", dec!(3)),
            ]
        );
        assert_eq!(summary.top_product, BreakdownEntry::new("Sac", dec!(3)));
        assert_eq!(
            summary.top_payment_method,
            BreakdownEntry::new("Espèces", dec!(4))
        );
        assert_eq!(
            summary.best_location,
            BreakdownEntry::new("Paris", dec!(19678.71))
        );
        assert_eq!(
            summary.worst_location,
            BreakdownEntry::new("Abidjan", dec!(3000))
        );
        assert_eq!(
            summary.revenue_by_location.get(PLACEHOLDER_KEY),
            Some(dec!(3279.785))
        );
        assert_eq!(summary.location.as_deref(), Some("Abidjan"));
        assert_eq!(summary.sale_count, 4);
        assert!(aggregator.quantity_by_product(&sales).get(PLACEHOLDER_KEY).is_some());
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let (sales, expenses) = march_records();
        let aggregator = Aggregator::default();
        let first = aggregator.summarize(&sales, &expenses, &march(), None, 5);
        let second = aggregator.summarize(&sales, &expenses, &march(), None, 5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_out_of_range_amounts_count_as_zero() {
        let huge_eur = eur(Decimal::from_i128_with_scale(10_i128.pow(27), 0));
        let sales = vec![
            sale("Sac Kente", 2, xof(dec!(5000)), "Abidjan", at(1, 10)),
            sale("Lot", 1, huge_eur, "Paris", at(1, 11)),
            sale("Stock", 1, xof(Decimal::MAX), "Abidjan", at(2, 10)),
            sale("Stock", 1, xof(Decimal::MAX), "Abidjan", at(2, 11)),
        ];
        let expenses = vec![expense("Tissu", xof(Decimal::MAX), at(3, 9))];
        let aggregator = pivot_aggregator();

        // The EUR total overflows on conversion, each MAX overflows the sum.
        assert_eq!(aggregator.total_revenue(&sales).amount, dec!(10000));

        let summary = Aggregator::default().summarize(&sales, &expenses, &march(), None, 5);
        assert_eq!(summary.sale_count, 4);
        assert_eq!(summary.daily.len(), 31);

        let series = aggregator.daily_series(&sales, &expenses, &march());
        assert_eq!(series.revenue[0], dec!(10000));
        assert_eq!(series.revenue[1], Decimal::MAX);
        assert_eq!(series.margin[2], -Decimal::MAX);
    }
}

/// Strategy for a money amount in either currency (0.00 to 100,000.00).
fn money() -> impl Strategy<Value = Money> {
    (0i64..10_000_000i64, prop_oneof![Just(Currency::Xof), Just(Currency::Eur)])
        .prop_map(|(cents, currency)| Money::new(Decimal::new(cents, 2), currency))
}

/// Strategy for an instant in March 2025.
fn instant() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..31 * 24 * 60).prop_map(|minutes| at(1, 0) + Duration::minutes(minutes))
}

fn sales_strategy() -> impl Strategy<Value = Vec<Sale>> {
    prop::collection::vec(
        (1u32..5, money(), instant(), prop_oneof![Just("Abidjan"), Just("Paris"), Just("")]),
        0..40,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .map(|(qty, price, when, location)| sale("Item", qty, price, location, when))
            .collect()
    })
}

fn expenses_strategy() -> impl Strategy<Value = Vec<Expense>> {
    prop::collection::vec((money(), instant()), 0..40).prop_map(|items| {
        items
            .into_iter()
            .map(|(amount, when)| expense("Charge", amount, when))
            .collect()
    })
}

fn display_currency() -> impl Strategy<Value = Currency> {
    prop_oneof![Just(Currency::Xof), Just(Currency::Eur)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Daily sums match the period totals at display precision.
    #[test]
    fn prop_series_sums_match_totals(
        sales in sales_strategy(),
        expenses in expenses_strategy(),
        currency in display_currency(),
    ) {
        let aggregator = Aggregator::new(FixedPegConverter::default(), currency);
        let series = aggregator.daily_series(&sales, &expenses, &march());
        let tolerance = dec!(0.01);

        let revenue = aggregator.total_revenue(&sales).amount;
        let spent = aggregator.total_expenses(&expenses).amount;
        prop_assert!((series.total_revenue() - revenue).abs() < tolerance);
        prop_assert!((series.total_expense() - spent).abs() < tolerance);
    }

    /// `margin[i] == revenue[i] - expense[i]` on every day.
    #[test]
    fn prop_margin_identity(
        sales in sales_strategy(),
        expenses in expenses_strategy(),
        currency in display_currency(),
    ) {
        let aggregator = Aggregator::new(FixedPegConverter::default(), currency);
        let series = aggregator.daily_series(&sales, &expenses, &march());

        prop_assert_eq!(series.revenue.len(), series.expense.len());
        prop_assert_eq!(series.margin.len(), series.days.len());
        for i in 0..series.len() {
            prop_assert_eq!(series.margin[i], series.revenue[i] - series.expense[i]);
        }
    }

    /// Gain and loss days never exceed the length of the month.
    #[test]
    fn prop_gain_loss_days_bounded(
        sales in sales_strategy(),
        expenses in expenses_strategy(),
    ) {
        let aggregator = Aggregator::default();
        let series = aggregator.daily_series(&sales, &expenses, &march());
        let stats = aggregator.gain_loss_stats(&series);

        prop_assert!(stats.gain_days + stats.loss_days <= march().days_in_month());
        prop_assert!(stats.total_gains >= Decimal::ZERO);
        prop_assert!(stats.total_losses <= Decimal::ZERO);
    }

    /// Equal values rank in first-seen order on every run.
    #[test]
    fn prop_top_n_tie_determinism(
        values in prop::collection::vec(0u8..4, 0..30),
    ) {
        let records: Vec<(String, Decimal)> = values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("k{i}"), Decimal::from(*v)))
            .collect();
        let breakdown = breakdown_by(&records, |r| r.0.clone(), |r| r.1);

        let first = breakdown.top_n(records.len());
        let second = breakdown.top_n(records.len());
        prop_assert_eq!(&first, &second);

        for pair in first.windows(2) {
            prop_assert!(pair[0].value >= pair[1].value);
            if pair[0].value == pair[1].value {
                let a = breakdown.iter().position(|(k, _)| k == pair[0].key);
                let b = breakdown.iter().position(|(k, _)| k == pair[1].key);
                prop_assert!(a < b);
            }
        }

        if let Some(head) = first.first() {
            prop_assert_eq!(&breakdown.extremum(Direction::Max), head);
        }
    }
}
