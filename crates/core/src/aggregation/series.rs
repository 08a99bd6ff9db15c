//! Per-day revenue, expense and margin series.

use olooh_shared::types::Currency;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::currency::arithmetic;

/// Day-indexed series for one period.
///
/// All vectors have one slot per calendar day and
/// `margin[i] == revenue[i] - expense[i]` holds for every slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySeries {
    /// Currency of every amount in the series.
    pub currency: Currency,
    /// Day numbers, 1-based.
    pub days: Vec<u32>,
    /// Revenue per day.
    pub revenue: Vec<Decimal>,
    /// Expenses per day.
    pub expense: Vec<Decimal>,
    /// Revenue minus expenses per day.
    pub margin: Vec<Decimal>,
}

impl DailySeries {
    /// Builds a series from per-day revenue and expense, deriving the margin.
    ///
    /// Both inputs must have the same length.
    #[must_use]
    pub fn from_parts(currency: Currency, revenue: Vec<Decimal>, expense: Vec<Decimal>) -> Self {
        debug_assert_eq!(revenue.len(), expense.len());
        let margin = revenue
            .iter()
            .zip(&expense)
            .map(|(r, e)| arithmetic::sub(*r, *e))
            .collect();
        let days = (1..).take(revenue.len()).collect();
        Self {
            currency,
            days,
            revenue,
            expense,
            margin,
        }
    }

    /// Number of days in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns true if the series has no days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Sum of daily revenue.
    #[must_use]
    pub fn total_revenue(&self) -> Decimal {
        arithmetic::sum(self.revenue.iter().copied())
    }

    /// Sum of daily expenses.
    #[must_use]
    pub fn total_expense(&self) -> Decimal {
        arithmetic::sum(self.expense.iter().copied())
    }
}
