//! Monthly summary returned to dashboards and report exports.

use olooh_shared::types::{Currency, Money};
use serde::Serialize;

use crate::period::Period;

use super::breakdown::{Breakdown, BreakdownEntry};
use super::series::DailySeries;
use super::stats::GainLossStats;

/// An amount expressed both in the display and the pivot currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Figure {
    /// Amount in the display currency.
    pub display: Money,
    /// Amount in the pivot currency.
    pub pivot: Money,
}

/// Every figure computed for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    /// Reported month.
    pub period: Period,
    /// Location the sales were narrowed to, if any.
    pub location: Option<String>,
    /// Total sales.
    pub revenue: Figure,
    /// Total expenses.
    pub expenses: Figure,
    /// Revenue minus expenses. Negative on a losing month.
    pub margin: Figure,
    /// Per-day series in the display currency.
    pub daily: DailySeries,
    /// Gain/loss split of the daily margin.
    pub stats: GainLossStats,
    /// Revenue per location, in the pivot currency.
    pub revenue_by_location: Breakdown,
    /// Best selling products by quantity.
    pub top_products: Vec<BreakdownEntry>,
    /// Best selling product by quantity.
    pub top_product: BreakdownEntry,
    /// Most used payment method, by number of sales.
    pub top_payment_method: BreakdownEntry,
    /// Location with the most revenue, in the pivot currency.
    pub best_location: BreakdownEntry,
    /// Location with the least revenue, in the pivot currency.
    pub worst_location: BreakdownEntry,
    /// Number of sales aggregated.
    pub sale_count: usize,
    /// Number of expenses aggregated.
    pub expense_count: usize,
}

impl MonthlySummary {
    /// Currency of the display figures.
    #[must_use]
    pub const fn display_currency(&self) -> Currency {
        self.revenue.display.currency
    }

    /// Returns true if the month ended at a loss.
    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.margin.pivot.is_negative()
    }
}
