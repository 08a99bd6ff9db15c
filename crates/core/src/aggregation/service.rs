//! Aggregator turning period records into reporting figures.

use olooh_shared::config::LedgerConfig;
use olooh_shared::types::{Currency, Money};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::currency::arithmetic;
use crate::currency::{CurrencyConverter, CurrencyError, FixedPegConverter};
use crate::ledger::{Expense, Sale};
use crate::period::Period;

use super::breakdown::{Breakdown, Direction, breakdown_by};
use super::series::DailySeries;
use super::stats::GainLossStats;
use super::summary::{Figure, MonthlySummary};

/// Reduces sales and expenses of one period into totals, series and
/// breakdowns.
///
/// Sums are always taken in the pivot currency, in input order, and only then
/// re-expressed in the display currency.
#[derive(Debug, Clone)]
pub struct Aggregator<C = FixedPegConverter> {
    converter: C,
    display_currency: Currency,
}

impl Aggregator<FixedPegConverter> {
    /// Builds an aggregator from ledger configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the peg rate is not positive or the display
    /// currency is unknown.
    pub fn from_config(config: &LedgerConfig) -> Result<Self, CurrencyError> {
        let converter = FixedPegConverter::new(config.peg_rate)?;
        let display_currency = config
            .display_currency()
            .map_err(|_| CurrencyError::Unsupported(config.display_currency.clone()))?;
        Ok(Self::new(converter, display_currency))
    }
}

impl<C: CurrencyConverter> Aggregator<C> {
    /// Creates an aggregator reporting in `display_currency`.
    pub const fn new(converter: C, display_currency: Currency) -> Self {
        Self {
            converter,
            display_currency,
        }
    }

    /// The converter in use.
    pub const fn converter(&self) -> &C {
        &self.converter
    }

    /// Currency of the reported figures.
    pub const fn display_currency(&self) -> Currency {
        self.display_currency
    }

    /// Re-expresses a pivot amount in the display currency.
    pub fn to_display(&self, pivot_amount: Decimal) -> Decimal {
        self.converter.from_pivot(pivot_amount, self.display_currency)
    }

    /// Sum of sale totals in the display currency.
    pub fn total_revenue(&self, sales: &[Sale]) -> Money {
        self.display_money(self.revenue_pivot(sales))
    }

    /// Sum of expense amounts in the display currency.
    pub fn total_expenses(&self, expenses: &[Expense]) -> Money {
        self.display_money(self.expenses_pivot(expenses))
    }

    /// `revenue - expenses` in the display currency. May be negative.
    pub fn margin(&self, revenue: Money, expenses: Money) -> Money {
        let revenue = self.converter.convert_money(revenue, self.display_currency);
        let expenses = self.converter.convert_money(expenses, self.display_currency);
        Money::new(
            arithmetic::sub(revenue.amount, expenses.amount),
            self.display_currency,
        )
    }

    /// Per-day revenue, expense and margin for `period`.
    ///
    /// Records outside the period are dropped with a warning; they never
    /// shift or extend the series.
    pub fn daily_series(
        &self,
        sales: &[Sale],
        expenses: &[Expense],
        period: &Period,
    ) -> DailySeries {
        let days = period.days_in_month() as usize;
        let mut revenue = vec![Decimal::ZERO; days];
        let mut expense = vec![Decimal::ZERO; days];

        for sale in sales {
            match period.bucket_index(sale.occurred_at) {
                Some(i) if i < days => {
                    revenue[i] = arithmetic::add(revenue[i], self.pivot(sale.total));
                }
                _ => warn!(
                    sale_id = %sale.id,
                    occurred_at = %sale.occurred_at,
                    period = %period,
                    "Sale outside period dropped from daily series"
                ),
            }
        }
        for item in expenses {
            match period.bucket_index(item.occurred_at) {
                Some(i) if i < days => {
                    expense[i] = arithmetic::add(expense[i], self.pivot(item.amount));
                }
                _ => warn!(
                    expense_id = %item.id,
                    occurred_at = %item.occurred_at,
                    period = %period,
                    "Expense outside period dropped from daily series"
                ),
            }
        }

        let revenue = revenue.into_iter().map(|v| self.to_display(v)).collect();
        let expense = expense.into_iter().map(|v| self.to_display(v)).collect();
        DailySeries::from_parts(self.display_currency, revenue, expense)
    }

    /// Gain/loss statistics of a daily series.
    pub fn gain_loss_stats(&self, series: &DailySeries) -> GainLossStats {
        GainLossStats::from_series(series)
    }

    /// Revenue per location, in the pivot currency.
    pub fn revenue_by_location(&self, sales: &[Sale]) -> Breakdown {
        breakdown_by(sales, |s| s.location.clone(), |s| self.pivot(s.total))
    }

    /// Units sold per product name.
    pub fn quantity_by_product(&self, sales: &[Sale]) -> Breakdown {
        breakdown_by(sales, |s| s.product_name.clone(), |s| Decimal::from(s.quantity))
    }

    /// Number of sales per payment method.
    pub fn payment_method_usage(&self, sales: &[Sale]) -> Breakdown {
        breakdown_by(sales, |s| s.payment_method.clone(), |_| Decimal::ONE)
    }

    /// Computes every figure of the period.
    ///
    /// `sales` and `expenses` are expected to be already scoped to `period`
    /// (and sales to `location`, when given).
    pub fn summarize(
        &self,
        sales: &[Sale],
        expenses: &[Expense],
        period: &Period,
        location: Option<&str>,
        top_n: usize,
    ) -> MonthlySummary {
        debug!(
            period = %period,
            location = location.unwrap_or("*"),
            sales = sales.len(),
            expenses = expenses.len(),
            "Aggregating period"
        );

        let revenue_pivot = self.revenue_pivot(sales);
        let expenses_pivot = self.expenses_pivot(expenses);
        let daily = self.daily_series(sales, expenses, period);
        let stats = self.gain_loss_stats(&daily);

        let by_location = self.revenue_by_location(sales);
        let by_product = self.quantity_by_product(sales);
        let by_payment = self.payment_method_usage(sales);

        MonthlySummary {
            period: *period,
            location: location.map(str::to_string),
            revenue: self.figure(revenue_pivot),
            expenses: self.figure(expenses_pivot),
            margin: self.figure(arithmetic::sub(revenue_pivot, expenses_pivot)),
            daily,
            stats,
            top_products: by_product.top_n(top_n),
            top_product: by_product.extremum(Direction::Max),
            top_payment_method: by_payment.extremum(Direction::Max),
            best_location: by_location.extremum(Direction::Max),
            worst_location: by_location.extremum(Direction::Min),
            revenue_by_location: by_location,
            sale_count: sales.len(),
            expense_count: expenses.len(),
        }
    }

    fn pivot(&self, money: Money) -> Decimal {
        self.converter.to_pivot(money.amount, money.currency)
    }

    fn revenue_pivot(&self, sales: &[Sale]) -> Decimal {
        arithmetic::sum(sales.iter().map(|s| self.pivot(s.total)))
    }

    fn expenses_pivot(&self, expenses: &[Expense]) -> Decimal {
        arithmetic::sum(expenses.iter().map(|e| self.pivot(e.amount)))
    }

    fn display_money(&self, pivot_amount: Decimal) -> Money {
        Money::new(self.to_display(pivot_amount), self.display_currency)
    }

    fn figure(&self, pivot_amount: Decimal) -> Figure {
        Figure {
            display: self.display_money(pivot_amount),
            pivot: Money::new(pivot_amount, self.converter.pivot()),
        }
    }
}

impl Default for Aggregator<FixedPegConverter> {
    fn default() -> Self {
        Self::new(FixedPegConverter::default(), Currency::Eur)
    }
}
