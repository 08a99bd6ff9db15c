//! Report formatting service.

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;

use crate::aggregation::{Aggregator, BreakdownEntry, MonthlySummary, PLACEHOLDER_KEY};
use crate::currency::CurrencyConverter;
use crate::ledger::{Expense, Sale};

use super::types::{AccountingRow, ExportTable, RowType, SummaryKind};

/// Description used for a sale whose product name is unknown.
const UNNAMED_SALE: &str = "Sale";

/// Projects aggregated figures and records into export tables.
///
/// Formatting only: every figure comes from the aggregator, and amounts are
/// rounded here and nowhere else.
pub struct ReportFormatter<'a, C> {
    aggregator: &'a Aggregator<C>,
    decimal_places: u32,
}

impl<'a, C: CurrencyConverter> ReportFormatter<'a, C> {
    /// Creates a formatter rendering amounts with `decimal_places` digits.
    pub const fn new(aggregator: &'a Aggregator<C>, decimal_places: u32) -> Self {
        Self {
            aggregator,
            decimal_places,
        }
    }

    /// Builds the accounting rows: summaries, then sales, then expenses.
    ///
    /// Detail rows keep input order.
    pub fn to_accounting_rows(
        &self,
        sales: &[Sale],
        expenses: &[Expense],
        summary: &MonthlySummary,
    ) -> Vec<AccountingRow> {
        let mut rows = self.summary_rows(summary);
        rows.reserve(sales.len() + expenses.len());
        rows.extend(sales.iter().map(|s| self.sale_row(s)));
        rows.extend(expenses.iter().map(|e| self.expense_row(e)));
        rows
    }

    /// Accounting rows rendered as a table.
    pub fn accounting_table(
        &self,
        sales: &[Sale],
        expenses: &[Expense],
        summary: &MonthlySummary,
    ) -> ExportTable {
        let pivot = self.pivot_code();
        let display = self.display_code();
        let mut table = ExportTable::new([
            "date".to_string(),
            "type".to_string(),
            "description".to_string(),
            format!("amount_{display}"),
            format!("amount_{pivot}"),
            "currency".to_string(),
            "location".to_string(),
            "payment_method".to_string(),
            "product_ref".to_string(),
        ]);
        for row in self.to_accounting_rows(sales, expenses, summary) {
            table.push(row.to_record(self.decimal_places));
        }
        table
    }

    /// One line per sale with quantities, prices and converted totals.
    pub fn sales_register(&self, sales: &[Sale]) -> ExportTable {
        let pivot = self.pivot_code();
        let display = self.display_code();
        let mut table = ExportTable::new([
            "date".to_string(),
            "product".to_string(),
            "reference".to_string(),
            "location".to_string(),
            "payment_method".to_string(),
            "quantity".to_string(),
            "unit_price".to_string(),
            "total".to_string(),
            "currency".to_string(),
            format!("total_{pivot}"),
            format!("total_{display}"),
        ]);
        for sale in sales {
            let pivot_total = self.to_pivot(sale.total.amount, sale);
            table.push([
                timestamp(sale.occurred_at),
                sale.product_name.clone(),
                sale.product_reference.clone(),
                sale.location.clone(),
                sale.payment_method.clone(),
                sale.quantity.to_string(),
                self.fixed(sale.unit_price.amount),
                self.fixed(sale.total.amount),
                sale.currency().code().to_string(),
                self.fixed(pivot_total),
                self.fixed(self.aggregator.to_display(pivot_total)),
            ]);
        }
        table
    }

    /// One line per expense with its pivot amount.
    pub fn expense_register(&self, expenses: &[Expense]) -> ExportTable {
        let pivot = self.pivot_code();
        let mut table = ExportTable::new([
            "date".to_string(),
            "title".to_string(),
            "location".to_string(),
            "category".to_string(),
            "amount".to_string(),
            "currency".to_string(),
            format!("amount_{pivot}"),
        ]);
        let converter = self.aggregator.converter();
        for expense in expenses {
            table.push([
                timestamp(expense.occurred_at),
                expense.title.clone(),
                expense.location.clone(),
                expense.category.clone(),
                self.fixed(expense.amount.amount),
                expense.amount.currency.code().to_string(),
                self.fixed(converter.to_pivot(expense.amount.amount, expense.amount.currency)),
            ]);
        }
        table
    }

    fn summary_rows(&self, summary: &MonthlySummary) -> Vec<AccountingRow> {
        let display_currency = summary.display_currency();
        let converter = self.aggregator.converter();
        let date = summary.period.first_day().format("%Y-%m-%d").to_string();
        let stats = &summary.stats;

        let row = |kind: SummaryKind, description: String| AccountingRow {
            date: date.clone(),
            row_type: RowType::Summary(kind),
            description,
            amount_display: None,
            amount_pivot: None,
            currency: None,
            location: String::new(),
            payment_method: String::new(),
            product_reference: String::new(),
        };
        // Amounts already in the pivot currency.
        let with_pivot = |mut r: AccountingRow, pivot: Decimal| {
            r.amount_display = Some(self.aggregator.to_display(pivot));
            r.amount_pivot = Some(pivot);
            r.currency = Some(display_currency);
            r
        };
        // Amounts in the display currency.
        let with_display = |mut r: AccountingRow, display: Decimal| {
            r.amount_display = Some(display);
            r.amount_pivot = Some(converter.to_pivot(display, display_currency));
            r.currency = Some(display_currency);
            r
        };

        let mut rows = vec![
            with_pivot(
                row(SummaryKind::Revenue, "Revenue".into()),
                summary.revenue.pivot.amount,
            ),
            with_pivot(
                row(SummaryKind::Expenses, "Expenses".into()),
                summary.expenses.pivot.amount,
            ),
            with_pivot(
                row(SummaryKind::Margin, "Margin".into()),
                summary.margin.pivot.amount,
            ),
            with_display(
                row(
                    SummaryKind::Gains,
                    format!("Gains ({} days)", stats.gain_days),
                ),
                stats.total_gains,
            ),
            with_display(
                row(
                    SummaryKind::Losses,
                    format!("Losses ({} days)", stats.loss_days),
                ),
                stats.total_losses.abs(),
            ),
            row(
                SummaryKind::TopProduct,
                format!(
                    "Top product: {} (qty: {})",
                    summary.top_product.key,
                    count(&summary.top_product)
                ),
            ),
            row(
                SummaryKind::TopPayment,
                format!(
                    "Top payment method: {} (count: {})",
                    summary.top_payment_method.key,
                    count(&summary.top_payment_method)
                ),
            ),
        ];

        for (kind, label, entry) in [
            (SummaryKind::BestLocation, "Best location", &summary.best_location),
            (SummaryKind::WorstLocation, "Worst location", &summary.worst_location),
        ] {
            let mut r = with_pivot(row(kind, format!("{label}: {}", entry.key)), entry.value);
            // Blank when there is no location to name.
            if entry.key != PLACEHOLDER_KEY {
                r.location.clone_from(&entry.key);
            }
            rows.push(r);
        }

        for (i, entry) in summary.top_products.iter().enumerate() {
            rows.push(row(
                SummaryKind::TopProductRank(i + 1),
                format!("{} (qty: {})", entry.key, count(entry)),
            ));
        }

        for (location, pivot) in summary.revenue_by_location.iter() {
            let mut r = with_pivot(
                row(SummaryKind::RevenueByLocation, format!("Revenue {location}")),
                pivot,
            );
            if location != PLACEHOLDER_KEY {
                r.location = location.to_string();
            }
            rows.push(r);
        }

        rows
    }

    fn sale_row(&self, sale: &Sale) -> AccountingRow {
        let pivot = self.to_pivot(sale.total.amount, sale);
        let description = if sale.product_name.trim().is_empty() {
            UNNAMED_SALE.to_string()
        } else {
            sale.product_name.clone()
        };
        AccountingRow {
            date: timestamp(sale.occurred_at),
            row_type: RowType::Sale,
            description,
            amount_display: Some(self.aggregator.to_display(pivot)),
            amount_pivot: Some(pivot),
            currency: Some(sale.currency()),
            location: sale.location.clone(),
            payment_method: sale.payment_method.clone(),
            product_reference: sale.product_reference.clone(),
        }
    }

    fn expense_row(&self, expense: &Expense) -> AccountingRow {
        let pivot = self
            .aggregator
            .converter()
            .to_pivot(expense.amount.amount, expense.amount.currency);
        AccountingRow {
            date: timestamp(expense.occurred_at),
            row_type: RowType::Expense,
            description: expense.title.clone(),
            amount_display: Some(self.aggregator.to_display(pivot)),
            amount_pivot: Some(pivot),
            currency: Some(expense.amount.currency),
            location: expense.location.clone(),
            payment_method: String::new(),
            product_reference: String::new(),
        }
    }

    fn to_pivot(&self, amount: Decimal, sale: &Sale) -> Decimal {
        self.aggregator.converter().to_pivot(amount, sale.currency())
    }

    fn fixed(&self, value: Decimal) -> String {
        olooh_shared::types::to_fixed(value, self.decimal_places)
    }

    fn pivot_code(&self) -> String {
        self.aggregator.converter().pivot().code().to_lowercase()
    }

    fn display_code(&self) -> String {
        self.aggregator.display_currency().code().to_lowercase()
    }
}

/// RFC 3339 with milliseconds and a `Z` suffix.
fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Integral rendering of a count or quantity value.
fn count(entry: &BreakdownEntry) -> String {
    entry.value.normalize().to_string()
}
