//! Report row types.

use olooh_shared::types::{Currency, to_fixed};
use rust_decimal::Decimal;
use serde::Serialize;

/// Number of columns of an accounting row.
pub const ACCOUNTING_COLUMNS: usize = 9;

/// Kind of an accounting row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowType {
    /// One sale.
    Sale,
    /// One expense.
    Expense,
    /// A period-level figure.
    Summary(SummaryKind),
}

/// Period-level figures emitted ahead of the detail rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SummaryKind {
    /// Total revenue.
    Revenue,
    /// Total expenses.
    Expenses,
    /// Revenue minus expenses.
    Margin,
    /// Sum of positive daily margins.
    Gains,
    /// Sum of negative daily margins, as an absolute value.
    Losses,
    /// Best selling product by quantity.
    TopProduct,
    /// Most used payment method.
    TopPayment,
    /// Location with the most revenue.
    BestLocation,
    /// Location with the least revenue.
    WorstLocation,
    /// Rank (1-based) in the top products list.
    TopProductRank(usize),
    /// Revenue of one location.
    RevenueByLocation,
}

impl std::fmt::Display for RowType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sale => f.write_str("SALE"),
            Self::Expense => f.write_str("EXPENSE"),
            Self::Summary(kind) => match kind {
                SummaryKind::Revenue => f.write_str("SUMMARY_REVENUE"),
                SummaryKind::Expenses => f.write_str("SUMMARY_EXPENSES"),
                SummaryKind::Margin => f.write_str("SUMMARY_MARGIN"),
                SummaryKind::Gains => f.write_str("SUMMARY_GAINS"),
                SummaryKind::Losses => f.write_str("SUMMARY_LOSSES"),
                SummaryKind::TopProduct => f.write_str("SUMMARY_TOP_PRODUCT"),
                SummaryKind::TopPayment => f.write_str("SUMMARY_TOP_PAYMENT"),
                SummaryKind::BestLocation => f.write_str("SUMMARY_BEST_LOCATION"),
                SummaryKind::WorstLocation => f.write_str("SUMMARY_WORST_LOCATION"),
                SummaryKind::TopProductRank(rank) => write!(f, "SUMMARY_TOP_PRODUCT_{rank}"),
                SummaryKind::RevenueByLocation => f.write_str("SUMMARY_REVENUE_BY_LOCATION"),
            },
        }
    }
}

impl RowType {
    /// Returns true for summary rows.
    #[must_use]
    pub const fn is_summary(&self) -> bool {
        matches!(self, Self::Summary(_))
    }
}

/// One row of the accounting export.
///
/// Every row has the same nine columns; columns a row does not use stay
/// blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountingRow {
    /// RFC 3339 timestamp for detail rows, first day of the period for
    /// summary rows.
    pub date: String,
    /// Row kind.
    pub row_type: RowType,
    /// Human readable description.
    pub description: String,
    /// Amount in the display currency.
    pub amount_display: Option<Decimal>,
    /// Amount in the pivot currency.
    pub amount_pivot: Option<Decimal>,
    /// Currency the underlying record was entered in.
    pub currency: Option<Currency>,
    /// Location tag.
    pub location: String,
    /// Payment method tag.
    pub payment_method: String,
    /// Product reference code.
    pub product_reference: String,
}

impl AccountingRow {
    /// Renders the row, amounts fixed to `decimal_places`.
    #[must_use]
    pub fn to_record(&self, decimal_places: u32) -> [String; ACCOUNTING_COLUMNS] {
        let amount = |value: Option<Decimal>| {
            value.map_or_else(String::new, |v| to_fixed(v, decimal_places))
        };
        [
            self.date.clone(),
            self.row_type.to_string(),
            self.description.clone(),
            amount(self.amount_display),
            amount(self.amount_pivot),
            self.currency.map_or_else(String::new, |c| c.code().to_string()),
            self.location.clone(),
            self.payment_method.clone(),
            self.product_reference.clone(),
        ]
    }
}

/// A rendered table ready for encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportTable {
    /// Column names.
    pub header: Vec<String>,
    /// Rows, each as wide as the header.
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    /// Creates an empty table with the given columns.
    #[must_use]
    pub fn new<S: Into<String>>(header: impl IntoIterator<Item = S>) -> Self {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn push<S: Into<String>>(&mut self, row: impl IntoIterator<Item = S>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns true if every row is as wide as the header.
    #[must_use]
    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().all(|r| r.len() == self.header.len())
    }
}
