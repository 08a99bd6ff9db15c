//! Dashboard service.

use std::sync::Arc;

use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, info, warn};

use crate::aggregation::{Aggregator, MonthlySummary};
use crate::currency::{CurrencyConverter, FixedPegConverter};
use crate::ledger::{Expense, Sale};
use crate::period::Period;
use crate::store::{RecordStore, StoreError, StoreEvent};

/// Records of one period together with their summary.
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// Aggregated figures.
    pub summary: MonthlySummary,
    /// Sales the summary was computed from, in store order.
    pub sales: Vec<Sale>,
    /// Expenses the summary was computed from, in store order.
    pub expenses: Vec<Expense>,
}

/// Re-fetches records and recomputes the monthly summary.
///
/// Holds no cached figures: every call queries the store again.
pub struct DashboardService<S, C = FixedPegConverter> {
    store: Arc<S>,
    aggregator: Aggregator<C>,
    top_n: usize,
}

impl<S: RecordStore, C: CurrencyConverter> DashboardService<S, C> {
    /// Creates a dashboard service listing `top_n` products.
    #[must_use]
    pub fn new(store: Arc<S>, aggregator: Aggregator<C>, top_n: usize) -> Self {
        Self {
            store,
            aggregator,
            top_n,
        }
    }

    /// The aggregator used for every summary.
    pub const fn aggregator(&self) -> &Aggregator<C> {
        &self.aggregator
    }

    /// Queries `period` and computes its summary.
    ///
    /// # Errors
    ///
    /// Returns an error if either query fails.
    pub async fn snapshot(
        &self,
        period: &Period,
        location: Option<&str>,
    ) -> Result<MonthlyReport, StoreError> {
        let (start, end) = period.month_range();
        let (sales, expenses) = tokio::try_join!(
            self.store.query_sales(start, end, location),
            self.store.query_expenses(start, end)
        )?;

        let summary = self
            .aggregator
            .summarize(&sales, &expenses, period, location, self.top_n);
        info!(
            period = %period,
            sales = sales.len(),
            expenses = expenses.len(),
            margin = %summary.margin.display,
            "Dashboard computed"
        );

        Ok(MonthlyReport {
            summary,
            sales,
            expenses,
        })
    }

    /// Waits for the next change to sales or expenses and recomputes
    /// `period`.
    ///
    /// Catalog-only events are skipped. Missed events still trigger a single
    /// recompute. Returns `None` once the store has shut its feed down.
    pub async fn refresh_on_change(
        &self,
        events: &mut broadcast::Receiver<StoreEvent>,
        period: &Period,
        location: Option<&str>,
    ) -> Option<Result<MonthlyReport, StoreError>> {
        loop {
            match events.recv().await {
                Ok(event) if event.affects_records() => {
                    debug!(?event, "Store changed, recomputing dashboard");
                    break;
                }
                Ok(event) => debug!(?event, "Catalog change ignored"),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Missed store events, recomputing dashboard");
                    break;
                }
                Err(RecvError::Closed) => return None,
            }
        }
        Some(self.snapshot(period, location).await)
    }
}
