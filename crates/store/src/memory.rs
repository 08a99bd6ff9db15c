//! In-memory record and catalog store.

use std::path::Path;

use chrono::{DateTime, Utc};
use olooh_core::ledger::{
    Expense, LedgerError, NewExpense, NewProduct, NewSale, Product, ProductUpdate, Sale,
    is_known_category, is_known_location, is_known_payment_method,
};
use olooh_core::store::{CatalogStore, ChangeFeed, RecordStore, StoreError, StoreEvent};
use olooh_shared::types::ProductId;
use tokio::sync::{RwLock, broadcast};
use tracing::{debug, info, warn};

use crate::snapshot::Snapshot;

/// Number of events a slow subscriber may fall behind before it lags.
const EVENT_CAPACITY: usize = 64;

/// Store keeping every record in memory behind a single lock.
///
/// Every successful write publishes a [`StoreEvent`] once the lock is
/// released.
pub struct InMemoryStore {
    state: RwLock<Snapshot>,
    events: broadcast::Sender<StoreEvent>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::from_snapshot(Snapshot::default())
    }

    /// Creates a store holding `snapshot`.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            state: RwLock::new(snapshot),
            events,
        }
    }

    /// Loads a store from a JSON snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed.
    pub fn from_snapshot_file(path: &Path) -> Result<Self, StoreError> {
        Snapshot::load(path).map(Self::from_snapshot)
    }

    /// Copy of everything the store holds.
    pub async fn snapshot(&self) -> Snapshot {
        self.state.read().await.clone()
    }

    /// Writes the current contents to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn save(&self, path: &Path) -> Result<(), StoreError> {
        self.snapshot().await.save(path)
    }

    fn publish(&self, event: StoreEvent) {
        if self.events.send(event).is_err() {
            debug!("No change subscribers");
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn in_range(at: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    at >= start && at < end
}

fn same_location(record: &str, filter: &str) -> bool {
    record.trim().eq_ignore_ascii_case(filter.trim())
}

fn report_unknown_tag(field: &str, value: &str, known: fn(&str) -> bool) {
    if !value.trim().is_empty() && !known(value) {
        warn!(field, value, "Unknown tag accepted");
    }
}

impl RecordStore for InMemoryStore {
    async fn query_sales(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        location: Option<&str>,
    ) -> Result<Vec<Sale>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .sales
            .iter()
            .filter(|s| in_range(s.occurred_at, start, end))
            .filter(|s| location.is_none_or(|l| same_location(&s.location, l)))
            .cloned()
            .collect())
    }

    async fn query_expenses(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Expense>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .expenses
            .iter()
            .filter(|e| in_range(e.occurred_at, start, end))
            .cloned()
            .collect())
    }

    async fn record_sale(&self, input: NewSale) -> Result<Sale, StoreError> {
        let product_id = input.product_id;
        report_unknown_tag("location", &input.location, is_known_location);
        report_unknown_tag(
            "payment_method",
            &input.payment_method,
            is_known_payment_method,
        );
        let (sale, stock_changed) = {
            let mut state = self.state.write().await;
            let product = state
                .products
                .iter_mut()
                .find(|p| p.id == product_id)
                .ok_or(LedgerError::UnknownProduct(product_id))?;

            let (sale, stock) = Sale::record(product, input, Utc::now())?;
            let stock_changed = stock != product.stock;
            product.stock = stock;
            state.sales.push(sale.clone());
            (sale, stock_changed)
        };

        info!(
            sale_id = %sale.id,
            product_id = %product_id,
            quantity = sale.quantity,
            total = %sale.total,
            "Sale recorded"
        );
        self.publish(StoreEvent::SaleRecorded { sale_id: sale.id });
        if stock_changed {
            self.publish(StoreEvent::CatalogChanged { product_id });
        }
        Ok(sale)
    }

    async fn record_expense(&self, input: NewExpense) -> Result<Expense, StoreError> {
        report_unknown_tag("location", &input.location, is_known_location);
        report_unknown_tag("category", &input.category, is_known_category);
        let expense = Expense::record(input, Utc::now())?;
        self.state.write().await.expenses.push(expense.clone());

        info!(
            expense_id = %expense.id,
            amount = %expense.amount,
            "Expense recorded"
        );
        self.publish(StoreEvent::ExpenseRecorded {
            expense_id: expense.id,
        });
        Ok(expense)
    }

    async fn purge_sales(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<usize, StoreError> {
        let count = {
            let mut state = self.state.write().await;
            let before = state.sales.len();
            state.sales.retain(|s| !in_range(s.occurred_at, start, end));
            before - state.sales.len()
        };

        info!(%start, %end, count, "Sales purged");
        self.publish(StoreEvent::SalesPurged { count });
        Ok(count)
    }

    async fn purge_expenses(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<usize, StoreError> {
        let count = {
            let mut state = self.state.write().await;
            let before = state.expenses.len();
            state.expenses.retain(|e| !in_range(e.occurred_at, start, end));
            before - state.expenses.len()
        };

        info!(%start, %end, count, "Expenses purged");
        self.publish(StoreEvent::ExpensesPurged { count });
        Ok(count)
    }
}

impl CatalogStore for InMemoryStore {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let mut products = self.state.read().await.products.clone();
        products.sort_by_cached_key(|p| p.name.to_lowercase());
        Ok(products)
    }

    async fn add_product(&self, input: NewProduct) -> Result<Product, StoreError> {
        let product = Product::create(input)?;
        self.state.write().await.products.push(product.clone());

        info!(product_id = %product.id, name = %product.name, "Product added");
        self.publish(StoreEvent::CatalogChanged {
            product_id: product.id,
        });
        Ok(product)
    }

    async fn find_product(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let state = self.state.read().await;
        Ok(state.products.iter().find(|p| p.id == id).cloned())
    }

    async fn update_stock(
        &self,
        id: ProductId,
        stock: Option<u32>,
    ) -> Result<Product, StoreError> {
        let product = {
            let mut state = self.state.write().await;
            let product = state
                .products
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| StoreError::NotFound(format!("product {id}")))?;
            product.stock = stock;
            product.clone()
        };

        debug!(product_id = %id, ?stock, "Stock updated");
        self.publish(StoreEvent::CatalogChanged { product_id: id });
        Ok(product)
    }

    async fn update_product(
        &self,
        id: ProductId,
        input: ProductUpdate,
    ) -> Result<Product, StoreError> {
        let product = {
            let mut state = self.state.write().await;
            let product = state
                .products
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| StoreError::NotFound(format!("product {id}")))?;
            product.apply_update(input)?;
            product.clone()
        };

        info!(
            product_id = %id,
            name = %product.name,
            price = %product.unit_price,
            "Product updated"
        );
        self.publish(StoreEvent::CatalogChanged { product_id: id });
        Ok(product)
    }

    async fn delete_product(&self, id: ProductId) -> Result<Product, StoreError> {
        let product = {
            let mut state = self.state.write().await;
            let index = state
                .products
                .iter()
                .position(|p| p.id == id)
                .ok_or_else(|| StoreError::NotFound(format!("product {id}")))?;
            state.products.remove(index)
        };

        info!(product_id = %id, name = %product.name, "Product deleted");
        self.publish(StoreEvent::CatalogChanged { product_id: id });
        Ok(product)
    }

    async fn purge_products(&self) -> Result<usize, StoreError> {
        let count = {
            let mut state = self.state.write().await;
            let count = state.products.len();
            state.products.clear();
            count
        };

        info!(count, "Catalog purged");
        self.publish(StoreEvent::CatalogPurged { count });
        Ok(count)
    }
}

impl ChangeFeed for InMemoryStore {
    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}
