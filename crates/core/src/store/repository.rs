//! Store traits implemented outside the core.

use std::future::Future;

use chrono::{DateTime, Utc};
use olooh_shared::types::ProductId;
use tokio::sync::broadcast;

use super::error::StoreError;
use super::events::StoreEvent;
use crate::ledger::{Expense, NewExpense, NewProduct, NewSale, Product, ProductUpdate, Sale};

/// Queryable store of sales and expenses.
///
/// Range queries are half-open: `start <= occurred_at < end`.
pub trait RecordStore: Send + Sync {
    /// Sales in `[start, end)`, optionally narrowed to one location.
    fn query_sales(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        location: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Sale>, StoreError>> + Send;

    /// Expenses in `[start, end)`.
    fn query_expenses(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<Expense>, StoreError>> + Send;

    /// Records a sale, checking and decrementing the product stock.
    fn record_sale(
        &self,
        input: NewSale,
    ) -> impl Future<Output = Result<Sale, StoreError>> + Send;

    /// Records an expense.
    fn record_expense(
        &self,
        input: NewExpense,
    ) -> impl Future<Output = Result<Expense, StoreError>> + Send;

    /// Deletes sales in `[start, end)` and returns how many were removed.
    fn purge_sales(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> impl Future<Output = Result<usize, StoreError>> + Send;

    /// Deletes expenses in `[start, end)` and returns how many were removed.
    fn purge_expenses(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> impl Future<Output = Result<usize, StoreError>> + Send;
}

/// Product catalog.
pub trait CatalogStore: Send + Sync {
    /// All products, sorted by name.
    fn list_products(&self) -> impl Future<Output = Result<Vec<Product>, StoreError>> + Send;

    /// Adds a product.
    fn add_product(
        &self,
        input: NewProduct,
    ) -> impl Future<Output = Result<Product, StoreError>> + Send;

    /// Finds a product by ID.
    fn find_product(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, StoreError>> + Send;

    /// Overwrites the stock count of a product.
    fn update_stock(
        &self,
        id: ProductId,
        stock: Option<u32>,
    ) -> impl Future<Output = Result<Product, StoreError>> + Send;

    /// Replaces the name, reference and price of a product.
    ///
    /// Sales already recorded keep their totals.
    fn update_product(
        &self,
        id: ProductId,
        input: ProductUpdate,
    ) -> impl Future<Output = Result<Product, StoreError>> + Send;

    /// Removes a product and returns it. Its past sales are kept.
    fn delete_product(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Product, StoreError>> + Send;

    /// Removes every product and returns how many were removed.
    fn purge_products(&self) -> impl Future<Output = Result<usize, StoreError>> + Send;
}

/// Source of change notifications.
pub trait ChangeFeed {
    /// Subscribes to every change published from now on.
    fn subscribe(&self) -> broadcast::Receiver<StoreEvent>;
}
