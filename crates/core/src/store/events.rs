//! Change notifications published by stores.

use olooh_shared::types::{ExpenseId, ProductId, SaleId};
use serde::Serialize;

/// Something changed in a store.
///
/// Events only signal that a re-query is needed; they carry no deltas to
/// apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StoreEvent {
    /// A sale was recorded.
    SaleRecorded {
        /// New sale.
        sale_id: SaleId,
    },
    /// An expense was recorded.
    ExpenseRecorded {
        /// New expense.
        expense_id: ExpenseId,
    },
    /// Sales in a range were deleted.
    SalesPurged {
        /// Number of deleted sales.
        count: usize,
    },
    /// Expenses in a range were deleted.
    ExpensesPurged {
        /// Number of deleted expenses.
        count: usize,
    },
    /// A catalog product was added, edited, deleted or its stock changed.
    CatalogChanged {
        /// Affected product.
        product_id: ProductId,
    },
    /// The whole catalog was deleted.
    CatalogPurged {
        /// Number of deleted products.
        count: usize,
    },
}

impl StoreEvent {
    /// Returns true if the event changes sales or expenses, as opposed to
    /// the catalog only.
    #[must_use]
    pub const fn affects_records(&self) -> bool {
        !matches!(
            self,
            Self::CatalogChanged { .. } | Self::CatalogPurged { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_events_do_not_affect_records() {
        assert!(StoreEvent::SalesPurged { count: 1 }.affects_records());
        assert!(
            StoreEvent::ExpenseRecorded {
                expense_id: ExpenseId::new()
            }
            .affects_records()
        );
        assert!(
            !StoreEvent::CatalogChanged {
                product_id: ProductId::new()
            }
            .affects_records()
        );
        assert!(!StoreEvent::CatalogPurged { count: 3 }.affects_records());
    }

    #[test]
    fn test_serialized_tag() {
        let json = serde_json::to_value(StoreEvent::CatalogPurged { count: 2 }).unwrap();
        assert_eq!(json["event"], "catalog_purged");
        assert_eq!(json["count"], 2);
    }
}
