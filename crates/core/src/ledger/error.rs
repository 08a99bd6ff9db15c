//! Ledger error types for record creation.

use olooh_shared::types::ProductId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while creating sales, expenses or products.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    // ========== Sale Errors ==========
    /// Sale quantity must be at least one.
    #[error("Sale quantity must be positive")]
    InvalidQuantity,

    /// Not enough stock left for the requested quantity.
    #[error("Insufficient stock: {available} available, {requested} requested")]
    InsufficientStock {
        /// Units currently in stock.
        available: u32,
        /// Units requested by the sale.
        requested: u32,
    },

    /// `unit_price * quantity` does not fit in a decimal amount.
    #[error("Sale total is out of range")]
    AmountOverflow,

    /// Referenced product does not exist.
    #[error("Product not found: {0}")]
    UnknownProduct(ProductId),

    // ========== Expense Errors ==========
    /// Expense title is empty after trimming.
    #[error("Expense title cannot be empty")]
    EmptyTitle,

    /// Expense amount must be strictly positive.
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    // ========== Catalog Errors ==========
    /// Product name is empty after trimming.
    #[error("Product name cannot be empty")]
    EmptyProductName,

    /// Product price cannot be negative.
    #[error("Product price cannot be negative, got {0}")]
    NegativePrice(Decimal),
}

impl LedgerError {
    /// Returns the stable error code for logs and exports.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidQuantity => "INVALID_QUANTITY",
            Self::InsufficientStock { .. } => "INSUFFICIENT_STOCK",
            Self::AmountOverflow => "AMOUNT_OVERFLOW",
            Self::UnknownProduct(_) => "UNKNOWN_PRODUCT",
            Self::EmptyTitle => "EMPTY_TITLE",
            Self::NonPositiveAmount(_) => "NON_POSITIVE_AMOUNT",
            Self::EmptyProductName => "EMPTY_PRODUCT_NAME",
            Self::NegativePrice(_) => "NEGATIVE_PRICE",
        }
    }

    /// Returns true if the failure comes from catalog state rather than input.
    #[must_use]
    pub const fn is_catalog_conflict(&self) -> bool {
        matches!(self, Self::InsufficientStock { .. } | Self::UnknownProduct(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(LedgerError::InvalidQuantity.error_code(), "INVALID_QUANTITY");
        assert_eq!(
            LedgerError::InsufficientStock {
                available: 1,
                requested: 2
            }
            .error_code(),
            "INSUFFICIENT_STOCK"
        );
        assert_eq!(LedgerError::EmptyTitle.error_code(), "EMPTY_TITLE");
        assert_eq!(
            LedgerError::NonPositiveAmount(Decimal::ZERO).error_code(),
            "NON_POSITIVE_AMOUNT"
        );
    }

    #[test]
    fn test_catalog_conflicts() {
        assert!(LedgerError::UnknownProduct(ProductId::new()).is_catalog_conflict());
        assert!(
            LedgerError::InsufficientStock {
                available: 0,
                requested: 1
            }
            .is_catalog_conflict()
        );
        assert!(!LedgerError::EmptyTitle.is_catalog_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = LedgerError::InsufficientStock {
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock: 3 available, 5 requested"
        );
        assert_eq!(
            LedgerError::NonPositiveAmount(Decimal::new(-150, 2)).to_string(),
            "Amount must be positive, got -1.50"
        );
    }
}
