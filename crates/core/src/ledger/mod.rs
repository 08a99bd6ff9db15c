//! Sale, expense and product records.
//!
//! This module implements the record side of the ledger:
//! - Record types (sales, expenses, catalog products)
//! - Creation rules (quantity, stock, title, amount)
//! - Known location, payment method and category tags
//! - Error types for record creation

pub mod error;
pub mod tags;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use error::LedgerError;
pub use tags::{
    EXPENSE_CATEGORIES, LOCATIONS, PAYMENT_METHODS, is_known_category, is_known_location,
    is_known_payment_method,
};
pub use types::{Expense, NewExpense, NewProduct, NewSale, Product, ProductUpdate, Sale};
pub use validation::{
    check_stock, remaining_stock, validate_new_expense, validate_new_product,
    validate_product_update,
};
