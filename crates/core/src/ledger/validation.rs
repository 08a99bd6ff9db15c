//! Business rule validation for record creation.

use rust_decimal::Decimal;

use super::error::LedgerError;
use olooh_shared::types::Money;

use super::types::{NewExpense, NewProduct, Product, ProductUpdate};

/// Checks that `product` has enough stock for `quantity` units.
///
/// Products without a stock count always pass.
///
/// # Errors
///
/// Returns `InsufficientStock` when `stock - quantity` would go negative.
pub fn check_stock(product: &Product, quantity: u32) -> Result<(), LedgerError> {
    match product.stock {
        Some(available) if available < quantity => Err(LedgerError::InsufficientStock {
            available,
            requested: quantity,
        }),
        _ => Ok(()),
    }
}

/// Stock left after selling `quantity` units. Never goes below zero.
#[must_use]
pub const fn remaining_stock(stock: u32, quantity: u32) -> u32 {
    stock.saturating_sub(quantity)
}

/// Validates an expense before it is recorded.
///
/// # Errors
///
/// Returns an error if the title is blank or the amount is not positive.
pub fn validate_new_expense(input: &NewExpense) -> Result<(), LedgerError> {
    if input.title.trim().is_empty() {
        return Err(LedgerError::EmptyTitle);
    }
    if input.amount.amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount(input.amount.amount));
    }
    Ok(())
}

/// Validates a product before it is added to the catalog.
///
/// # Errors
///
/// Returns an error if the name is blank or the price is negative.
pub fn validate_new_product(input: &NewProduct) -> Result<(), LedgerError> {
    validate_product_fields(&input.name, input.unit_price)
}

/// Validates new catalog details for an existing product.
///
/// # Errors
///
/// Returns an error if the name is blank or the price is negative.
pub fn validate_product_update(input: &ProductUpdate) -> Result<(), LedgerError> {
    validate_product_fields(&input.name, input.unit_price)
}

fn validate_product_fields(name: &str, unit_price: Money) -> Result<(), LedgerError> {
    if name.trim().is_empty() {
        return Err(LedgerError::EmptyProductName);
    }
    if unit_price.is_negative() {
        return Err(LedgerError::NegativePrice(unit_price.amount));
    }
    Ok(())
}
