//! Record types for sales, expenses and catalog products.
//!
//! Sales and expenses are immutable once recorded: they are only ever
//! created or purged in bulk, never updated.

use chrono::{DateTime, Utc};
use olooh_shared::types::{Currency, ExpenseId, Money, ProductId, SaleId};
use serde::{Deserialize, Serialize};

use super::error::LedgerError;
use super::validation::{
    check_stock, remaining_stock, validate_new_expense, validate_new_product,
    validate_product_update,
};

/// One recorded sale.
///
/// `total` is fixed at creation as `unit_price * quantity` and is never
/// recomputed, even if the catalog price changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    /// Sale identifier.
    pub id: SaleId,
    /// Product sold, if still linked to the catalog.
    #[serde(default)]
    pub product_id: Option<ProductId>,
    /// Product name at the time of the sale.
    #[serde(default)]
    pub product_name: String,
    /// Product reference code at the time of the sale.
    #[serde(default)]
    pub product_reference: String,
    /// Units sold.
    pub quantity: u32,
    /// Price of one unit.
    pub unit_price: Money,
    /// Total charged.
    pub total: Money,
    /// Location tag.
    #[serde(default)]
    pub location: String,
    /// Payment method tag.
    #[serde(default)]
    pub payment_method: String,
    /// When the sale happened.
    pub occurred_at: DateTime<Utc>,
}

/// One recorded expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense identifier.
    pub id: ExpenseId,
    /// Short description.
    pub title: String,
    /// Amount paid.
    pub amount: Money,
    /// Location tag.
    #[serde(default)]
    pub location: String,
    /// Category tag.
    #[serde(default)]
    pub category: String,
    /// When the expense was paid.
    pub occurred_at: DateTime<Utc>,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Reference code.
    #[serde(default)]
    pub reference: String,
    /// Unit price, tagged with the currency the product is sold in.
    pub unit_price: Money,
    /// Units in stock, or `None` when stock is not tracked.
    #[serde(default)]
    pub stock: Option<u32>,
}

/// Input for recording a sale.
#[derive(Debug, Clone)]
pub struct NewSale {
    /// Product being sold.
    pub product_id: ProductId,
    /// Units sold.
    pub quantity: u32,
    /// Location tag.
    pub location: String,
    /// Payment method tag.
    pub payment_method: String,
    /// Timestamp override; defaults to the recording time.
    pub occurred_at: Option<DateTime<Utc>>,
}

/// Input for recording an expense.
#[derive(Debug, Clone)]
pub struct NewExpense {
    /// Short description.
    pub title: String,
    /// Amount paid.
    pub amount: Money,
    /// Location tag.
    pub location: String,
    /// Category tag.
    pub category: String,
    /// Timestamp override; defaults to the recording time.
    pub occurred_at: Option<DateTime<Utc>>,
}

/// Input for adding a product to the catalog.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Display name.
    pub name: String,
    /// Reference code.
    pub reference: String,
    /// Unit price.
    pub unit_price: Money,
    /// Initial stock, or `None` when stock is not tracked.
    pub stock: Option<u32>,
}

/// New catalog details for an existing product.
///
/// Stock is changed separately; sales already recorded keep their totals.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    /// Display name.
    pub name: String,
    /// Reference code.
    pub reference: String,
    /// Unit price applied to future sales.
    pub unit_price: Money,
}

impl Sale {
    /// Builds a sale of `product` and returns it with the product's new stock.
    ///
    /// # Errors
    ///
    /// Returns an error if the quantity is zero or exceeds the tracked stock.
    pub fn record(
        product: &Product,
        input: NewSale,
        now: DateTime<Utc>,
    ) -> Result<(Self, Option<u32>), LedgerError> {
        if input.quantity == 0 {
            return Err(LedgerError::InvalidQuantity);
        }
        check_stock(product, input.quantity)?;
        let total = product
            .unit_price
            .checked_times(input.quantity)
            .ok_or(LedgerError::AmountOverflow)?;

        let sale = Self {
            id: SaleId::new(),
            product_id: Some(product.id),
            product_name: product.name.clone(),
            product_reference: product.reference.clone(),
            quantity: input.quantity,
            unit_price: product.unit_price,
            total,
            location: input.location.trim().to_string(),
            payment_method: input.payment_method.trim().to_string(),
            occurred_at: input.occurred_at.unwrap_or(now),
        };
        let stock = product.stock.map(|s| remaining_stock(s, input.quantity));
        Ok((sale, stock))
    }

    /// Currency the sale was charged in.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.total.currency
    }
}

impl Expense {
    /// Builds an expense from validated input.
    ///
    /// # Errors
    ///
    /// Returns an error if the title is blank or the amount is not positive.
    pub fn record(input: NewExpense, now: DateTime<Utc>) -> Result<Self, LedgerError> {
        validate_new_expense(&input)?;
        Ok(Self {
            id: ExpenseId::new(),
            title: input.title.trim().to_string(),
            amount: input.amount,
            location: input.location.trim().to_string(),
            category: input.category.trim().to_string(),
            occurred_at: input.occurred_at.unwrap_or(now),
        })
    }
}

impl Product {
    /// Builds a catalog product from validated input.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the price is negative.
    pub fn create(input: NewProduct) -> Result<Self, LedgerError> {
        validate_new_product(&input)?;
        Ok(Self {
            id: ProductId::new(),
            name: input.name.trim().to_string(),
            reference: input.reference.trim().to_string(),
            unit_price: input.unit_price,
            stock: input.stock,
        })
    }

    /// Replaces the name, reference and price of the product.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the price is negative; the
    /// product is left untouched.
    pub fn apply_update(&mut self, input: ProductUpdate) -> Result<(), LedgerError> {
        validate_product_update(&input)?;
        self.name = input.name.trim().to_string();
        self.reference = input.reference.trim().to_string();
        self.unit_price = input.unit_price;
        Ok(())
    }
}
