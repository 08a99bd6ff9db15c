//! Core ledger aggregation logic for Olooh.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Record types, conversion rules, aggregation and report formatting live here;
//! persistence is reached only through the traits in [`store`].
//!
//! # Modules
//!
//! - `currency` - Fixed-peg conversion through the pivot currency
//! - `period` - Calendar-month windows and day bucketing
//! - `ledger` - Sale, expense and product records
//! - `aggregation` - Totals, daily series, breakdowns and gain/loss statistics
//! - `reports` - Accounting rows, registers and CSV export
//! - `store` - Record and catalog store seams with change events
//! - `dashboard` - Re-query and recompute orchestration

pub mod aggregation;
pub mod currency;
pub mod dashboard;
pub mod ledger;
pub mod period;
pub mod reports;
pub mod store;
