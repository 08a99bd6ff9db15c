//! Monthly aggregation of sales and expenses.
//!
//! This module reduces the records of one period into reporting figures:
//! - Totals and margin
//! - Per-day revenue, expense and margin series
//! - Keyed breakdowns (location, product, payment method)
//! - Gain/loss statistics over the daily margin
//!
//! Every operation is pure and total: empty input yields zeros or the
//! placeholder entry, never an error.

pub mod breakdown;
pub mod series;
pub mod service;
pub mod stats;
pub mod summary;

#[cfg(test)]
mod tests;

pub use breakdown::{Breakdown, BreakdownEntry, Direction, PLACEHOLDER_KEY, breakdown_by};
pub use series::DailySeries;
pub use service::Aggregator;
pub use stats::GainLossStats;
pub use summary::{Figure, MonthlySummary};
