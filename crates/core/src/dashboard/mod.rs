//! Dashboard orchestration.
//!
//! Pulls one period of records from a store, hands them to the aggregator
//! and recomputes from scratch whenever the store reports a change.

pub mod service;

pub use service::{DashboardService, MonthlyReport};
