//! Record and catalog store seams.
//!
//! The core never persists anything itself. Stores implement these traits
//! and publish a [`StoreEvent`] after every change so that callers can
//! re-query and recompute.

pub mod error;
pub mod events;
pub mod repository;

pub use error::StoreError;
pub use events::StoreEvent;
pub use repository::{CatalogStore, ChangeFeed, RecordStore};
