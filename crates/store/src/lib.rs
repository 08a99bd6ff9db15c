//! Record store layer for Olooh.
//!
//! This crate provides:
//! - An in-memory implementation of the core store traits
//! - JSON snapshot loading and saving
//! - Change event broadcasting

pub mod memory;
pub mod snapshot;

pub use memory::InMemoryStore;
pub use snapshot::Snapshot;
