//! Shared types, errors, and configuration for Olooh.
//!
//! This crate provides common types used across all other crates:
//! - Money types with decimal precision, tagged with a closed currency set
//! - Typed IDs for type-safe record references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
