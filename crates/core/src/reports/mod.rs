//! Report formatting and tabular export.
//!
//! This module projects aggregated figures into flat tables:
//! - Accounting rows (summary rows first, then sales, then expenses)
//! - Sales and expense registers
//! - CSV encoding with standard quoting

pub mod error;
pub mod export;
pub mod service;
pub mod types;


pub use error::ExportError;
pub use export::{ExportKind, to_csv_string, write_csv, write_csv_file};
pub use service::ReportFormatter;
pub use types::*;
