//! Calendar-month windowing.
//!
//! A period is one calendar month, as a half-open interval `[start, end)` in
//! a business timezone.

pub mod error;
pub mod window;

pub use error::PeriodError;
pub use window::{Period, days_in_month, month_range, parse_timezone};
