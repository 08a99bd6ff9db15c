//! Period error types.

use olooh_shared::AppError;
use thiserror::Error;

/// Errors raised while building a period.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    /// Month outside 1..=12.
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// Year outside the supported calendar range.
    #[error("Year out of range: {0}")]
    YearOutOfRange(i32),

    /// Unknown IANA timezone name.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

impl From<PeriodError> for AppError {
    fn from(err: PeriodError) -> Self {
        match err {
            PeriodError::UnknownTimezone(_) => Self::Configuration(err.to_string()),
            PeriodError::InvalidMonth(_) | PeriodError::YearOutOfRange(_) => {
                Self::Validation(err.to_string())
            }
        }
    }
}
