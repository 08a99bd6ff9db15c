//! Export error types.

use olooh_shared::AppError;
use thiserror::Error;

/// Errors that can occur while writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV encoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoded output is not valid UTF-8.
    #[error("Export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        Self::Export(err.to_string())
    }
}
