//! JSON snapshot of every record held by a store.

use std::path::Path;

use olooh_core::ledger::{Expense, Product, Sale};
use olooh_core::store::StoreError;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Products, sales and expenses as stored on disk.
///
/// Missing sections default to empty; amounts that are missing or not
/// numeric load as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Catalog products.
    #[serde(default)]
    pub products: Vec<Product>,
    /// Recorded sales.
    #[serde(default)]
    pub sales: Vec<Sale>,
    /// Recorded expenses.
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Snapshot {
    /// Parses a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Snapshot` if a record is structurally malformed.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        serde_json::from_str(json).map_err(|e| {
            warn!(error = %e, "Rejected malformed snapshot");
            StoreError::from(e)
        })
    }

    /// Reads a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            products = snapshot.products.len(),
            sales = snapshot.sales.len(),
            expenses = snapshot.expenses.len(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Writes the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
