//! CSV encoding of export tables.
//!
//! Fields containing a comma, a double quote or a line break are quoted, with
//! embedded quotes doubled. Lines end with `\n`.

use std::io::Write;
use std::path::Path;

use crate::period::Period;

use super::error::ExportError;
use super::types::ExportTable;

/// The exports produced for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Combined accounting export.
    Accounting,
    /// Sales register.
    Sales,
    /// Expense register.
    Expenses,
}

impl ExportKind {
    /// Every export kind.
    pub const ALL: [Self; 3] = [Self::Accounting, Self::Sales, Self::Expenses];

    /// File name prefix.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Accounting => "accounting",
            Self::Sales => "sales",
            Self::Expenses => "expenses",
        }
    }

    /// File name for `period`, e.g. `accounting_2025-03.csv`.
    #[must_use]
    pub fn file_name(self, period: &Period) -> String {
        format!("{}_{}.csv", self.prefix(), period.label())
    }
}

/// Writes `table` as CSV to `writer`.
///
/// # Errors
///
/// Returns an error if encoding or writing fails.
pub fn write_csv<W: Write>(writer: W, table: &ExportTable) -> Result<(), ExportError> {
    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv.write_record(&table.header)?;
    for row in &table.rows {
        csv.write_record(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// Encodes `table` as a CSV string.
///
/// # Errors
///
/// Returns an error if encoding fails.
pub fn to_csv_string(table: &ExportTable) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, table)?;
    Ok(String::from_utf8(buffer)?)
}

/// Writes `table` as CSV to the file at `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_csv_file(path: &Path, table: &ExportTable) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    write_csv(std::io::BufWriter::new(file), table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_quoting() {
        let mut table = ExportTable::new(["description", "amount"]);
        table.push(["Sac, rouge", "10.00"]);
        table.push(["Le \"grand\" modèle", "5.00"]);
        table.push(["ligne\nsuivante", "1.00"]);

        let csv = to_csv_string(&table).unwrap();
        assert_eq!(
            csv,
            "description,amount\n\
             \"Sac, rouge\",10.00\n\
             \"Le \"\"grand\"\" modèle\",5.00\n\
             \"ligne\nsuivante\",1.00\n"
        );
    }

    #[test]
    fn test_file_names() {
        let period = Period::new(2025, 3).unwrap();
        assert_eq!(
            ExportKind::Accounting.file_name(&period),
            "accounting_2025-03.csv"
        );
        assert_eq!(ExportKind::Sales.file_name(&period), "sales_2025-03.csv");
        assert_eq!(
            ExportKind::Expenses.file_name(&period),
            "expenses_2025-03.csv"
        );
    }

    #[test]
    fn test_header_only_table() {
        let table = ExportTable::new(["a", "b"]);
        assert_eq!(to_csv_string(&table).unwrap(), "a,b\n");
    }
}
