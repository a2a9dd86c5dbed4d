#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::record::Record;

/// Ordered column labels governing row layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSet(Vec<String>);

impl ColumnSet {
    /// Column names taken from a record's field names.
    pub fn from_record<R: Record + ?Sized>(record: &R) -> Self {
        Self(record.field_names())
    }

    /// Caller-supplied column labels, used verbatim.
    pub fn from_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(headers.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Rows of string cells aligned to a column set, ready for a sheet codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub sheet_name: String,
    pub columns: ColumnSet,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(sheet_name: impl Into<String>, columns: ColumnSet) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row; it must have exactly one cell per column.
    ///
    /// `index` is the 0-based position of the source record and only feeds
    /// the error.
    pub fn push_row(&mut self, index: usize, row: Vec<String>) -> Result<(), ExportError> {
        if row.len() != self.columns.len() {
            return Err(ExportError::HeaderMismatch {
                row: index,
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Materialize one row per record against `columns`.
    pub fn from_records<R: Record>(
        sheet_name: impl Into<String>,
        columns: ColumnSet,
        records: &[R],
    ) -> Result<Self, ExportError> {
        let mut table = Self::new(sheet_name, columns);
        for (index, record) in records.iter().enumerate() {
            table.push_row(index, record.field_values())?;
        }
        Ok(table)
    }

    /// Header row followed by the data rows.
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        let mut grid = Vec::with_capacity(self.rows.len() + 1);
        grid.push(self.columns.names().to_vec());
        grid.extend(self.rows.iter().cloned());
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Field;

    #[test]
    fn mismatched_row_is_rejected() {
        let records = vec![vec![Field::new("a", 1)], vec![Field::new("a", 2), Field::new("b", 3)]];
        let columns = ColumnSet::from_record(&records[0]);
        let err = Table::from_records("Report", columns, &records).unwrap_err();
        assert!(matches!(
            err,
            ExportError::HeaderMismatch {
                row: 1,
                expected: 1,
                found: 2
            }
        ));
    }

    #[test]
    fn grid_starts_with_header_row() {
        let records = vec![vec![Field::new("Name", "A"), Field::new("Age", 30)]];
        let columns = ColumnSet::from_headers(["Full name", "Years"]);
        let table = Table::from_records("Report", columns, &records).unwrap();
        assert_eq!(
            table.to_grid(),
            vec![vec!["Full name", "Years"], vec!["A", "30"]]
        );
    }
}
