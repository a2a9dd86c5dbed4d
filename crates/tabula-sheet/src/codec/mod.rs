//! Spreadsheet codecs.
//!
//! A codec renders a [`Table`] into workbook bytes and opens workbook bytes
//! for random cell access on the first sheet. Coordinates are 1-based.

mod csv;
mod xlsx;

pub use self::csv::CsvCodec;
pub use self::xlsx::XlsxCodec;

use tabula_model::{CellError, SheetError, Table};

/// Renders and opens workbooks of one file format.
pub trait SheetCodec {
    /// File extension without the leading dot.
    fn extension(&self) -> &'static str;

    /// Render the table, header row first, into workbook bytes.
    fn write_table(&self, table: &Table) -> Result<Vec<u8>, SheetError>;

    /// Open workbook bytes and expose the first sheet.
    fn open(&self, bytes: &[u8]) -> Result<Box<dyn SheetReader>, SheetError>;
}

/// Random access to the text of a sheet's cells.
pub trait SheetReader {
    /// Text of the cell at `(row, column)`, `None` when absent or empty.
    fn cell(&self, row: u32, column: u32) -> Result<Option<String>, CellError>;
}

/// Sheet held as rows of already-converted strings.
#[derive(Debug, Clone, Default)]
pub struct GridReader {
    rows: Vec<Vec<String>>,
}

impl GridReader {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}

impl SheetReader for GridReader {
    fn cell(&self, row: u32, column: u32) -> Result<Option<String>, CellError> {
        if row == 0 || column == 0 {
            return Ok(None);
        }
        let value = self
            .rows
            .get(row as usize - 1)
            .and_then(|cells| cells.get(column as usize - 1))
            .filter(|value| !value.is_empty())
            .cloned();
        Ok(value)
    }
}
