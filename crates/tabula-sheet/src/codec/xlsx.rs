use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx};
use rust_xlsxwriter::Workbook;

use tabula_model::{CellError, SheetError, Table};

use super::{SheetCodec, SheetReader};

/// Office Open XML workbooks.
///
/// Writing goes through `rust_xlsxwriter` with every cell stored as a string
/// and columns auto-fitted; reading goes through `calamine`.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxCodec;

impl SheetCodec for XlsxCodec {
    fn extension(&self) -> &'static str {
        "xlsx"
    }

    fn write_table(&self, table: &Table) -> Result<Vec<u8>, SheetError> {
        let write_err = |message: String| SheetError::Write {
            sheet: table.sheet_name.clone(),
            message,
        };

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&table.sheet_name)
            .map_err(|e| write_err(e.to_string()))?;

        for (row_idx, row) in table.to_grid().iter().enumerate() {
            let row_num = u32::try_from(row_idx)
                .map_err(|_| write_err(format!("row {row_idx} is out of range")))?;
            for (col_idx, value) in row.iter().enumerate() {
                let col_num = u16::try_from(col_idx)
                    .map_err(|_| write_err(format!("column {col_idx} is out of range")))?;
                worksheet
                    .write_string(row_num, col_num, value)
                    .map_err(|e| write_err(e.to_string()))?;
            }
        }
        worksheet.autofit();

        workbook
            .save_to_buffer()
            .map_err(|e| write_err(e.to_string()))
    }

    fn open(&self, bytes: &[u8]) -> Result<Box<dyn SheetReader>, SheetError> {
        let mut workbook: Xlsx<_> =
            Xlsx::new(Cursor::new(bytes.to_vec())).map_err(|e| SheetError::Open {
                message: e.to_string(),
            })?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(SheetError::EmptyWorkbook)?
            .map_err(|e| SheetError::Open {
                message: e.to_string(),
            })?;
        Ok(Box::new(XlsxSheet { range }))
    }
}

struct XlsxSheet {
    range: Range<Data>,
}

impl SheetReader for XlsxSheet {
    fn cell(&self, row: u32, column: u32) -> Result<Option<String>, CellError> {
        if row == 0 || column == 0 {
            return Ok(None);
        }
        let text = match self.range.get_value((row - 1, column - 1)) {
            None | Some(Data::Empty) => None,
            Some(Data::String(value)) => Some(value.clone()),
            Some(Data::Error(error)) => {
                return Err(CellError {
                    row,
                    column,
                    reason: error.to_string(),
                });
            }
            Some(other) => Some(other.to_string()),
        };
        Ok(text.filter(|value| !value.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_model::ColumnSet;

    fn sample_table() -> Table {
        let mut table = Table::new("People", ColumnSet::from_headers(["Name", "Age"]));
        table.push_row(0, vec!["A".to_string(), "30".to_string()]).unwrap();
        table.push_row(1, vec!["B".to_string(), String::new()]).unwrap();
        table
    }

    #[test]
    fn written_workbook_reads_back() {
        let bytes = XlsxCodec.write_table(&sample_table()).unwrap();
        let sheet = XlsxCodec.open(&bytes).unwrap();

        assert_eq!(sheet.cell(1, 1).unwrap().as_deref(), Some("Name"));
        assert_eq!(sheet.cell(1, 2).unwrap().as_deref(), Some("Age"));
        assert_eq!(sheet.cell(2, 1).unwrap().as_deref(), Some("A"));
        assert_eq!(sheet.cell(2, 2).unwrap().as_deref(), Some("30"));
        assert_eq!(sheet.cell(3, 2).unwrap(), None);
        assert_eq!(sheet.cell(4, 1).unwrap(), None);
    }

    #[test]
    fn invalid_sheet_name_is_write_error() {
        let mut table = sample_table();
        table.sheet_name = "bad/name".to_string();
        assert!(matches!(
            XlsxCodec.write_table(&table),
            Err(SheetError::Write { .. })
        ));
    }

    #[test]
    fn garbage_bytes_fail_to_open() {
        assert!(matches!(
            XlsxCodec.open(b"definitely not a zip archive"),
            Err(SheetError::Open { .. })
        ));
    }
}
