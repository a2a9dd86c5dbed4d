use csv::{ReaderBuilder, WriterBuilder};

use tabula_model::{SheetError, Table};

use super::{GridReader, SheetCodec, SheetReader};

/// Comma-separated text workbooks with a single unnamed sheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvCodec;

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

impl SheetCodec for CsvCodec {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn write_table(&self, table: &Table) -> Result<Vec<u8>, SheetError> {
        let write_err = |message: String| SheetError::Write {
            sheet: table.sheet_name.clone(),
            message,
        };
        let mut writer = WriterBuilder::new().flexible(false).from_writer(Vec::new());
        writer
            .write_record(table.columns.iter())
            .map_err(|e| write_err(e.to_string()))?;
        for row in &table.rows {
            writer
                .write_record(row)
                .map_err(|e| write_err(e.to_string()))?;
        }
        writer.into_inner().map_err(|e| write_err(e.to_string()))
    }

    fn open(&self, bytes: &[u8]) -> Result<Box<dyn SheetReader>, SheetError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);
        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| SheetError::Open {
                message: e.to_string(),
            })?;
            rows.push(record.iter().map(normalize_cell).collect());
        }
        Ok(Box::new(GridReader::new(rows)))
    }
}
