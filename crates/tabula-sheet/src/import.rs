//! Delimited row import from workbook bytes.

use tabula_model::{CellError, ImportError, ImportOptions, ImportResult, join_row};
use tabula_store::decode_base64;

use crate::codec::{SheetCodec, SheetReader};

/// Decode a base64 workbook (data-URI prefix allowed) and import its rows.
pub fn try_import_base64(
    content: &str,
    options: ImportOptions,
    codec: &dyn SheetCodec,
) -> Result<ImportResult, ImportError> {
    let bytes = decode_base64(content)?;
    try_import_bytes(&bytes, options, codec)
}

/// Import rows from the first sheet of a workbook.
///
/// Fails only when the workbook cannot be opened; row-level problems are
/// reported through [`ImportResult::failed_rows`].
pub fn try_import_bytes(
    bytes: &[u8],
    options: ImportOptions,
    codec: &dyn SheetCodec,
) -> Result<ImportResult, ImportError> {
    let sheet = codec.open(bytes)?;
    Ok(scan_rows(sheet.as_ref(), options))
}

/// Lenient form of [`try_import_base64`]: an undecodable or unopenable
/// workbook yields an empty result.
pub fn import_base64(
    content: &str,
    options: ImportOptions,
    codec: &dyn SheetCodec,
) -> ImportResult {
    try_import_base64(content, options, codec).unwrap_or_else(|err| {
        tracing::warn!("import failed: {err}");
        ImportResult::default()
    })
}

/// Lenient form of [`try_import_bytes`].
pub fn import_bytes(
    bytes: &[u8],
    options: ImportOptions,
    codec: &dyn SheetCodec,
) -> ImportResult {
    try_import_bytes(bytes, options, codec).unwrap_or_else(|err| {
        tracing::warn!("import failed: {err}");
        ImportResult::default()
    })
}

/// Walk down from `start_row` while the key cell at `start_column` has text.
///
/// A row whose cells cannot be read, key cell included, is recorded in
/// `failed_rows` and the scan moves on to the next row.
fn scan_rows(sheet: &dyn SheetReader, options: ImportOptions) -> ImportResult {
    let mut result = ImportResult::default();
    let mut row = options.start_row;

    loop {
        let converted = match sheet.cell(row, options.start_column) {
            Ok(Some(key)) if !key.is_empty() => convert_row(sheet, row, options),
            Ok(_) => break,
            Err(err) => Err(err),
        };

        match converted {
            Ok(line) if line.is_empty() => {}
            Ok(line) => result.rows.push(line),
            Err(err) => {
                tracing::debug!("row {row} failed: {err}");
                result.failed_rows.push(row);
            }
        }

        let Some(next) = row.checked_add(1) else {
            break;
        };
        row = next;
    }

    tracing::info!(
        rows = result.rows.len(),
        failed = result.failed_rows.len(),
        "Imported rows starting at ({}, {})",
        options.start_row,
        options.start_column
    );
    result
}

fn convert_row(
    sheet: &dyn SheetReader,
    row: u32,
    options: ImportOptions,
) -> Result<String, CellError> {
    let mut cells = Vec::with_capacity(options.total_columns as usize);
    for offset in 0..options.total_columns {
        let column = options
            .start_column
            .checked_add(offset)
            .ok_or_else(|| CellError {
                row,
                column: u32::MAX,
                reason: "column index overflow".to_string(),
            })?;
        cells.push(sheet.cell(row, column)?.unwrap_or_default());
    }
    Ok(join_row(cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::GridReader;

    fn grid(rows: &[&[&str]]) -> GridReader {
        GridReader::new(
            rows.iter()
                .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn stops_at_first_empty_key_cell() {
        let sheet = grid(&[&["x", "1"], &["y", "2"], &[""], &["z", "3"]]);
        let result = scan_rows(&sheet, ImportOptions::new(1, 1, 2));
        assert_eq!(result.rows, vec!["x|1|", "y|2|"]);
        assert!(result.failed_rows.is_empty());
    }

    #[test]
    fn honours_start_offsets() {
        let sheet = grid(&[
            &["title", "", ""],
            &["", "a", "b"],
            &["", "c", ""],
        ]);
        let result = scan_rows(&sheet, ImportOptions::new(2, 2, 2));
        assert_eq!(result.rows, vec!["a|b|", "c||"]);
    }

    #[test]
    fn unreadable_key_cell_fails_only_that_row() {
        struct BrokenKey(GridReader);

        impl SheetReader for BrokenKey {
            fn cell(&self, row: u32, column: u32) -> Result<Option<String>, CellError> {
                if row == 2 && column == 1 {
                    return Err(CellError {
                        row,
                        column,
                        reason: "#N/A".to_string(),
                    });
                }
                self.0.cell(row, column)
            }
        }

        let sheet = BrokenKey(grid(&[&["a", "1"], &["b", "2"], &["c", "3"]]));
        let result = scan_rows(&sheet, ImportOptions::new(1, 1, 2));
        assert_eq!(result.rows, vec!["a|1|", "c|3|"]);
        assert_eq!(result.failed_rows, vec![2]);
    }

    #[test]
    fn zero_columns_yields_no_rows() {
        let sheet = grid(&[&["x"], &["y"]]);
        let result = scan_rows(&sheet, ImportOptions::new(1, 1, 0));
        assert!(result.is_empty());
    }
}
