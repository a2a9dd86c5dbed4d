//! Record export to spreadsheet files.

use std::fs;
use std::path::PathBuf;

use chrono::Local;

use tabula_model::{ColumnSet, ExportError, ExportRequest, Record, Table};
use tabula_store::{join_path, try_write_bytes};

use crate::codec::SheetCodec;

/// Export `records` as a workbook and return the saved path.
///
/// Columns come from `request.headers` when given, otherwise from the first
/// record's field names. Validation happens before anything touches the
/// filesystem. The output folder is created when missing and is not removed
/// again if a later step fails.
pub fn export<R: Record>(
    records: &[R],
    request: &ExportRequest,
    codec: &dyn SheetCodec,
) -> Result<PathBuf, ExportError> {
    let Some(first) = records.first() else {
        return Err(ExportError::EmptyCollection);
    };

    let columns = match &request.headers {
        Some(headers) => ColumnSet::from_headers(headers.iter().cloned()),
        None => ColumnSet::from_record(first),
    };
    let table = Table::from_records(request.effective_sheet_name(), columns, records)?;

    let folder = &request.output_folder;
    fs::create_dir_all(folder).map_err(|e| ExportError::CreateDirectory {
        path: folder.clone(),
        source: e,
    })?;

    let file_name = request.file_name(Local::now().date_naive(), codec.extension());
    let save_path = PathBuf::from(join_path([&*folder.to_string_lossy(), file_name.as_str()]));

    let bytes = codec.write_table(&table)?;
    try_write_bytes(&save_path, &bytes)?;

    tracing::info!(
        rows = table.rows.len(),
        columns = table.columns.len(),
        "Exported sheet '{}' to {}",
        table.sheet_name,
        save_path.display()
    );
    Ok(save_path)
}

/// Export and report the outcome as `(saved_path, error_message)`.
///
/// Exactly one side is non-empty: the path on success, a user-facing message
/// on failure.
pub fn export_or_message<R: Record>(
    records: &[R],
    request: &ExportRequest,
    codec: &dyn SheetCodec,
) -> (String, String) {
    match export(records, request, codec) {
        Ok(path) => (path.to_string_lossy().into_owned(), String::new()),
        Err(err) => {
            tracing::warn!("export failed: {err}");
            (String::new(), err.user_message())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CsvCodec;
    use chrono::NaiveDate;
    use tabula_model::Field;
    use tempfile::tempdir;

    fn rows() -> Vec<Vec<Field>> {
        vec![
            vec![Field::new("Name", "A"), Field::new("Age", 30)],
            vec![Field::new("Name", "B"), Field::new("Age", 41)],
        ]
    }

    #[test]
    fn test_empty_collection_fails_before_io() {
        let dir = tempdir().unwrap();
        let folder = dir.path().join("never-created");
        let request = ExportRequest::new(&folder, "people");

        let result = export(&Vec::<Vec<Field>>::new(), &request, &CsvCodec);
        assert!(matches!(result, Err(ExportError::EmptyCollection)));
        assert!(!folder.exists());
    }

    #[test]
    fn test_header_mismatch_fails_before_io() {
        let dir = tempdir().unwrap();
        let folder = dir.path().join("never-created");
        let request = ExportRequest::new(&folder, "people")
            .with_headers(Some(vec!["Only".to_string()]));

        let (path, message) = export_or_message(&rows(), &request, &CsvCodec);
        assert!(path.is_empty());
        assert_eq!(message, "Row 1 has 2 values but the header row has 1 columns");
        assert!(!folder.exists());
    }

    #[test]
    fn test_export_writes_dated_file() {
        let dir = tempdir().unwrap();
        let folder = dir.path().join("out");
        let request = ExportRequest::new(&folder, "people")
            .with_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        let path = export(&rows(), &request, &CsvCodec).unwrap();

        assert_eq!(path, folder.join("people-20240115.csv"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Name,Age\nA,30\nB,41\n"
        );
    }

    #[test]
    fn test_export_overwrites_previous_file() {
        let dir = tempdir().unwrap();
        let request = ExportRequest::new(dir.path(), "people")
            .with_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        let first = export(&rows(), &request, &CsvCodec).unwrap();
        let second = export(&rows()[..1], &request, &CsvCodec).unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(&second).unwrap(), "Name,Age\nA,30\n");
    }
}
