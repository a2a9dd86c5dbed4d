//! Tabular serialization for Tabula.
//!
//! Export turns a collection of [`Record`]s into a labeled table, renders it
//! through a [`SheetCodec`], and writes the result next to its siblings as
//! `<base>-<YYYYMMDD>.<ext>`. Import decodes a base64 workbook, scans rows
//! from a starting cell until the first empty key cell, and returns each row
//! as a `|`-terminated string along with the rows that failed to convert.
//!
//! # Example
//!
//! ```ignore
//! use tabula_sheet::{XlsxCodec, export, import_base64};
//! use tabula_model::{ExportRequest, ImportOptions};
//!
//! let request = ExportRequest::new("/tmp/out", "people").with_sheet_name("People");
//! let path = export(&people, &request, &XlsxCodec)?;
//!
//! let result = import_base64(&upload, ImportOptions::new(2, 1, 3), &XlsxCodec);
//! for row in &result.rows { println!("{row}"); }
//! ```

mod codec;
mod export;
mod import;

pub use codec::{CsvCodec, GridReader, SheetCodec, SheetReader, XlsxCodec};
pub use export::{export, export_or_message};
pub use import::{import_base64, import_bytes, try_import_base64, try_import_bytes};
pub use tabula_model::{
    ExportError, ExportRequest, ImportError, ImportOptions, ImportResult, Record,
};
