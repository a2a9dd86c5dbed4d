//! Shared data model for the Tabula crates.
//!
//! - `record` - the `Record` capability exportable types implement
//! - `table` - column sets and string tables handed to sheet codecs
//! - `import` - pipe-delimited import results
//! - `history` - audit wrapper for changed models
//! - `options` - export and import request options
//! - `error` - error taxonomy shared by store and sheet crates

pub mod error;
pub mod history;
pub mod import;
pub mod options;
pub mod record;
pub mod table;

pub use error::{BlobError, CellError, ExportError, FetchError, ImportError, SheetError};
pub use history::HistoryEntry;
pub use import::{ImportResult, ROW_DELIMITER, join_row, split_row};
pub use options::{DEFAULT_SHEET_NAME, ExportRequest, ImportOptions};
pub use record::{Field, Record};
pub use table::{ColumnSet, Table};
