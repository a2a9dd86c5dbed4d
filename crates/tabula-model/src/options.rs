//! Request options for export and import.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sheet label used when the caller does not name one.
pub const DEFAULT_SHEET_NAME: &str = "Report";

/// Where and how an export is written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportRequest {
    /// Sheet label; empty selects [`DEFAULT_SHEET_NAME`].
    pub sheet_name: String,

    /// Absolute output directory, created when missing.
    pub output_folder: PathBuf,

    /// File name stem; the date and extension are appended.
    pub file_name_base: String,

    /// Explicit column labels, matched positionally against record fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,

    /// Date stamped into the file name. Defaults to today (local time).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl ExportRequest {
    pub fn new(output_folder: impl Into<PathBuf>, file_name_base: impl Into<String>) -> Self {
        Self {
            output_folder: output_folder.into(),
            file_name_base: file_name_base.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = sheet_name.into();
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: Option<Vec<String>>) -> Self {
        self.headers = headers;
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// The sheet label actually written.
    pub fn effective_sheet_name(&self) -> &str {
        if self.sheet_name.is_empty() {
            DEFAULT_SHEET_NAME
        } else {
            &self.sheet_name
        }
    }

    /// `<base>-<YYYYMMDD>.<extension>`
    pub fn file_name(&self, today: NaiveDate, extension: &str) -> String {
        let date = self.date.unwrap_or(today);
        format!(
            "{}-{}.{}",
            self.file_name_base,
            date.format("%Y%m%d"),
            extension
        )
    }
}

/// Cell window scanned by an import. Rows and columns are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOptions {
    pub start_row: u32,
    pub start_column: u32,
    pub total_columns: u32,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            start_row: 1,
            start_column: 1,
            total_columns: 1,
        }
    }
}

impl ImportOptions {
    pub fn new(start_row: u32, start_column: u32, total_columns: u32) -> Self {
        Self {
            start_row,
            start_column,
            total_columns,
        }
    }
}
