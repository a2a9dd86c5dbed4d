//! Error types shared across the Tabula crates.
//!
//! Library operations return these typed errors; the lenient wrappers in
//! `tabula-store` and `tabula-sheet` log them and degrade to empty results.

use std::path::PathBuf;
use thiserror::Error;

/// Blob persistence error.
#[derive(Debug, Error)]
pub enum BlobError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Payload was not valid base64.
    #[error("Invalid base64 payload: {message}")]
    Decode { message: String },

    /// Source file name has no extension to carry over.
    #[error("File name has no extension: {name}")]
    MissingExtension { name: String },

    /// Source file does not exist.
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },
}

impl BlobError {
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Spreadsheet codec error.
#[derive(Debug, Error)]
pub enum SheetError {
    /// The codec failed to render the table.
    #[error("failed to write sheet '{sheet}': {message}")]
    Write { sheet: String, message: String },

    /// The buffer could not be opened as a workbook.
    #[error("failed to open workbook: {message}")]
    Open { message: String },

    /// The workbook has no sheets.
    #[error("workbook contains no sheets")]
    EmptyWorkbook,
}

/// A single cell could not be converted to text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cell ({row}, {column}) could not be read: {reason}")]
pub struct CellError {
    pub row: u32,
    pub column: u32,
    pub reason: String,
}

/// Export failure, classified by where it happened.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to export.
    #[error("Can not export data of empty list")]
    EmptyCollection,

    /// A record does not line up with the column set.
    #[error("record {row} has {found} fields but {expected} columns were expected")]
    HeaderMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The output directory could not be created.
    #[error("Failed to create directory: {path}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The sheet codec failed.
    #[error(transparent)]
    Sheet(#[from] SheetError),

    /// The rendered workbook could not be written.
    #[error(transparent)]
    Write(#[from] BlobError),
}

impl ExportError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyCollection => "Can not export data of empty list".to_string(),
            Self::HeaderMismatch {
                row,
                expected,
                found,
            } => format!(
                "Row {} has {} values but the header row has {} columns",
                row + 1,
                found,
                expected
            ),
            Self::CreateDirectory { path, .. } => {
                format!("Could not create the folder {}", path.display())
            }
            Self::Sheet(err) => format!("Could not build the spreadsheet: {err}"),
            Self::Write(err) => format!("Could not save the spreadsheet: {err}"),
        }
    }

    /// Validation failures abort before any I/O happens.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyCollection | Self::HeaderMismatch { .. })
    }
}

/// Import failure before any row could be scanned.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Decode(#[from] BlobError),

    #[error(transparent)]
    Sheet(#[from] SheetError),
}

/// Outbound fetch error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// Request could not be sent or the connection failed.
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// Server answered with a non-success status.
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Body could not be read as text.
    #[error("failed to read response body from {url}: {message}")]
    Body { url: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BlobError::NotFound {
            path: PathBuf::from("/path/to/file.txt"),
        };
        assert_eq!(err.to_string(), "File not found: /path/to/file.txt");
    }

    #[test]
    fn test_export_error_classification() {
        assert!(ExportError::EmptyCollection.is_validation());
        let io = ExportError::Write(BlobError::io(
            "write",
            "/tmp/x",
            std::io::Error::other("disk full"),
        ));
        assert!(!io.is_validation());
        assert_eq!(io.to_string(), "Failed to write file: /tmp/x");
    }

    #[test]
    fn test_header_mismatch_message_is_one_based() {
        let err = ExportError::HeaderMismatch {
            row: 0,
            expected: 2,
            found: 3,
        };
        assert_eq!(
            err.user_message(),
            "Row 1 has 3 values but the header row has 2 columns"
        );
    }
}
