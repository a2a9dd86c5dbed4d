//! Import results as pipe-delimited row strings.
//!
//! Each cell is followed by `|`, so a row of `["x", "1"]` becomes `x|1|`.
//! Cell values are not escaped: a value that itself contains `|` cannot be
//! split back into its original columns unambiguously.

use serde::{Deserialize, Serialize};

/// Separator written after every cell of an imported row.
pub const ROW_DELIMITER: char = '|';

/// Rows read from a sheet plus the 1-based indices of rows that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
    pub rows: Vec<String>,
    pub failed_rows: Vec<u32>,
}

impl ImportResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.failed_rows.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed_rows.is_empty()
    }
}

/// Join cells with a trailing delimiter after each one.
pub fn join_row<I, S>(cells: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for cell in cells {
        line.push_str(cell.as_ref());
        line.push(ROW_DELIMITER);
    }
    line
}

/// Split a joined row back into cells.
///
/// Only exact when no cell contained the delimiter.
pub fn split_row(line: &str) -> Vec<&str> {
    let body = line.strip_suffix(ROW_DELIMITER).unwrap_or(line);
    if body.is_empty() && line.is_empty() {
        return Vec::new();
    }
    body.split(ROW_DELIMITER).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_adds_trailing_delimiter() {
        assert_eq!(join_row(["x", "1"]), "x|1|");
        assert_eq!(join_row(["", ""]), "||");
        assert_eq!(join_row(Vec::<String>::new()), "");
    }

    #[test]
    fn split_reverses_join_without_embedded_delimiters() {
        assert_eq!(split_row("x|1|"), vec!["x", "1"]);
        assert_eq!(split_row("||"), vec!["", ""]);
        assert!(split_row("").is_empty());
    }

    #[test]
    fn embedded_delimiter_is_ambiguous() {
        let line = join_row(["a|b", "c"]);
        assert_eq!(split_row(&line), vec!["a", "b", "c"]);
    }
}
