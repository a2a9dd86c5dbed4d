//! JSON input for the export command.

use anyhow::{Context, Result, bail};
use serde_json::Value;

use tabula_model::Field;

/// Parse a JSON array of flat objects into field lists, keeping key order.
///
/// Strings are taken verbatim, `null` becomes an empty cell, and every other
/// value uses its JSON text.
pub fn records_from_json(text: &str) -> Result<Vec<Vec<Field>>> {
    let value: Value = serde_json::from_str(text).context("parse records JSON")?;
    let Value::Array(items) = value else {
        bail!("expected a JSON array of objects");
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(map
                .into_iter()
                .map(|(name, value)| Field::new(name, cell_text(&value)))
                .collect::<Vec<Field>>()),
            other => bail!("item {index} is not an object: {other}"),
        })
        .collect()
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
