//! JSON text boundary.
//!
//! Raw text is parsed here, before anything reaches the conversion core;
//! the core itself never sees unparsed input. Accepted shapes are a single
//! JSON object (promoted to a one-element sequence) or an array of objects.
//! Every parse or shape problem surfaces as the one generic import failure.

use serde_json::Value as JsonValue;

use crate::core::{GridError, Record, Result};
use crate::schema::Schema;

pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    let parsed: JsonValue = serde_json::from_str(text)?;

    match parsed {
        JsonValue::Object(record) => Ok(vec![record]),
        JsonValue::Array(items) => items
            .into_iter()
            .map(|item| match item {
                JsonValue::Object(record) => Ok(record),
                other => Err(GridError::ImportFailed(format!(
                    "expected an array of objects, found element: {}",
                    other
                ))),
            })
            .collect(),
        other => Err(GridError::ImportFailed(format!(
            "expected a JSON object or an array of objects, found: {}",
            other
        ))),
    }
}

/// Serialize a record sequence. Output is UTF-8 with non-ASCII characters
/// preserved as-is.
pub fn records_to_json(records: &[Record], pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    }
    .map_err(|e| GridError::ExportFailed(e.to_string()))
}

/// Serialize one record bare (not wrapped in an array).
pub fn record_to_json(record: &Record, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(record)
    } else {
        serde_json::to_string(record)
    }
    .map_err(|e| GridError::ExportFailed(e.to_string()))
}

/// Serialize a schema as its array of field definitions.
pub fn schema_to_json(schema: &Schema) -> Result<String> {
    serde_json::to_string_pretty(schema).map_err(|e| GridError::ExportFailed(e.to_string()))
}
