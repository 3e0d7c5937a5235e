//! Table -> JSON reconstruction with type coercion.
//!
//! The inverse of projection: rebuilds records from table rows, coercing
//! every cell to its field's declared type. Coercion is total and lenient —
//! malformed input never blocks reconstruction, it degrades to the type's
//! zero value (`""`, `0`, `false`, `[]`).

use log::{debug, warn};
use serde_json::Value as JsonValue;

use crate::core::{FieldType, Record, Row, Table, Value};
use crate::schema::Schema;

/// Strings (lowercased) that coerce to `true`. Everything else is `false`.
const TRUTHY_VALUES: [&str; 4] = ["true", "yes", "1", "y"];

/// Rebuild records from a table. Rows whose every cell is blank are skipped
/// entirely; each retained row yields a record with exactly the schema's
/// fields, in schema order.
pub fn to_records(table: &Table, schema: &Schema) -> Vec<Record> {
    let records: Vec<Record> = table
        .rows()
        .iter()
        .filter(|row| !is_blank_row(row))
        .map(|row| reconstruct_row(row, table, schema))
        .collect();

    debug!(
        "reconstructed {} record(s) from {} row(s)",
        records.len(),
        table.row_count()
    );
    records
}

fn is_blank_row(row: &Row) -> bool {
    row.iter().all(Value::is_blank)
}

fn reconstruct_row(row: &Row, table: &Table, schema: &Schema) -> Record {
    let mut record = Record::new();

    for field in schema.fields() {
        let cell = table
            .column_index(&field.name)
            .and_then(|idx| row.get(idx));

        let value = match cell {
            Some(cell) if !cell.is_blank() => coerce(cell, field.field_type),
            _ => blank_default(field.field_type),
        };

        record.insert(field.name.clone(), value);
    }

    record
}

fn blank_default(field_type: FieldType) -> JsonValue {
    match field_type {
        FieldType::String => JsonValue::String(String::new()),
        FieldType::Number => JsonValue::from(0),
        FieldType::Boolean => JsonValue::Bool(false),
        FieldType::List => JsonValue::Array(Vec::new()),
    }
}

fn coerce(cell: &Value, field_type: FieldType) -> JsonValue {
    match field_type {
        FieldType::String => JsonValue::String(cell.to_string()),
        FieldType::Number => coerce_number(cell),
        FieldType::Boolean => coerce_boolean(cell),
        FieldType::List => coerce_list(cell),
    }
}

fn coerce_number(cell: &Value) -> JsonValue {
    match cell {
        Value::Integer(i) => JsonValue::from(*i),
        Value::Float(f) => narrow_number(*f),
        Value::Boolean(b) => JsonValue::from(i64::from(*b)),
        other => match other.to_string().trim().parse::<f64>() {
            Ok(parsed) => narrow_number(parsed),
            Err(_) => {
                warn!("unparseable number cell '{}', defaulting to 0", other);
                JsonValue::from(0)
            }
        },
    }
}

/// Narrow a float with zero fractional part down to an integer, so `3.0`
/// exports as `3`. Values outside the i64 range stay floats; non-finite
/// values degrade to 0 like any other unusable number.
fn narrow_number(f: f64) -> JsonValue {
    if !f.is_finite() {
        warn!("non-finite number cell, defaulting to 0");
        return JsonValue::from(0);
    }

    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        JsonValue::from(f as i64)
    } else {
        serde_json::Number::from_f64(f)
            .map(JsonValue::Number)
            .unwrap_or_else(|| JsonValue::from(0))
    }
}

fn coerce_boolean(cell: &Value) -> JsonValue {
    match cell {
        Value::Boolean(b) => JsonValue::Bool(*b),
        other => {
            let lowered = other.to_string().to_lowercase();
            JsonValue::Bool(TRUTHY_VALUES.contains(&lowered.as_str()))
        }
    }
}

fn coerce_list(cell: &Value) -> JsonValue {
    let elements: Vec<JsonValue> = cell
        .to_string()
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| JsonValue::String(piece.to_string()))
        .collect();
    JsonValue::Array(elements)
}
