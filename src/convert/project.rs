//! JSON -> table projection.
//!
//! Shapes a record sequence into the tabular edit surface. This transform is
//! presentation-only: list values are joined into editable strings, every
//! other value passes through untouched (numbers stay numbers, booleans stay
//! booleans).

use log::debug;
use serde_json::Value as JsonValue;

use crate::core::{FieldType, Record, Row, Table, Value};
use crate::schema::Schema;

/// Separator used when joining list elements into one editable cell.
const LIST_SEPARATOR: &str = ", ";

/// Per-record transform: join declared-list array values into a single
/// string. Keys the schema does not declare are preserved on the record;
/// they just never become table columns.
pub fn project_record(record: &Record, schema: &Schema) -> Record {
    record
        .iter()
        .map(|(key, value)| {
            let declared_list = schema
                .get_field(key)
                .map(|f| f.field_type == FieldType::List)
                .unwrap_or(false);

            let projected = match value {
                JsonValue::Array(items) if declared_list => {
                    let joined: Vec<String> = items
                        .iter()
                        .map(|item| Value::from_json(item).to_string())
                        .collect();
                    JsonValue::String(joined.join(LIST_SEPARATOR))
                }
                other => other.clone(),
            };

            (key.clone(), projected)
        })
        .collect()
}

/// Lay a record sequence out under exactly the schema's field names, in
/// schema order. Fields absent from a record become empty-string cells.
pub fn to_table(records: &[Record], schema: &Schema) -> Table {
    let rows: Vec<Row> = records
        .iter()
        .map(|record| {
            let projected = project_record(record, schema);
            schema
                .fields()
                .iter()
                .map(|field| match projected.get(&field.name) {
                    Some(value) => Value::from_json(value),
                    None => Value::Text(String::new()),
                })
                .collect()
        })
        .collect();

    debug!(
        "projected {} record(s) onto {} column(s)",
        rows.len(),
        schema.field_count()
    );
    Table::new(schema.field_names(), rows)
}
