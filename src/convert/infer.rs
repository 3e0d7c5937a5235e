//! Schema inference from a sample record.
//!
//! Inspects a single representative JSON object and proposes a field
//! definition per key. Inference is deliberately shallow: one sample, no
//! cross-record type widening, nothing ever marked required.

use serde_json::Value as JsonValue;

use crate::core::{FieldType, Record};
use crate::schema::{FieldDefinition, Schema};

/// String values longer than this get the textarea widget hint.
const TEXTAREA_THRESHOLD: usize = 50;

/// Propose a schema for a sample. An array sample is represented by its
/// first element; anything that is not a JSON object (null, scalar, empty
/// array) yields an empty schema rather than an error.
pub fn infer_schema(sample: &JsonValue) -> Schema {
    let object = match sample {
        JsonValue::Object(map) => Some(map),
        JsonValue::Array(items) => items.first().and_then(JsonValue::as_object),
        _ => None,
    };

    match object {
        Some(record) => infer_record_schema(record),
        None => Schema::default(),
    }
}

/// Propose a schema for one record, fields in the record's own key order.
pub fn infer_record_schema(record: &Record) -> Schema {
    let fields = record
        .iter()
        .map(|(key, value)| {
            let field_type = infer_field_type(value);
            let mut field = FieldDefinition::new(key.clone(), field_type);
            if let Some(widget) = suggest_widget(field_type, value) {
                field = field.widget(widget);
            }
            field
        })
        .collect();

    Schema::new(fields)
}

/// Type priority: boolean, number, list, then string as the fallback that
/// also covers null and nested objects.
fn infer_field_type(value: &JsonValue) -> FieldType {
    match value {
        JsonValue::Bool(_) => FieldType::Boolean,
        JsonValue::Number(_) => FieldType::Number,
        JsonValue::Array(_) => FieldType::List,
        _ => FieldType::String,
    }
}

fn suggest_widget(field_type: FieldType, value: &JsonValue) -> Option<&'static str> {
    if field_type == FieldType::String {
        if let Some(s) = value.as_str() {
            if s.chars().count() > TEXTAREA_THRESHOLD {
                return Some("textarea");
            }
        }
    }
    None
}
