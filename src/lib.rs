// ============================================================================
// jsongrid Library
// ============================================================================
//
// Schema-driven bidirectional JSON <-> table conversion: infer a schema from
// sample JSON, evolve it field by field, project records onto a tabular edit
// surface, and reconstruct JSON from the table with lenient type coercion.

pub mod convert;
pub mod core;
pub mod facade;
pub mod schema;

// Re-export main types for convenience
pub use crate::core::{FieldType, GridError, Record, Result, Row, Table, Value};
pub use crate::schema::{DEFAULT_SCHEMA_NAME, FieldDefinition, Schema, SchemaBase, SchemaStore};

// Conversion engine entry points
pub use crate::convert::{infer_record_schema, infer_schema, project_record, to_records, to_table};

// Session facade and JSON text boundary
pub use crate::facade::{
    EditorConfig, ExportFormat, ImportMode, JsonEditor, parse_records, record_to_json,
    records_to_json, schema_to_json,
};
