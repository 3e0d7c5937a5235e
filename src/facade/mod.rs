//! High-level editing session API.
//!
//! Implements the Facade pattern over the schema store and the conversion
//! engines: one owned session object plus the JSON text boundary (parsing
//! accepted input shapes, pretty serialization).
//!
//! - `boundary.rs` - JSON text in/out
//! - `editor.rs` - session facade (JsonEditor)

mod boundary;
mod editor;

pub use boundary::{parse_records, record_to_json, records_to_json, schema_to_json};
pub use editor::{EditorConfig, ExportFormat, ImportMode, JsonEditor};
