//! Schema metadata: field definitions, ordered schemas, and the store
//! that owns them.
//!
//! - `field.rs` - single field definition (name, type, required, widget)
//! - `schema.rs` - ordered field sequence with structural mutation
//! - `store.rs` - name -> schema mapping (SchemaStore)

mod field;
mod schema;
mod store;

pub use field::FieldDefinition;
pub use schema::Schema;
pub use store::{DEFAULT_SCHEMA_NAME, SchemaBase, SchemaStore};
