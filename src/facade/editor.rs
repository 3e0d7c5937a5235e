//! Editing session facade.
//!
//! Owns the schema store, the active schema selection, and the table being
//! edited, and strings the conversion engines together the way an
//! interactive editor drives them: import JSON -> infer or merge schema ->
//! project to table -> edit cells -> reconstruct -> export JSON.
//!
//! The session owns all of its state; there is no ambient or shared global.

use log::info;

use crate::convert::{infer_record_schema, to_records, to_table};
use crate::core::{Record, Result, Table, Value};
use crate::schema::{DEFAULT_SCHEMA_NAME, FieldDefinition, Schema, SchemaBase, SchemaStore};

use super::boundary::{parse_records, record_to_json, records_to_json, schema_to_json};

/// Session behavior knobs.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Pretty-print exported JSON.
    pub pretty_export: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            pretty_export: true,
        }
    }
}

/// What a JSON import is allowed to touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Infer a schema from the first record: an empty active schema adopts
    /// it wholesale, a non-empty one only gains genuinely new fields.
    SchemaAndData,
    /// Leave the schema alone, only load the data.
    DataOnly,
}

/// Shape of exported JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Always an array of records.
    Array,
    /// A lone record exports bare; anything else falls back to the array.
    SingleObject,
}

/// One editing session over schema-shaped JSON data.
///
/// # Examples
///
/// ```
/// use jsongrid::{ExportFormat, ImportMode, JsonEditor};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut editor = JsonEditor::new();
/// editor.import_json(r#"[{"name": "alpha", "count": 2}]"#, ImportMode::SchemaAndData)?;
///
/// let json = editor.export_json(ExportFormat::Array)?;
/// assert!(json.contains("alpha"));
/// # Ok(())
/// # }
/// ```
pub struct JsonEditor {
    store: SchemaStore,
    active: String,
    table: Table,
    config: EditorConfig,
}

impl JsonEditor {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let store = SchemaStore::new();
        let columns = match store.get(DEFAULT_SCHEMA_NAME) {
            Ok(schema) => schema.field_names(),
            Err(_) => Vec::new(),
        };

        Self {
            store,
            active: DEFAULT_SCHEMA_NAME.to_string(),
            table: Table::with_columns(columns),
            config,
        }
    }

    // ==================== Schema control ====================

    pub fn store(&self) -> &SchemaStore {
        &self.store
    }

    pub fn active_schema_name(&self) -> &str {
        &self.active
    }

    pub fn active_schema(&self) -> Result<&Schema> {
        self.store.get(&self.active)
    }

    pub fn schema_names(&self) -> Vec<&str> {
        self.store.schema_names()
    }

    /// Switch the session to another schema. The held table is re-aligned
    /// to the new schema's columns, carrying cell data over by name.
    pub fn set_active_schema(&mut self, name: &str) -> Result<()> {
        self.store.get(name)?;
        self.active = name.to_string();
        self.sync_table()
    }

    /// Create a schema and make it the active one.
    pub fn create_schema(&mut self, name: &str, base: SchemaBase<'_>) -> Result<()> {
        self.store.create_schema(name, base)?;
        self.active = name.to_string();
        self.sync_table()
    }

    pub fn upsert_field(&mut self, field: FieldDefinition) -> Result<()> {
        self.store.upsert_field(&self.active, field)?;
        self.sync_table()
    }

    pub fn delete_field(&mut self, field_name: &str) -> Result<()> {
        self.store.delete_field(&self.active, field_name)?;
        self.sync_table()
    }

    // ==================== Import ====================

    /// Parse JSON text (one object or an array of objects) and load it into
    /// the session table; `SchemaAndData` mode also evolves the active
    /// schema from the first record. Returns the number of records loaded.
    pub fn import_json(&mut self, text: &str, mode: ImportMode) -> Result<usize> {
        let records = parse_records(text)?;

        if mode == ImportMode::SchemaAndData {
            let inferred = records
                .first()
                .map(infer_record_schema)
                .unwrap_or_default();

            if self.active_schema()?.is_empty() {
                self.store.replace_schema(&self.active, inferred)?;
            } else {
                self.store.merge_inferred_fields(&self.active, inferred)?;
            }
        }

        let table = to_table(&records, self.active_schema()?);
        self.table = table;

        info!(
            "imported {} record(s) into schema '{}'",
            self.table.row_count(),
            self.active
        );
        Ok(self.table.row_count())
    }

    // ==================== Editing surface ====================

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    /// Append a blank row; returns its index.
    pub fn push_row(&mut self) -> usize {
        self.table.push_row()
    }

    pub fn set_cell(&mut self, row: usize, column: &str, value: impl Into<Value>) -> Result<()> {
        self.table.set_cell(row, column, value.into())
    }

    // ==================== Export ====================

    /// Reconstruct the edited table back into records.
    pub fn export_records(&self) -> Result<Vec<Record>> {
        Ok(to_records(&self.table, self.active_schema()?))
    }

    pub fn export_json(&self, format: ExportFormat) -> Result<String> {
        let records = self.export_records()?;
        info!(
            "exporting {} record(s) from schema '{}'",
            records.len(),
            self.active
        );

        match format {
            ExportFormat::SingleObject if records.len() == 1 => {
                record_to_json(&records[0], self.config.pretty_export)
            }
            _ => records_to_json(&records, self.config.pretty_export),
        }
    }

    /// Serialize the active schema's field definitions.
    pub fn export_schema_json(&self) -> Result<String> {
        schema_to_json(self.active_schema()?)
    }

    fn sync_table(&mut self) -> Result<()> {
        let columns = self.store.get(&self.active)?.field_names();
        self.table.realign(columns);
        Ok(())
    }
}

impl Default for JsonEditor {
    fn default() -> Self {
        Self::new()
    }
}
