use std::collections::HashMap;

use log::debug;

use crate::core::{FieldType, GridError, Result};

use super::{FieldDefinition, Schema};

/// Name of the schema every store starts out with.
pub const DEFAULT_SCHEMA_NAME: &str = "Default";

/// Starting point for a newly created schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaBase<'a> {
    Empty,
    /// Deep value copy of an existing schema; the copy and the source evolve
    /// independently afterwards.
    CopyOf(&'a str),
}

/// Owns every schema, keyed by unique name. Schemas are added or copied but
/// never deleted; field-level mutation is addressed by schema name.
#[derive(Debug, Clone)]
pub struct SchemaStore {
    schemas: HashMap<String, Schema>,
}

impl SchemaStore {
    /// Store seeded with the `"Default"` schema: a required `name` field and
    /// an optional `value` field, both strings.
    pub fn new() -> Self {
        let default_schema = Schema::new(vec![
            FieldDefinition::new("name", FieldType::String).required(),
            FieldDefinition::new("value", FieldType::String),
        ]);

        let mut schemas = HashMap::new();
        schemas.insert(DEFAULT_SCHEMA_NAME.to_string(), default_schema);
        Self { schemas }
    }

    pub fn create_schema(&mut self, name: &str, base: SchemaBase<'_>) -> Result<()> {
        validate_name(name, "schema")?;

        if self.schemas.contains_key(name) {
            return Err(GridError::DuplicateSchema(name.to_string()));
        }

        let schema = match base {
            SchemaBase::Empty => Schema::default(),
            SchemaBase::CopyOf(source) => self.get(source)?.clone(),
        };

        debug!("creating schema '{}' ({} field(s))", name, schema.field_count());
        self.schemas.insert(name.to_string(), schema);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&Schema> {
        self.schemas
            .get(name)
            .ok_or_else(|| GridError::SchemaNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// All schema names, sorted for deterministic listing.
    pub fn schema_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Replace or append the named field, preserving its position on
    /// replacement. The widget string is stored literally, empty or not.
    pub fn upsert_field(&mut self, schema_name: &str, field: FieldDefinition) -> Result<()> {
        validate_name(&field.name, "field")?;

        let schema = self.get_schema_mut(schema_name)?;
        debug!("upserting field '{}' into schema '{}'", field.name, schema_name);
        schema.upsert(field);
        Ok(())
    }

    /// Remove a field if present; absent fields are not an error.
    pub fn delete_field(&mut self, schema_name: &str, field_name: &str) -> Result<()> {
        let schema = self.get_schema_mut(schema_name)?;
        if schema.delete(field_name) {
            debug!("deleted field '{}' from schema '{}'", field_name, schema_name);
        }
        Ok(())
    }

    /// Append only the genuinely new fields of an inferred schema, so
    /// importing JSON never clobbers manual edits.
    pub fn merge_inferred_fields(&mut self, schema_name: &str, inferred: Schema) -> Result<()> {
        let schema = self.get_schema_mut(schema_name)?;
        let before = schema.field_count();
        schema.merge(inferred);
        debug!(
            "merged {} new field(s) into schema '{}'",
            schema.field_count() - before,
            schema_name
        );
        Ok(())
    }

    /// Swap out a schema's entire field sequence. Used when adopting an
    /// inference wholesale into an empty schema.
    pub fn replace_schema(&mut self, schema_name: &str, schema: Schema) -> Result<()> {
        let slot = self.get_schema_mut(schema_name)?;
        *slot = schema;
        Ok(())
    }

    fn get_schema_mut(&mut self, name: &str) -> Result<&mut Schema> {
        self.schemas
            .get_mut(name)
            .ok_or_else(|| GridError::SchemaNotFound(name.to_string()))
    }
}

impl Default for SchemaStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_name(name: &str, kind: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(GridError::InvalidName(format!(
            "{} name cannot be empty",
            kind
        )));
    }
    Ok(())
}
