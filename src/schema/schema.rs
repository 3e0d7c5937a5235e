use serde::{Deserialize, Serialize};

use super::FieldDefinition;

/// Ordered sequence of field definitions. Insertion order defines column
/// order; field names are unique within a schema (the mutation methods keep
/// that invariant).
///
/// Serializes transparently as the array of field objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: Vec<FieldDefinition>,
}

impl Schema {
    pub fn new(fields: Vec<FieldDefinition>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn find_field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.find_field_index(name).map(|idx| &self.fields[idx])
    }

    /// Replace an existing field in place (position preserved) or append a
    /// new one at the end.
    pub fn upsert(&mut self, field: FieldDefinition) {
        match self.find_field_index(&field.name) {
            Some(idx) => self.fields[idx] = field,
            None => self.fields.push(field),
        }
    }

    /// Remove the field with that name. Absent names are a no-op; returns
    /// whether anything was removed.
    pub fn delete(&mut self, name: &str) -> bool {
        match self.find_field_index(name) {
            Some(idx) => {
                self.fields.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Append every field of `other` whose name is not already present.
    /// Existing definitions and their positions are untouched.
    pub fn merge(&mut self, other: Schema) {
        for field in other.fields {
            if self.find_field_index(&field.name).is_none() {
                self.fields.push(field);
            }
        }
    }
}
