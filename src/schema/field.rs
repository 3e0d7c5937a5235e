use serde::{Deserialize, Serialize};

use crate::core::FieldType;

/// One field of a schema. Identity is `name`; a definition is only replaced
/// wholesale through an explicit upsert.
///
/// `widget` is a presentation hint (`""`, `"textarea"`, `"text"`) and is
/// always materialized as a literal string so present-vs-absent carries no
/// meaning. A missing `widget` on deserialization reads as `""`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    #[serde(default)]
    pub widget: String,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            widget: String::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn widget(mut self, widget: impl Into<String>) -> Self {
        self.widget = widget.into();
        self
    }
}
