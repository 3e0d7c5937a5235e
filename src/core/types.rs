use std::fmt;

use serde::{Deserialize, Serialize};

use super::{GridError, Result, Value};

/// One tabular row, cells in column order.
pub type Row = Vec<Value>;

/// JSON-side representation of one record. Key order is preserved
/// (serde_json `preserve_order`).
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Declared type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    List,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::List => write!(f, "list"),
        }
    }
}

/// Tabular view of a record sequence: named columns in schema order,
/// rows of cells. A Table built for a schema always carries exactly the
/// schema's field names as columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Empty table whose columns are the given names.
    pub fn with_columns(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)
    }

    /// Append a row of blank cells.
    pub fn push_row(&mut self) -> usize {
        self.rows
            .push(vec![Value::Text(String::new()); self.columns.len()]);
        self.rows.len() - 1
    }

    pub fn set_cell(&mut self, row: usize, column: &str, value: Value) -> Result<()> {
        let idx = self
            .column_index(column)
            .ok_or_else(|| GridError::InvalidCell(format!("column '{}'", column)))?;
        let cells = self
            .rows
            .get_mut(row)
            .ok_or_else(|| GridError::InvalidCell(format!("row {}", row)))?;
        cells[idx] = value;
        Ok(())
    }

    /// Re-shape the table onto a new column list, carrying cell data over by
    /// column name. Columns that disappeared are dropped; new columns get
    /// blank cells.
    pub fn realign(&mut self, columns: Vec<String>) {
        if self.columns == columns {
            return;
        }

        let mapping: Vec<Option<usize>> = columns
            .iter()
            .map(|name| self.column_index(name))
            .collect();

        let rows = self
            .rows
            .iter()
            .map(|row| {
                mapping
                    .iter()
                    .map(|source| match source {
                        Some(idx) => row.get(*idx).cloned().unwrap_or(Value::Text(String::new())),
                        None => Value::Text(String::new()),
                    })
                    .collect()
            })
            .collect();

        self.columns = columns;
        self.rows = rows;
    }
}
