use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Schema '{0}' already exists")]
    DuplicateSchema(String),

    #[error("Schema '{0}' not found")]
    SchemaNotFound(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("No such cell: {0}")]
    InvalidCell(String),

    #[error("Import failed: {0}")]
    ImportFailed(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),
}

pub type Result<T> = std::result::Result<T, GridError>;

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        Self::ImportFailed(err.to_string())
    }
}
