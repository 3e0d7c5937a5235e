pub mod error;
pub mod types;
pub mod value;

pub use error::{GridError, Result};
pub use types::{FieldType, Record, Row, Table};
pub use value::Value;
