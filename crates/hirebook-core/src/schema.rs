pub mod db;

mod mapping;
pub use mapping::{ColumnMapping, MappedField, UnknownFields};
