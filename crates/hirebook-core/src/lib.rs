#[macro_use]
mod macros;

pub mod driver;
pub use driver::{Connection, Driver};

mod error;
pub use error::Error;

pub mod policy;

pub mod schema;
pub use schema::ColumnMapping;

pub mod stmt;

/// A Result type alias that uses Hirebook's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
