mod capability;
pub use capability::{Capability, PlaceholderStyle, StorageTypes};

mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::{async_trait, schema::db::Schema};

use std::{borrow::Cow, fmt::Debug};

/// A storage backend that can hand out connections.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// The URL this driver connects to, with credentials omitted.
    fn url(&self) -> Cow<'_, str>;

    /// Describes the dialect spoken by connections from this driver.
    fn capability(&self) -> &'static Capability;

    /// Opens a new connection.
    async fn connect(&self) -> crate::Result<Box<dyn Connection>>;
}

/// A single connection to the storage backend.
///
/// Every call to [`Connection::exec`] is one independent round trip; no
/// transaction spans multiple operations.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    fn capability(&self) -> &'static Capability;

    /// Execute a database operation
    async fn exec(&mut self, op: Operation) -> crate::Result<Response>;

    /// Creates the tables described by `schema` when they do not exist yet.
    async fn push_schema(&mut self, schema: &Schema) -> crate::Result<()>;
}
