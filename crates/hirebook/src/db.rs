mod builder;
pub use builder::Builder;

mod connect;
pub use connect::Connect;

use crate::{schema, Result};

use hirebook_core::{
    driver::{operation::QuerySql, Capability, Connection, Driver, Operation},
    schema::UnknownFields,
    stmt::{Type, ValueRecord},
};
use hirebook_sql::{Serializer, Statement};
use tokio::sync::Mutex;

use std::sync::Arc;

/// Shared state between all `Db` clones.
#[derive(Debug)]
pub(crate) struct Shared {
    driver: Box<dyn Driver>,

    /// The statements of one operation run one after another on this
    /// connection; nothing spans them in a transaction.
    connection: Mutex<Box<dyn Connection>>,

    serializer: Serializer,

    unknown_fields: UnknownFields,
}

/// A database handle.
///
/// Cloning is cheap; all clones share one connection.
#[derive(Debug, Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects with the default configuration. See [`Builder::connect`].
    pub async fn connect(url: &str) -> Result<Db> {
        Db::builder().connect(url).await
    }

    /// The connection URL, with credentials omitted.
    pub fn url(&self) -> String {
        self.shared.driver.url().into_owned()
    }

    pub fn capability(&self) -> &'static Capability {
        self.shared.serializer.capability()
    }

    /// Creates the tables backing every resource, if they do not exist.
    pub async fn push_schema(&self) -> Result<()> {
        let schema = schema::db();
        tracing::debug!(tables = schema.tables.len(), "pushing schema");
        self.shared
            .connection
            .lock()
            .await
            .push_schema(&schema)
            .await
    }

    pub(crate) fn serializer(&self) -> Serializer {
        self.shared.serializer
    }

    pub(crate) fn unknown_fields(&self) -> UnknownFields {
        self.shared.unknown_fields
    }

    /// Runs a statement that returns rows with the given column types.
    pub(crate) async fn query(&self, stmt: Statement, ret: &[Type]) -> Result<Vec<ValueRecord>> {
        let response = self.exec(stmt.query(ret.to_vec())).await?;
        response.rows.into_values()
    }

    /// Runs a statement and returns its first row, if any.
    pub(crate) async fn query_first(
        &self,
        stmt: Statement,
        ret: &[Type],
    ) -> Result<Option<ValueRecord>> {
        Ok(self.query(stmt, ret).await?.into_iter().next())
    }

    async fn exec(&self, op: QuerySql) -> Result<hirebook_core::driver::Response> {
        tracing::debug!(sql = %op.sql, params = op.params.len(), "exec");

        let mut connection = self.shared.connection.lock().await;
        connection.exec(Operation::QuerySql(op)).await
    }
}
