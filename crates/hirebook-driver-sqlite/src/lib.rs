mod value;
pub(crate) use value::Value;

use hirebook_core::{
    async_trait,
    driver::{operation::Operation, Capability, Driver, Response},
    schema::db::{Schema, Table},
    stmt, Error, Result,
};
use hirebook_sql::Serializer;
use rusqlite::{ffi, Connection as RusqliteConnection};
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    /// Every in-memory connection is a fresh, empty database.
    async fn connect(&self) -> Result<Box<dyn hirebook_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        tracing::debug!(url = %self.url(), "opened SQLite connection");
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::driver)?;
        Self::init(connection)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver)?;
        Self::init(connection)
    }

    fn init(connection: RusqliteConnection) -> Result<Self> {
        // Foreign keys are off by default in SQLite; the schema relies on
        // them to cascade deletes.
        connection
            .execute_batch("PRAGMA foreign_keys = ON")
            .map_err(Error::driver)?;
        Ok(Self { connection })
    }

    fn create_table(&mut self, table: &Table) -> Result<()> {
        let sql = Serializer::sqlite().create_table(table);

        self.connection
            .execute(&sql, [])
            .map_err(Error::driver)?;
        Ok(())
    }
}

#[async_trait]
impl hirebook_core::driver::Connection for Connection {
    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    async fn exec(&mut self, op: Operation) -> Result<Response> {
        let Operation::QuerySql(op) = op;

        let mut stmt = self
            .connection
            .prepare_cached(&op.sql)
            .map_err(Error::driver)?;

        let params = op
            .params
            .into_iter()
            .map(Value::from)
            .collect::<Vec<_>>();

        let Some(ret_tys) = op.ret else {
            let count = stmt
                .execute(rusqlite::params_from_iter(params.iter()))
                .map_err(driver_error)?;

            return Ok(Response::count(count as _));
        };

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(driver_error)?;

        let mut ret = vec![];

        // Constraint violations of `INSERT ... RETURNING` surface while
        // stepping, not when the statement starts.
        while let Some(row) = rows.next().map_err(driver_error)? {
            let mut items = Vec::with_capacity(ret_tys.len());

            for (index, ty) in ret_tys.iter().enumerate() {
                items.push(Value::from_sql(row, index, *ty)?.into_inner());
            }

            ret.push(stmt::ValueRecord::from_vec(items));
        }

        Ok(Response::values(ret))
    }

    async fn push_schema(&mut self, schema: &Schema) -> Result<()> {
        for table in &schema.tables {
            self.create_table(table)?;
        }

        Ok(())
    }
}

/// Maps a uniqueness violation to [`Error::duplicate_resource`]; everything
/// else is a plain driver error.
fn driver_error(err: rusqlite::Error) -> Error {
    match &err {
        rusqlite::Error::SqliteFailure(failure, message)
            if matches!(
                failure.extended_code,
                ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY
            ) =>
        {
            Error::duplicate_resource(
                message
                    .clone()
                    .unwrap_or_else(|| failure.to_string()),
            )
        }
        _ => Error::driver(err),
    }
}
