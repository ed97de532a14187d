use super::{Connect, Db, Shared};
use crate::Result;

use hirebook_core::{driver::Driver, schema::UnknownFields};
use hirebook_sql::Serializer;
use tokio::sync::Mutex;

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    unknown_fields: UnknownFields,
}

impl Builder {
    /// How update payload keys missing from a resource's column mapping are
    /// handled. Defaults to [`UnknownFields::Reject`].
    pub fn unknown_fields(&mut self, unknown_fields: UnknownFields) -> &mut Self {
        self.unknown_fields = unknown_fields;
        self
    }

    /// Connects to the database named by `url`, picking the driver from the
    /// URL scheme.
    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        self.build(Connect::new(url)?).await
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let connection = driver.connect().await?;
        let serializer = Serializer::new(driver.capability());

        tracing::debug!(url = %driver.url(), unknown_fields = ?self.unknown_fields, "database ready");

        Ok(Db {
            shared: Arc::new(Shared {
                driver: Box::new(driver),
                connection: Mutex::new(connection),
                serializer,
                unknown_fields: self.unknown_fields,
            }),
        })
    }
}
