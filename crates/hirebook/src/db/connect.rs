use crate::{Error, Result};

use hirebook_core::{
    async_trait,
    driver::{Capability, Connection, Driver},
};

use std::borrow::Cow;
use url::Url;

/// A driver chosen by connection URL scheme.
#[derive(Debug)]
pub struct Connect {
    driver: Box<dyn Driver>,
}

impl Connect {
    pub fn new(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

        let driver = match parsed.scheme() {
            "postgresql" | "postgres" => connect_postgresql(url)?,
            "sqlite" => connect_sqlite(url)?,
            scheme => {
                return Err(Error::invalid_connection_url(format!(
                    "unsupported database; scheme={scheme}; url={parsed}"
                )))
            }
        };

        Ok(Self { driver })
    }
}

#[async_trait]
impl Driver for Connect {
    fn url(&self) -> Cow<'_, str> {
        self.driver.url()
    }

    fn capability(&self) -> &'static Capability {
        self.driver.capability()
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        self.driver.connect().await
    }
}

#[cfg(feature = "postgresql")]
fn connect_postgresql(url: &str) -> Result<Box<dyn Driver>> {
    let driver = hirebook_driver_postgresql::PostgreSQL::new(url)?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "postgresql"))]
fn connect_postgresql(_url: &str) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url("`postgresql` feature not enabled"))
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<Box<dyn Driver>> {
    let driver = hirebook_driver_sqlite::Sqlite::new(url)?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(_url: &str) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url("`sqlite` feature not enabled"))
}
