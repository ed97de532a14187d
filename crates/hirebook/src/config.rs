use crate::{Db, Error, Result};

use hirebook_core::schema::UnknownFields;

/// Settings read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `HIREBOOK_DATABASE_URL`
    pub database_url: String,

    /// `HIREBOOK_UNKNOWN_FIELDS`: `reject` (default) or `passthrough`.
    pub unknown_fields: UnknownFields,
}

const DATABASE_URL: &str = "HIREBOOK_DATABASE_URL";
const UNKNOWN_FIELDS: &str = "HIREBOOK_UNKNOWN_FIELDS";

impl Config {
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let database_url = lookup(DATABASE_URL)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| Error::invalid_connection_url(format!("{DATABASE_URL} is not set")))?;

        let unknown_fields = match lookup(UNKNOWN_FIELDS).as_deref() {
            None | Some("") | Some("reject") => UnknownFields::Reject,
            Some("passthrough") => UnknownFields::Passthrough,
            Some(other) => {
                return Err(hirebook_core::err!(
                    "invalid {UNKNOWN_FIELDS}: `{other}`; expected `reject` or `passthrough`"
                ))
            }
        };

        Ok(Config {
            database_url,
            unknown_fields,
        })
    }

    pub async fn connect(&self) -> Result<Db> {
        Db::builder()
            .unknown_fields(self.unknown_fields)
            .connect(&self.database_url)
            .await
    }
}
