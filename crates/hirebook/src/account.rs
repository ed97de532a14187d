use crate::{
    posting,
    schema::{ACCOUNTS, APPLICATIONS, POSTINGS},
    Db, Error, Result,
};

use hirebook_core::{
    schema::{ColumnMapping, MappedField, UnknownFields},
    stmt::{Assignments, Type, Value, ValueRecord},
};
use hirebook_sql::{Comma, Ident};
use serde::{Deserialize, Serialize};

use std::collections::HashMap;

/// A user account. The stored password hash is never part of this type;
/// see [`Account::credentials`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,

    /// Ids of the postings the account applied to. Populated by
    /// [`Account::get`] and [`Account::list`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applications: Option<Vec<i64>>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub username: String,

    /// Already hashed.
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl std::fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAccount")
            .field("username", &self.username)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("is_admin", &self.is_admin)
            .finish_non_exhaustive()
    }
}

const COLUMNS: [&str; 5] = ["username", "first_name", "last_name", "email", "is_admin"];

const TYPES: [Type; 5] = [Type::String, Type::String, Type::String, Type::String, Type::Bool];

impl Account {
    /// Fields an administrator may change. A new password must already be
    /// hashed.
    pub const MAPPING: ColumnMapping = ColumnMapping::new(
        "account",
        &[
            MappedField::new("firstName", "first_name", Type::String),
            MappedField::new("lastName", "last_name", Type::String),
            MappedField::new("email", "email", Type::String),
            MappedField::new("isAdmin", "is_admin", Type::Bool),
            MappedField::new("password", "password", Type::String),
        ],
    );

    /// Fields an account owner may change on their own account. The role is
    /// not one of them.
    pub const PROFILE_MAPPING: ColumnMapping = ColumnMapping::new(
        "account",
        &[
            MappedField::new("firstName", "first_name", Type::String),
            MappedField::new("lastName", "last_name", Type::String),
            MappedField::new("email", "email", Type::String),
            MappedField::new("password", "password", Type::String),
        ],
    );

    pub async fn register(db: &Db, new: NewAccount) -> Result<Account> {
        let serializer = db.serializer();

        if exists(db, &new.username).await? {
            return Err(Error::duplicate_resource(format!(
                "duplicate username: {}",
                new.username
            )));
        }

        let values = [
            Value::from(new.username),
            Value::from(new.first_name),
            Value::from(new.last_name),
            Value::from(new.email),
            Value::from(new.is_admin),
            Value::from(new.password),
        ];

        let mut f = serializer.statement();
        f.push("INSERT INTO ")
            .push(Ident(ACCOUNTS))
            .push(" (")
            .push(Comma(COLUMNS.iter().chain(&["password"]).map(Ident)))
            .push(") VALUES (")
            .push(Comma(values))
            .push(") RETURNING ")
            .push(Comma(COLUMNS.map(Ident)));

        let record = db
            .query_first(f.finish(), &TYPES)
            .await?
            .ok_or_else(|| hirebook_core::err!("insert returned no row"))?;

        let account = Account::load(record)?;
        tracing::debug!(username = %account.username, "registered account");
        Ok(account)
    }

    /// Lists all accounts ordered by username, with their applications.
    pub async fn list(db: &Db) -> Result<Vec<Account>> {
        let serializer = db.serializer();

        let mut f = serializer.statement();
        f.push("SELECT ")
            .push(Comma(COLUMNS.map(Ident)))
            .push(" FROM ")
            .push(Ident(ACCOUNTS))
            .push(" ORDER BY \"username\"");

        let records = db.query(f.finish(), &TYPES).await?;

        let mut f = serializer.statement();
        f.push("SELECT \"username\", \"posting_id\" FROM ")
            .push(Ident(APPLICATIONS))
            .push(" ORDER BY \"posting_id\"");

        let mut applications = HashMap::<String, Vec<i64>>::new();
        for record in db.query(f.finish(), &[Type::String, Type::I64]).await? {
            let mut fields = record.into_fields();
            let username = fields.next_value()?.to_string()?;
            let posting_id = fields.next_value()?.to_i64()?;
            applications.entry(username).or_default().push(posting_id);
        }

        records
            .into_iter()
            .map(|record| {
                let mut account = Account::load(record)?;
                account.applications =
                    Some(applications.remove(&account.username).unwrap_or_default());
                Ok(account)
            })
            .collect()
    }

    /// Returns the account with its applications.
    pub async fn get(db: &Db, username: &str) -> Result<Account> {
        let serializer = db.serializer();

        let mut f = serializer.statement();
        f.push("SELECT ")
            .push(Comma(COLUMNS.map(Ident)))
            .push(" FROM ")
            .push(Ident(ACCOUNTS))
            .push(" WHERE \"username\" = ")
            .param(username);

        let Some(record) = db.query_first(f.finish(), &TYPES).await? else {
            return Err(not_found(username));
        };

        let mut f = serializer.statement();
        f.push("SELECT \"posting_id\" FROM ")
            .push(Ident(APPLICATIONS))
            .push(" WHERE \"username\" = ")
            .param(username)
            .push(" ORDER BY \"posting_id\"");

        let applications = db
            .query(f.finish(), &[Type::I64])
            .await?
            .into_iter()
            .map(|record| record.into_fields().next_value()?.to_i64())
            .collect::<Result<Vec<_>>>()?;

        let mut account = Account::load(record)?;
        account.applications = Some(applications);
        Ok(account)
    }

    pub async fn update(db: &Db, username: &str, assignments: &Assignments) -> Result<Account> {
        Account::update_with(db, username, assignments, &Self::MAPPING, db.unknown_fields()).await
    }

    /// Updates the owner-editable fields of an account. Any other field is
    /// rejected, whatever the unknown-field setting.
    pub async fn update_profile(
        db: &Db,
        username: &str,
        assignments: &Assignments,
    ) -> Result<Account> {
        Account::update_with(
            db,
            username,
            assignments,
            &Self::PROFILE_MAPPING,
            UnknownFields::Reject,
        )
        .await
    }

    /// Returns `true` when `assignments` change the account's role.
    pub fn changes_role(assignments: &Assignments) -> bool {
        assignments
            .iter()
            .any(|(field, _)| field == "isAdmin" || field == "is_admin")
    }

    async fn update_with(
        db: &Db,
        username: &str,
        assignments: &Assignments,
        mapping: &ColumnMapping,
        unknown: UnknownFields,
    ) -> Result<Account> {
        let serializer = db.serializer();
        let set = serializer.partial_update(assignments, mapping, unknown)?;

        let mut f = serializer.statement();
        f.push("UPDATE ")
            .push(Ident(ACCOUNTS))
            .push(" SET ")
            .push(&set)
            .push(" WHERE \"username\" = ")
            .param(username)
            .push(" RETURNING ")
            .push(Comma(COLUMNS.map(Ident)));

        let Some(record) = db.query_first(f.finish(), &TYPES).await? else {
            return Err(not_found(username));
        };

        tracing::debug!(username, fields = assignments.len(), "updated account");
        Account::load(record)
    }

    /// Removes the account and its applications.
    pub async fn remove(db: &Db, username: &str) -> Result<()> {
        let serializer = db.serializer();
        let mut f = serializer.statement();
        f.push("DELETE FROM ")
            .push(Ident(ACCOUNTS))
            .push(" WHERE \"username\" = ")
            .param(username)
            .push(" RETURNING \"username\"");

        if db.query_first(f.finish(), &[Type::String]).await?.is_none() {
            return Err(not_found(username));
        }

        tracing::debug!(username, "removed account");
        Ok(())
    }

    /// Records an application of `username` to the posting `posting_id`
    /// and returns the posting id.
    ///
    /// Both must exist; the account is checked first. Applying twice to the
    /// same posting is a duplicate.
    pub async fn apply(db: &Db, username: &str, posting_id: i64) -> Result<i64> {
        let serializer = db.serializer();

        if !exists(db, username).await? {
            return Err(not_found(username));
        }

        let mut f = serializer.statement();
        f.push("SELECT \"id\" FROM ")
            .push(Ident(POSTINGS))
            .push(" WHERE \"id\" = ")
            .param(posting_id);

        if db.query_first(f.finish(), &[Type::I64]).await?.is_none() {
            return Err(posting::not_found(posting_id));
        }

        let mut f = serializer.statement();
        f.push("INSERT INTO ")
            .push(Ident(APPLICATIONS))
            .push(" (\"username\", \"posting_id\") VALUES (")
            .param(username)
            .push(", ")
            .param(posting_id)
            .push(") RETURNING \"posting_id\"");

        let record = db
            .query_first(f.finish(), &[Type::I64])
            .await?
            .ok_or_else(|| hirebook_core::err!("insert returned no row"))?;

        tracing::debug!(username, posting_id, "applied to posting");
        record.into_fields().next_value()?.to_i64()
    }

    /// Returns the stored password hash, for the credential verifier.
    pub async fn credentials(db: &Db, username: &str) -> Result<String> {
        let serializer = db.serializer();
        let mut f = serializer.statement();
        f.push("SELECT \"password\" FROM ")
            .push(Ident(ACCOUNTS))
            .push(" WHERE \"username\" = ")
            .param(username);

        match db.query_first(f.finish(), &[Type::String]).await? {
            Some(record) => record.into_fields().next_value()?.to_string(),
            None => Err(not_found(username)),
        }
    }

    fn load(record: ValueRecord) -> Result<Account> {
        let mut fields = record.into_fields();

        Ok(Account {
            username: fields.next_value()?.to_string()?,
            first_name: fields.next_value()?.to_string()?,
            last_name: fields.next_value()?.to_string()?,
            email: fields.next_value()?.to_string()?,
            is_admin: fields.next_value()?.to_bool()?,
            applications: None,
        })
    }
}

async fn exists(db: &Db, username: &str) -> Result<bool> {
    let serializer = db.serializer();
    let mut f = serializer.statement();
    f.push("SELECT \"username\" FROM ")
        .push(Ident(ACCOUNTS))
        .push(" WHERE \"username\" = ")
        .param(username);

    Ok(db.query_first(f.finish(), &[Type::String]).await?.is_some())
}

fn not_found(username: &str) -> Error {
    Error::record_not_found(format!("no account: {username}"))
}
