use crate::{schema::ORGANIZATIONS, Db, Error, Posting, PostingSummary, Result};

use hirebook_core::{
    schema::{ColumnMapping, MappedField},
    stmt::{Assignments, Type, Value, ValueRecord},
};
use hirebook_sql::{Comma, Filter, Ident, Predicate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i64>,
    pub logo_url: Option<String>,

    /// Only populated by [`Organization::get`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postings: Option<Vec<PostingSummary>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrganization {
    pub handle: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub num_employees: Option<i64>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Search parameters for [`Organization::list`]. All are optional.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OrganizationFilter {
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    pub min_employees: Option<i64>,
    pub max_employees: Option<i64>,
}

const COLUMNS: [&str; 5] = ["handle", "name", "description", "num_employees", "logo_url"];

const TYPES: [Type; 5] = [Type::String, Type::String, Type::String, Type::I64, Type::String];

impl Organization {
    /// Fields an update may change. The handle is the key and cannot be
    /// updated.
    pub const MAPPING: ColumnMapping = ColumnMapping::new(
        "organization",
        &[
            MappedField::new("name", "name", Type::String),
            MappedField::new("description", "description", Type::String),
            MappedField::new("numEmployees", "num_employees", Type::I64).nullable(),
            MappedField::new("logoUrl", "logo_url", Type::String).nullable(),
        ],
    );

    pub async fn create(db: &Db, new: NewOrganization) -> Result<Organization> {
        let serializer = db.serializer();

        let mut f = serializer.statement();
        f.push("SELECT \"handle\" FROM ")
            .push(Ident(ORGANIZATIONS))
            .push(" WHERE \"handle\" = ")
            .param(&new.handle);

        if db.query_first(f.finish(), &[Type::String]).await?.is_some() {
            return Err(Error::duplicate_resource(format!(
                "duplicate organization: {}",
                new.handle
            )));
        }

        let values = [
            Value::from(new.handle),
            Value::from(new.name),
            Value::from(new.description),
            Value::from(new.num_employees),
            Value::from(new.logo_url),
        ];

        let mut f = serializer.statement();
        f.push("INSERT INTO ")
            .push(Ident(ORGANIZATIONS))
            .push(" (")
            .push(Comma(COLUMNS.map(Ident)))
            .push(") VALUES (")
            .push(Comma(values))
            .push(") RETURNING ")
            .push(Comma(COLUMNS.map(Ident)));

        let record = db
            .query_first(f.finish(), &TYPES)
            .await?
            .ok_or_else(|| hirebook_core::err!("insert returned no row"))?;

        let organization = Organization::load(record)?;
        tracing::debug!(handle = %organization.handle, "created organization");
        Ok(organization)
    }

    /// Lists organizations matching `filter`, ordered by name.
    pub async fn list(db: &Db, filter: &OrganizationFilter) -> Result<Vec<Organization>> {
        let serializer = db.serializer();
        let clause = serializer.filter(filter)?;

        let mut f = serializer.statement();
        f.push("SELECT ")
            .push(Comma(COLUMNS.map(Ident)))
            .push(" FROM ")
            .push(Ident(ORGANIZATIONS))
            .push(&clause)
            .push(" ORDER BY \"name\"");

        db.query(f.finish(), &TYPES)
            .await?
            .into_iter()
            .map(Organization::load)
            .collect()
    }

    /// Returns the organization with its postings attached.
    pub async fn get(db: &Db, handle: &str) -> Result<Organization> {
        let serializer = db.serializer();

        let mut f = serializer.statement();
        f.push("SELECT ")
            .push(Comma(COLUMNS.map(Ident)))
            .push(" FROM ")
            .push(Ident(ORGANIZATIONS))
            .push(" WHERE \"handle\" = ")
            .param(handle);

        let Some(record) = db.query_first(f.finish(), &TYPES).await? else {
            return Err(not_found(handle));
        };

        let mut organization = Organization::load(record)?;
        organization.postings = Some(Posting::list_for_organization(db, handle).await?);
        Ok(organization)
    }

    /// Applies a partial update and returns the updated organization.
    pub async fn update(db: &Db, handle: &str, assignments: &Assignments) -> Result<Organization> {
        let serializer = db.serializer();
        let set = serializer.partial_update(assignments, &Self::MAPPING, db.unknown_fields())?;

        let mut f = serializer.statement();
        f.push("UPDATE ")
            .push(Ident(ORGANIZATIONS))
            .push(" SET ")
            .push(&set)
            .push(" WHERE \"handle\" = ")
            .param(handle)
            .push(" RETURNING ")
            .push(Comma(COLUMNS.map(Ident)));

        let Some(record) = db.query_first(f.finish(), &TYPES).await? else {
            return Err(not_found(handle));
        };

        tracing::debug!(handle, fields = assignments.len(), "updated organization");
        Organization::load(record)
    }

    /// Removes the organization. Its postings are removed with it.
    pub async fn remove(db: &Db, handle: &str) -> Result<()> {
        let serializer = db.serializer();
        let mut f = serializer.statement();
        f.push("DELETE FROM ")
            .push(Ident(ORGANIZATIONS))
            .push(" WHERE \"handle\" = ")
            .param(handle)
            .push(" RETURNING \"handle\"");

        if db.query_first(f.finish(), &[Type::String]).await?.is_none() {
            return Err(not_found(handle));
        }

        tracing::debug!(handle, "removed organization");
        Ok(())
    }

    fn load(record: ValueRecord) -> Result<Organization> {
        let mut fields = record.into_fields();

        Ok(Organization {
            handle: fields.next_value()?.to_string()?,
            name: fields.next_value()?.to_string()?,
            description: fields.next_value()?.to_string()?,
            num_employees: fields.next_value()?.to_option_i64()?,
            logo_url: fields.next_value()?.to_option_string()?,
            postings: None,
        })
    }
}

fn not_found(handle: &str) -> Error {
    Error::record_not_found(format!("no organization: {handle}"))
}

impl Filter for OrganizationFilter {
    fn predicates(&self) -> Vec<Predicate<'_>> {
        let mut predicates = vec![];

        if let Some(name) = &self.name {
            predicates.push(Predicate::Contains {
                column: "name",
                term: name,
            });
        }

        if self.min_employees.is_some() || self.max_employees.is_some() {
            predicates.push(Predicate::Range {
                field: "employees",
                column: "num_employees",
                min: self.min_employees,
                max: self.max_employees,
            });
        }

        predicates
    }
}
