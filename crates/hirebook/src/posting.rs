use crate::{
    schema::{ORGANIZATIONS, POSTINGS},
    Db, Error, Result,
};

use hirebook_core::{
    schema::{ColumnMapping, MappedField},
    stmt::{Assignments, Type, Value, ValueRecord},
};
use hirebook_sql::{Comma, Filter, Ident, Predicate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    pub id: i64,
    pub title: String,
    pub salary: Option<i64>,
    pub equity: Option<f64>,
    pub organization_handle: String,
}

/// A posting as listed under its organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingSummary {
    pub id: i64,
    pub title: String,
    pub salary: Option<i64>,
    pub equity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPosting {
    pub title: String,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub equity: Option<f64>,
    pub organization_handle: String,
}

/// Search parameters for [`Posting::list`].
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PostingFilter {
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,

    /// When `true`, only postings with a positive equity. `false` is the
    /// same as not filtering.
    pub has_equity: Option<bool>,
}

const COLUMNS: [&str; 5] = ["id", "title", "salary", "equity", "organization_handle"];

const TYPES: [Type; 5] = [Type::I64, Type::String, Type::I64, Type::F64, Type::String];

impl Posting {
    /// Fields an update may change. Postings cannot move between
    /// organizations.
    pub const MAPPING: ColumnMapping = ColumnMapping::new(
        "posting",
        &[
            MappedField::new("title", "title", Type::String),
            MappedField::new("salary", "salary", Type::I64).nullable(),
            MappedField::new("equity", "equity", Type::F64).nullable(),
        ],
    );

    /// Creates a posting. A posting title is unique within its organization.
    pub async fn create(db: &Db, new: NewPosting) -> Result<Posting> {
        let serializer = db.serializer();

        let mut f = serializer.statement();
        f.push("SELECT \"handle\" FROM ")
            .push(Ident(ORGANIZATIONS))
            .push(" WHERE \"handle\" = ")
            .param(&new.organization_handle);

        if db.query_first(f.finish(), &[Type::String]).await?.is_none() {
            return Err(Error::record_not_found(format!(
                "no organization: {}",
                new.organization_handle
            )));
        }

        let mut f = serializer.statement();
        f.push("SELECT \"id\" FROM ")
            .push(Ident(POSTINGS))
            .push(" WHERE \"title\" = ")
            .param(&new.title)
            .push(" AND \"organization_handle\" = ")
            .param(&new.organization_handle);

        if db.query_first(f.finish(), &[Type::I64]).await?.is_some() {
            return Err(Error::duplicate_resource(format!(
                "duplicate posting: {}",
                new.title
            )));
        }

        let values = [
            Value::from(new.title),
            Value::from(new.salary),
            Value::from(new.equity),
            Value::from(new.organization_handle),
        ];

        let mut f = serializer.statement();
        f.push("INSERT INTO ")
            .push(Ident(POSTINGS))
            .push(" (")
            .push(Comma(COLUMNS[1..].iter().map(Ident)))
            .push(") VALUES (")
            .push(Comma(values))
            .push(") RETURNING ")
            .push(Comma(COLUMNS.map(Ident)));

        let record = db
            .query_first(f.finish(), &TYPES)
            .await?
            .ok_or_else(|| hirebook_core::err!("insert returned no row"))?;

        let posting = Posting::load(record)?;
        tracing::debug!(id = posting.id, title = %posting.title, "created posting");
        Ok(posting)
    }

    /// Lists postings matching `filter`, ordered by title.
    pub async fn list(db: &Db, filter: &PostingFilter) -> Result<Vec<Posting>> {
        let serializer = db.serializer();
        let clause = serializer.filter(filter)?;

        let mut f = serializer.statement();
        f.push("SELECT ")
            .push(Comma(COLUMNS.map(Ident)))
            .push(" FROM ")
            .push(Ident(POSTINGS))
            .push(&clause)
            .push(" ORDER BY \"title\"");

        db.query(f.finish(), &TYPES)
            .await?
            .into_iter()
            .map(Posting::load)
            .collect()
    }

    /// Lists the postings of one organization, oldest first.
    pub async fn list_for_organization(db: &Db, handle: &str) -> Result<Vec<PostingSummary>> {
        let serializer = db.serializer();
        let mut f = serializer.statement();
        f.push("SELECT ")
            .push(Comma(COLUMNS[..4].iter().map(Ident)))
            .push(" FROM ")
            .push(Ident(POSTINGS))
            .push(" WHERE \"organization_handle\" = ")
            .param(handle)
            .push(" ORDER BY \"id\"");

        db.query(f.finish(), &TYPES[..4])
            .await?
            .into_iter()
            .map(|record| {
                let mut fields = record.into_fields();

                Ok(PostingSummary {
                    id: fields.next_value()?.to_i64()?,
                    title: fields.next_value()?.to_string()?,
                    salary: fields.next_value()?.to_option_i64()?,
                    equity: fields.next_value()?.to_option_f64()?,
                })
            })
            .collect()
    }

    pub async fn get(db: &Db, id: i64) -> Result<Posting> {
        let serializer = db.serializer();
        let mut f = serializer.statement();
        f.push("SELECT ")
            .push(Comma(COLUMNS.map(Ident)))
            .push(" FROM ")
            .push(Ident(POSTINGS))
            .push(" WHERE \"id\" = ")
            .param(id);

        match db.query_first(f.finish(), &TYPES).await? {
            Some(record) => Posting::load(record),
            None => Err(not_found(id)),
        }
    }

    pub async fn update(db: &Db, id: i64, assignments: &Assignments) -> Result<Posting> {
        let serializer = db.serializer();
        let set = serializer.partial_update(assignments, &Self::MAPPING, db.unknown_fields())?;

        let mut f = serializer.statement();
        f.push("UPDATE ")
            .push(Ident(POSTINGS))
            .push(" SET ")
            .push(&set)
            .push(" WHERE \"id\" = ")
            .param(id)
            .push(" RETURNING ")
            .push(Comma(COLUMNS.map(Ident)));

        let Some(record) = db.query_first(f.finish(), &TYPES).await? else {
            return Err(not_found(id));
        };

        tracing::debug!(id, fields = assignments.len(), "updated posting");
        Posting::load(record)
    }

    pub async fn remove(db: &Db, id: i64) -> Result<()> {
        let serializer = db.serializer();
        let mut f = serializer.statement();
        f.push("DELETE FROM ")
            .push(Ident(POSTINGS))
            .push(" WHERE \"id\" = ")
            .param(id)
            .push(" RETURNING \"id\"");

        if db.query_first(f.finish(), &[Type::I64]).await?.is_none() {
            return Err(not_found(id));
        }

        tracing::debug!(id, "removed posting");
        Ok(())
    }

    fn load(record: ValueRecord) -> Result<Posting> {
        let mut fields = record.into_fields();

        Ok(Posting {
            id: fields.next_value()?.to_i64()?,
            title: fields.next_value()?.to_string()?,
            salary: fields.next_value()?.to_option_i64()?,
            equity: fields.next_value()?.to_option_f64()?,
            organization_handle: fields.next_value()?.to_string()?,
        })
    }
}

pub(crate) fn not_found(id: i64) -> Error {
    Error::record_not_found(format!("no posting: {id}"))
}

impl Filter for PostingFilter {
    fn predicates(&self) -> Vec<Predicate<'_>> {
        let mut predicates = vec![];

        if let Some(title) = &self.title {
            predicates.push(Predicate::Contains {
                column: "title",
                term: title,
            });
        }

        if self.min_salary.is_some() || self.max_salary.is_some() {
            predicates.push(Predicate::Range {
                field: "salary",
                column: "salary",
                min: self.min_salary,
                max: self.max_salary,
            });
        }

        if self.has_equity == Some(true) {
            predicates.push(Predicate::Positive { column: "equity" });
        }

        predicates
    }
}
