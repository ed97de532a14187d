//! Tables backing the resources.
//!
//! Natural keys are declared as primary key or unique constraints and
//! references cascade on delete, so a create that races past the duplicate
//! check still fails with a duplicate error, and removing an organization or
//! account takes its postings and applications with it.

use hirebook_core::{
    schema::db::{Column, Schema, Table},
    stmt::Type,
};

pub const ORGANIZATIONS: &str = "organizations";
pub const POSTINGS: &str = "postings";
pub const ACCOUNTS: &str = "accounts";
pub const APPLICATIONS: &str = "applications";

/// Returns the database schema.
pub fn db() -> Schema {
    Schema {
        tables: vec![organizations(), postings(), accounts(), applications()],
    }
}

fn organizations() -> Table {
    Table::new(ORGANIZATIONS)
        .column(Column::new("handle", Type::String))
        .column(Column::new("name", Type::String))
        .column(Column::new("description", Type::String))
        .column(Column::new("num_employees", Type::I64).nullable())
        .column(Column::new("logo_url", Type::String).nullable())
        .primary_key(&["handle"])
}

fn postings() -> Table {
    Table::new(POSTINGS)
        .column(Column::new("id", Type::I64).auto_increment())
        .column(Column::new("title", Type::String))
        .column(Column::new("salary", Type::I64).nullable())
        .column(Column::new("equity", Type::F64).nullable())
        .column(Column::new("organization_handle", Type::String))
        .unique(&["title", "organization_handle"])
        .references(&["organization_handle"], ORGANIZATIONS, &["handle"])
}

fn accounts() -> Table {
    Table::new(ACCOUNTS)
        .column(Column::new("username", Type::String))
        .column(Column::new("password", Type::String))
        .column(Column::new("first_name", Type::String))
        .column(Column::new("last_name", Type::String))
        .column(Column::new("email", Type::String))
        .column(Column::new("is_admin", Type::Bool))
        .primary_key(&["username"])
}

fn applications() -> Table {
    Table::new(APPLICATIONS)
        .column(Column::new("username", Type::String))
        .column(Column::new("posting_id", Type::I64))
        .primary_key(&["username", "posting_id"])
        .references(&["username"], ACCOUNTS, &["username"])
        .references(&["posting_id"], POSTINGS, &["id"])
}
