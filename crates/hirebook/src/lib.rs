//! Organizations, job postings and user accounts over a relational store.
//!
//! Each resource is a plain data type with associated async functions that
//! take a [`Db`] handle. Those functions perform no access checks; wrap the
//! handle in a [`Session`] to have every operation gated by the access
//! policy for the acting user.

mod account;
pub use account::{Account, NewAccount};

mod config;
pub use config::Config;

pub mod db;
pub use db::Db;

mod organization;
pub use organization::{NewOrganization, Organization, OrganizationFilter};

mod posting;
pub use posting::{NewPosting, Posting, PostingFilter, PostingSummary};

pub mod schema;

mod session;
pub use session::Session;

pub use hirebook_core::{
    policy::{Action, Actor},
    schema::UnknownFields,
    stmt::{Assignments, Value},
    Error, Result,
};
