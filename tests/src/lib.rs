mod exec_log;
pub use exec_log::ExecLog;

mod logging_driver;
pub use logging_driver::{DriverOp, LoggingConnection, LoggingDriver};

use hirebook::{
    db::Builder, Account, Assignments, Db, NewAccount, NewOrganization, NewPosting, Organization,
    Posting,
};
use hirebook_driver_sqlite::Sqlite;

/// Installs a test subscriber honouring `RUST_LOG`. Safe to call from every
/// test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// An empty database with the schema pushed.
pub async fn setup() -> Db {
    setup_with(Db::builder()).await
}

pub async fn setup_with(mut builder: Builder) -> Db {
    init_tracing();
    let db = builder.build(Sqlite::in_memory()).await.unwrap();
    db.push_schema().await.unwrap();
    db
}

/// Like [`setup`], recording every executed statement.
pub async fn setup_logged() -> (Db, ExecLog) {
    init_tracing();
    let driver = LoggingDriver::new(Sqlite::in_memory());
    let log = ExecLog::new(driver.ops_log_handle());

    let db = Db::builder().build(driver).await.unwrap();
    db.push_schema().await.unwrap();
    (db, log)
}

/// Posting ids created by [`seed`], in creation order.
#[derive(Debug, Clone)]
pub struct Seeded {
    pub posting_ids: Vec<i64>,
}

/// Three organizations, four postings and three accounts:
///
/// | organization | employees | postings |
/// |---|---|---|
/// | c1 | 1 | j1 (100000, 0.1), j2 (200000, 0.2), j3 (300000, 0.0) |
/// | c2 | 2 | j4 (400000, none) |
/// | c3 | 3 | |
///
/// Accounts `u1`, `u2` and the administrator `admin`.
pub async fn seed(db: &Db) -> Seeded {
    for i in 1..=3 {
        Organization::create(
            db,
            NewOrganization {
                handle: format!("c{i}"),
                name: format!("C{i}"),
                description: format!("Desc{i}"),
                num_employees: Some(i),
                logo_url: Some(format!("http://c{i}.img")),
            },
        )
        .await
        .unwrap();
    }

    let postings = [
        ("j1", Some(100_000), Some(0.1), "c1"),
        ("j2", Some(200_000), Some(0.2), "c1"),
        ("j3", Some(300_000), Some(0.0), "c1"),
        ("j4", Some(400_000), None, "c2"),
    ];

    let mut posting_ids = vec![];
    for (title, salary, equity, organization) in postings {
        let posting = Posting::create(
            db,
            NewPosting {
                title: title.to_string(),
                salary,
                equity,
                organization_handle: organization.to_string(),
            },
        )
        .await
        .unwrap();
        posting_ids.push(posting.id);
    }

    for (username, is_admin) in [("u1", false), ("u2", false), ("admin", true)] {
        Account::register(db, new_account(username, is_admin))
            .await
            .unwrap();
    }

    Seeded { posting_ids }
}

pub fn new_account(username: &str, is_admin: bool) -> NewAccount {
    NewAccount {
        username: username.to_string(),
        password: format!("hashed-{username}"),
        first_name: format!("{username}F"),
        last_name: format!("{username}L"),
        email: format!("{username}@email.com"),
        is_admin,
    }
}

/// Shorthand for building update payloads from JSON.
pub fn assignments(json: serde_json::Value) -> Assignments {
    Assignments::from_json(json).unwrap()
}
