use hirebook::{Config, Db, UnknownFields};
use serde_json::json;
use tests::{assignments, seed, setup_with};

#[tokio::test]
async fn connect_by_url() {
    let db = Db::connect("sqlite::memory:").await.unwrap();
    db.push_schema().await.unwrap();

    assert_eq!(db.url(), "sqlite::memory:");
    assert!(!db.capability().native_ilike);
}

#[tokio::test]
async fn unsupported_scheme() {
    let err = Db::connect("mysql://localhost/hirebook").await.unwrap_err();
    assert!(err.is_invalid_connection_url());
}

#[tokio::test]
async fn config_connects() {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        unknown_fields: UnknownFields::Reject,
    };

    let db = config.connect().await.unwrap();
    db.push_schema().await.unwrap();
}

#[tokio::test]
async fn passthrough_allows_unmapped_columns() {
    let mut builder = Db::builder();
    builder.unknown_fields(UnknownFields::Passthrough);
    let db = setup_with(builder).await;
    seed(&db).await;

    // `handle` is not in the organization mapping but is a real column.
    let organization = hirebook::Organization::update(
        &db,
        "c3",
        &assignments(json!({"handle": "c4"})),
    )
    .await
    .unwrap();
    assert_eq!(organization.handle, "c4");

    // Identifiers that are not plain names are still refused.
    let err = hirebook::Organization::update(
        &db,
        "c4",
        &assignments(json!({"name\" = 'x', \"handle": "c5"})),
    )
    .await
    .unwrap_err();
    assert!(err.is_unknown_field());
}
