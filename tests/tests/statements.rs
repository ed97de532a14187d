use hirebook::{
    Organization, OrganizationFilter, Posting, PostingFilter, Value,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use tests::{assignments, seed, setup_logged};

#[tokio::test]
async fn update_binds_the_key_after_the_set_values() {
    let (db, log) = setup_logged().await;
    seed(&db).await;
    log.clear();

    Organization::update(
        &db,
        "c1",
        &assignments(json!({"logoUrl": "http://x.img", "numEmployees": 7})),
    )
    .await
    .unwrap();

    assert_eq!(log.len(), 1);
    let (sql, params) = log.last_starting_with("UPDATE").unwrap();

    assert_eq!(
        sql,
        r#"UPDATE "organizations" SET "logo_url"=?1, "num_employees"=?2 WHERE "handle" = ?3 RETURNING "handle", "name", "description", "num_employees", "logo_url""#
    );
    assert_eq!(
        params,
        [Value::from("http://x.img"), Value::I64(7), Value::from("c1")]
    );
}

#[tokio::test]
async fn empty_update_never_reaches_storage() {
    let (db, log) = setup_logged().await;
    seed(&db).await;
    log.clear();

    let err = Organization::update(&db, "c1", &assignments(json!({})))
        .await
        .unwrap_err();

    assert!(err.is_empty_update());
    assert!(log.is_empty());
}

#[tokio::test]
async fn inverted_range_never_reaches_storage() {
    let (db, log) = setup_logged().await;
    log.clear();

    let filter = PostingFilter {
        min_salary: Some(10),
        max_salary: Some(1),
        ..Default::default()
    };

    assert!(Posting::list(&db, &filter).await.is_err());
    assert!(log.is_empty());
}

#[tokio::test]
async fn list_without_filters_has_no_where() {
    let (db, log) = setup_logged().await;

    Organization::list(&db, &OrganizationFilter::default())
        .await
        .unwrap();

    let (sql, params) = log.last_starting_with("SELECT").unwrap();
    assert_eq!(
        sql,
        r#"SELECT "handle", "name", "description", "num_employees", "logo_url" FROM "organizations" ORDER BY "name""#
    );
    assert!(params.is_empty());
}

#[tokio::test]
async fn search_terms_are_bound_not_spliced() {
    let (db, log) = setup_logged().await;
    seed(&db).await;

    let filter = PostingFilter {
        title: Some("'; DROP TABLE postings; --".to_string()),
        min_salary: Some(1),
        has_equity: Some(true),
        ..Default::default()
    };

    assert!(Posting::list(&db, &filter).await.unwrap().is_empty());

    let (sql, params) = log.last_starting_with("SELECT").unwrap();
    assert_eq!(
        sql,
        r#"SELECT "id", "title", "salary", "equity", "organization_handle" FROM "postings" WHERE "title" LIKE ?1 ESCAPE '\' AND "salary" >= ?2 AND "equity" > 0 ORDER BY "title""#
    );
    assert_eq!(
        params,
        [
            Value::from("%'; DROP TABLE postings; --%"),
            Value::I64(1)
        ]
    );

    // The table is still there.
    assert_eq!(
        Posting::list(&db, &PostingFilter::default())
            .await
            .unwrap()
            .len(),
        4
    );
}

#[tokio::test]
async fn organization_get_runs_two_statements() {
    let (db, log) = setup_logged().await;
    seed(&db).await;
    log.clear();

    Organization::get(&db, "c1").await.unwrap();

    let statements = log.statements();
    assert_eq!(statements.len(), 2);
    assert!(statements[1].0.contains(r#"FROM "postings" WHERE "organization_handle" = ?1"#));
}
