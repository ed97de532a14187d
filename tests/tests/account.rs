use hirebook::{Account, Posting};
use pretty_assertions::assert_eq;
use serde_json::json;
use tests::{assignments, new_account, seed, setup};

#[tokio::test]
async fn register() {
    let db = setup().await;

    let account = Account::register(&db, new_account("new", false))
        .await
        .unwrap();

    assert_eq!(
        account,
        Account {
            username: "new".to_string(),
            first_name: "newF".to_string(),
            last_name: "newL".to_string(),
            email: "new@email.com".to_string(),
            is_admin: false,
            applications: None,
        }
    );
    assert_eq!(
        Account::credentials(&db, "new").await.unwrap(),
        "hashed-new"
    );
}

#[tokio::test]
async fn register_duplicate() {
    let db = setup().await;

    Account::register(&db, new_account("new", false))
        .await
        .unwrap();
    let err = Account::register(&db, new_account("new", true))
        .await
        .unwrap_err();

    assert!(err.is_duplicate_resource());
}

#[tokio::test]
async fn serialized_account_has_no_password() {
    let db = setup().await;
    seed(&db).await;

    let account = Account::get(&db, "u1").await.unwrap();
    let json = serde_json::to_value(&account).unwrap();

    assert_eq!(
        json,
        json!({
            "username": "u1",
            "firstName": "u1F",
            "lastName": "u1L",
            "email": "u1@email.com",
            "isAdmin": false,
            "applications": [],
        })
    );
}

#[tokio::test]
async fn list_attaches_applications() {
    let db = setup().await;
    let seeded = seed(&db).await;

    Account::apply(&db, "u1", seeded.posting_ids[1]).await.unwrap();
    Account::apply(&db, "u1", seeded.posting_ids[0]).await.unwrap();

    let accounts = Account::list(&db).await.unwrap();

    let summary: Vec<_> = accounts
        .iter()
        .map(|a| (a.username.as_str(), a.applications.clone().unwrap()))
        .collect();

    assert_eq!(
        summary,
        [
            ("admin", vec![]),
            ("u1", vec![seeded.posting_ids[0], seeded.posting_ids[1]]),
            ("u2", vec![]),
        ]
    );
}

#[tokio::test]
async fn apply() {
    let db = setup().await;
    let seeded = seed(&db).await;
    let posting_id = seeded.posting_ids[0];

    assert_eq!(Account::apply(&db, "u1", posting_id).await.unwrap(), posting_id);
    assert_eq!(
        Account::get(&db, "u1").await.unwrap().applications,
        Some(vec![posting_id])
    );

    let err = Account::apply(&db, "u1", posting_id).await.unwrap_err();
    assert!(err.is_duplicate_resource());
}

#[tokio::test]
async fn apply_names_the_missing_reference() {
    let db = setup().await;
    let seeded = seed(&db).await;

    let err = Account::apply(&db, "nope", seeded.posting_ids[0])
        .await
        .unwrap_err();
    assert!(err.is_record_not_found());
    assert_eq!(err.to_string(), "record not found: no account: nope");

    let err = Account::apply(&db, "u1", 0).await.unwrap_err();
    assert!(err.is_record_not_found());
    assert_eq!(err.to_string(), "record not found: no posting: 0");

    // The account is checked first.
    let err = Account::apply(&db, "nope", 0).await.unwrap_err();
    assert_eq!(err.to_string(), "record not found: no account: nope");
}

#[tokio::test]
async fn update() {
    let db = setup().await;
    seed(&db).await;

    let account = Account::update(
        &db,
        "u1",
        &assignments(json!({"firstName": "New", "isAdmin": true, "password": "hashed-new"})),
    )
    .await
    .unwrap();

    assert_eq!(account.first_name, "New");
    assert!(account.is_admin);
    assert_eq!(
        Account::credentials(&db, "u1").await.unwrap(),
        "hashed-new"
    );
}

#[tokio::test]
async fn update_cannot_rename() {
    let db = setup().await;
    seed(&db).await;

    let err = Account::update(&db, "u1", &assignments(json!({"username": "u9"})))
        .await
        .unwrap_err();
    assert!(err.is_unknown_field());
}

#[tokio::test]
async fn remove_cascades_to_applications() {
    let db = setup().await;
    let seeded = seed(&db).await;
    let posting_id = seeded.posting_ids[0];

    Account::apply(&db, "u1", posting_id).await.unwrap();
    Account::remove(&db, "u1").await.unwrap();

    assert!(Account::get(&db, "u1")
        .await
        .unwrap_err()
        .is_record_not_found());

    // The posting survives; the account name can be registered again
    // without inheriting the application.
    Posting::get(&db, posting_id).await.unwrap();
    Account::register(&db, new_account("u1", false))
        .await
        .unwrap();
    assert_eq!(
        Account::get(&db, "u1").await.unwrap().applications,
        Some(vec![])
    );
}

#[tokio::test]
async fn credentials_of_missing_account() {
    let db = setup().await;

    let err = Account::credentials(&db, "nope").await.unwrap_err();
    assert!(err.is_record_not_found());
}
