use hirebook::{NewPosting, Posting, PostingFilter};
use pretty_assertions::assert_eq;
use serde_json::json;
use tests::{assignments, seed, setup};

fn titles(postings: &[Posting]) -> Vec<&str> {
    postings.iter().map(|p| p.title.as_str()).collect()
}

#[tokio::test]
async fn create() {
    let db = setup().await;
    seed(&db).await;

    let posting = Posting::create(
        &db,
        NewPosting {
            title: "new".to_string(),
            salary: Some(10),
            equity: Some(0.5),
            organization_handle: "c1".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(posting.title, "new");
    assert_eq!(posting.salary, Some(10));
    assert_eq!(posting.equity, Some(0.5));
    assert_eq!(posting.organization_handle, "c1");
    assert_eq!(Posting::get(&db, posting.id).await.unwrap(), posting);
}

#[tokio::test]
async fn create_duplicate_title_in_same_organization() {
    let db = setup().await;
    seed(&db).await;

    let new = |organization: &str| NewPosting {
        title: "j1".to_string(),
        salary: None,
        equity: None,
        organization_handle: organization.to_string(),
    };

    let err = Posting::create(&db, new("c1")).await.unwrap_err();
    assert!(err.is_duplicate_resource());

    // The same title at another organization is fine.
    Posting::create(&db, new("c2")).await.unwrap();
}

#[tokio::test]
async fn create_for_missing_organization() {
    let db = setup().await;

    let err = Posting::create(
        &db,
        NewPosting {
            title: "j1".to_string(),
            salary: None,
            equity: None,
            organization_handle: "nope".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert!(err.is_record_not_found());
    assert_eq!(err.to_string(), "record not found: no organization: nope");
}

#[tokio::test]
async fn list_by_min_salary_orders_by_title() {
    let db = setup().await;
    seed(&db).await;

    let filter: PostingFilter = serde_json::from_value(json!({"minSalary": 300000})).unwrap();
    let postings = Posting::list(&db, &filter).await.unwrap();

    assert_eq!(titles(&postings), ["j3", "j4"]);
    assert!(postings.iter().all(|p| p.salary >= Some(300_000)));
}

#[tokio::test]
async fn list_filters() {
    let db = setup().await;
    seed(&db).await;

    let cases = [
        (json!({}), vec!["j1", "j2", "j3", "j4"]),
        (json!({"title": "J"}), vec!["j1", "j2", "j3", "j4"]),
        (json!({"title": "1"}), vec!["j1"]),
        (json!({"maxSalary": 200000}), vec!["j1", "j2"]),
        (json!({"minSalary": 150000, "maxSalary": 350000}), vec!["j2", "j3"]),
        (json!({"hasEquity": true}), vec!["j1", "j2"]),
        (json!({"hasEquity": false}), vec!["j1", "j2", "j3", "j4"]),
        (json!({"title": "j", "minSalary": 200000, "hasEquity": true}), vec!["j2"]),
    ];

    for (query, expected) in cases {
        let filter: PostingFilter = serde_json::from_value(query.clone()).unwrap();
        let postings = Posting::list(&db, &filter).await.unwrap();
        assert_eq!(titles(&postings), expected, "query={query}");
    }
}

#[tokio::test]
async fn list_rejects_inverted_salary_range() {
    let db = setup().await;

    let filter = PostingFilter {
        min_salary: Some(3),
        max_salary: Some(2),
        ..Default::default()
    };

    let err = Posting::list(&db, &filter).await.unwrap_err();
    assert!(err.is_invalid_filter_range());
    assert_eq!(
        err.to_string(),
        "invalid filter range: min salary (3) cannot be greater than max salary (2)"
    );
}

#[tokio::test]
async fn get_missing() {
    let db = setup().await;

    let err = Posting::get(&db, 0).await.unwrap_err();
    assert!(err.is_record_not_found());
}

#[tokio::test]
async fn update() {
    let db = setup().await;
    let seeded = seed(&db).await;
    let id = seeded.posting_ids[0];

    let posting = Posting::update(&db, id, &assignments(json!({"salary": 500, "equity": null})))
        .await
        .unwrap();

    assert_eq!(
        posting,
        Posting {
            id,
            title: "j1".to_string(),
            salary: Some(500),
            equity: None,
            organization_handle: "c1".to_string(),
        }
    );
}

#[tokio::test]
async fn update_cannot_move_posting() {
    let db = setup().await;
    let seeded = seed(&db).await;

    let err = Posting::update(
        &db,
        seeded.posting_ids[0],
        &assignments(json!({"organizationHandle": "c2"})),
    )
    .await
    .unwrap_err();

    assert!(err.is_unknown_field());
}

#[tokio::test]
async fn update_missing() {
    let db = setup().await;

    let err = Posting::update(&db, 0, &assignments(json!({"title": "x"})))
        .await
        .unwrap_err();
    assert!(err.is_record_not_found());
}

#[tokio::test]
async fn remove() {
    let db = setup().await;
    let seeded = seed(&db).await;

    Posting::remove(&db, seeded.posting_ids[0]).await.unwrap();

    let err = Posting::remove(&db, seeded.posting_ids[0]).await.unwrap_err();
    assert!(err.is_record_not_found());
}
