use hirebook::{NewOrganization, Organization, OrganizationFilter, PostingSummary};
use pretty_assertions::assert_eq;
use serde_json::json;
use tests::{assignments, seed, setup};

fn new_organization(handle: &str) -> NewOrganization {
    NewOrganization {
        handle: handle.to_string(),
        name: "New".to_string(),
        description: "New Description".to_string(),
        num_employees: Some(1),
        logo_url: Some("http://new.img".to_string()),
    }
}

#[tokio::test]
async fn create() {
    let db = setup().await;

    let organization = Organization::create(&db, new_organization("new")).await.unwrap();

    assert_eq!(
        organization,
        Organization {
            handle: "new".to_string(),
            name: "New".to_string(),
            description: "New Description".to_string(),
            num_employees: Some(1),
            logo_url: Some("http://new.img".to_string()),
            postings: None,
        }
    );
}

#[tokio::test]
async fn create_duplicate_handle() {
    let db = setup().await;

    Organization::create(&db, new_organization("new")).await.unwrap();
    let err = Organization::create(&db, new_organization("new"))
        .await
        .unwrap_err();

    assert!(err.is_duplicate_resource());
    assert!(err.is_client_error());
    assert_eq!(err.to_string(), "duplicate organization: new");
}

#[tokio::test]
async fn list_without_filters_orders_by_name() {
    let db = setup().await;
    seed(&db).await;

    let organizations = Organization::list(&db, &OrganizationFilter::default())
        .await
        .unwrap();

    let handles: Vec<_> = organizations.iter().map(|o| o.handle.as_str()).collect();
    assert_eq!(handles, ["c1", "c2", "c3"]);
    assert!(organizations.iter().all(|o| o.postings.is_none()));
}

#[tokio::test]
async fn list_filters() {
    let db = setup().await;
    seed(&db).await;

    let cases = [
        (json!({"name": "c"}), vec!["c1", "c2", "c3"]),
        (json!({"name": "C2"}), vec!["c2"]),
        (json!({"minEmployees": 2}), vec!["c2", "c3"]),
        (json!({"maxEmployees": 2}), vec!["c1", "c2"]),
        (json!({"name": "c", "minEmployees": 2, "maxEmployees": 2}), vec!["c2"]),
        (json!({"name": "nope"}), vec![]),
        // LIKE metacharacters match literally
        (json!({"name": "%"}), vec![]),
        (json!({"name": "_"}), vec![]),
    ];

    for (query, expected) in cases {
        let filter: OrganizationFilter = serde_json::from_value(query.clone()).unwrap();
        let organizations = Organization::list(&db, &filter).await.unwrap();
        let handles: Vec<_> = organizations.iter().map(|o| o.handle.as_str()).collect();
        assert_eq!(handles, expected, "query={query}");
    }
}

#[tokio::test]
async fn list_rejects_inverted_range() {
    let db = setup().await;

    let filter = OrganizationFilter {
        min_employees: Some(3),
        max_employees: Some(2),
        ..Default::default()
    };

    let err = Organization::list(&db, &filter).await.unwrap_err();
    assert!(err.is_invalid_filter_range());
}

#[test]
fn filter_rejects_unknown_parameters() {
    assert!(serde_json::from_value::<OrganizationFilter>(json!({"handle": "c1"})).is_err());
}

#[tokio::test]
async fn get_attaches_postings() {
    let db = setup().await;
    let seeded = seed(&db).await;

    let organization = Organization::get(&db, "c1").await.unwrap();

    assert_eq!(organization.name, "C1");
    assert_eq!(
        organization.postings,
        Some(vec![
            PostingSummary {
                id: seeded.posting_ids[0],
                title: "j1".to_string(),
                salary: Some(100_000),
                equity: Some(0.1),
            },
            PostingSummary {
                id: seeded.posting_ids[1],
                title: "j2".to_string(),
                salary: Some(200_000),
                equity: Some(0.2),
            },
            PostingSummary {
                id: seeded.posting_ids[2],
                title: "j3".to_string(),
                salary: Some(300_000),
                equity: Some(0.0),
            },
        ])
    );

    let organization = Organization::get(&db, "c3").await.unwrap();
    assert_eq!(organization.postings, Some(vec![]));
}

#[tokio::test]
async fn get_missing() {
    let db = setup().await;

    let err = Organization::get(&db, "nope").await.unwrap_err();
    assert!(err.is_record_not_found());
    assert_eq!(err.to_string(), "record not found: no organization: nope");
}

#[tokio::test]
async fn update() {
    let db = setup().await;
    seed(&db).await;

    let organization = Organization::update(
        &db,
        "c1",
        &assignments(json!({"numEmployees": 10, "name": "New", "logoUrl": null})),
    )
    .await
    .unwrap();

    assert_eq!(organization.name, "New");
    assert_eq!(organization.num_employees, Some(10));
    assert_eq!(organization.logo_url, None);
    assert_eq!(organization.description, "Desc1");

    assert_eq!(Organization::get(&db, "c1").await.unwrap().name, "New");
}

#[tokio::test]
async fn update_missing() {
    let db = setup().await;

    let err = Organization::update(&db, "nope", &assignments(json!({"name": "x"})))
        .await
        .unwrap_err();
    assert!(err.is_record_not_found());
}

#[tokio::test]
async fn update_without_data() {
    let db = setup().await;
    seed(&db).await;

    let err = Organization::update(&db, "c1", &assignments(json!({})))
        .await
        .unwrap_err();
    assert!(err.is_empty_update());
}

#[tokio::test]
async fn update_with_mistyped_value_writes_nothing() {
    let db = setup().await;
    seed(&db).await;

    for payload in [json!({"numEmployees": "lots"}), json!({"name": null})] {
        let err = Organization::update(&db, "c1", &assignments(payload))
            .await
            .unwrap_err();
        assert!(err.is_invalid_value());
        assert!(err.is_client_error());
    }

    let organizations = Organization::list(&db, &OrganizationFilter::default())
        .await
        .unwrap();
    assert_eq!(organizations.len(), 3);
    assert_eq!(organizations[0].num_employees, Some(1));
    assert_eq!(organizations[0].name, "C1");
}

#[tokio::test]
async fn update_cannot_change_handle() {
    let db = setup().await;
    seed(&db).await;

    let err = Organization::update(&db, "c1", &assignments(json!({"handle": "c9"})))
        .await
        .unwrap_err();
    assert!(err.is_unknown_field());

    Organization::get(&db, "c1").await.unwrap();
}

#[tokio::test]
async fn remove_cascades_to_postings() {
    let db = setup().await;
    let seeded = seed(&db).await;

    Organization::remove(&db, "c1").await.unwrap();

    assert!(Organization::get(&db, "c1")
        .await
        .unwrap_err()
        .is_record_not_found());
    assert!(hirebook::Posting::get(&db, seeded.posting_ids[0])
        .await
        .unwrap_err()
        .is_record_not_found());
}

#[tokio::test]
async fn remove_missing() {
    let db = setup().await;

    let err = Organization::remove(&db, "nope").await.unwrap_err();
    assert!(err.is_record_not_found());
}
