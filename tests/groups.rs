use kcrest::models::{GetGroupsParams, Group};
use serde_json::json;
use wiremock::matchers::{bearer_token, body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{REALM, TOKEN, setup};

mod common;

fn created_at(location: String) -> ResponseTemplate {
    ResponseTemplate::new(201).insert_header("Location", location.as_str())
}

#[tokio::test]
async fn it_creates_groups_and_children() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/admin/realms/demo/groups"))
        .and(bearer_token(TOKEN))
        .and(body_json(json!({"name": "staff"})))
        .respond_with(created_at(format!(
            "{}/admin/realms/demo/groups/g1",
            server.uri()
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/admin/realms/demo/groups/g1/children"))
        .and(body_json(json!({"name": "engineering"})))
        .respond_with(created_at(format!(
            "{}/admin/realms/demo/groups/g2",
            server.uri()
        )))
        .expect(1)
        .mount(&server)
        .await;

    let parent = client
        .create_group(
            TOKEN,
            REALM,
            &Group {
                name: Some("staff".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let child = client
        .create_child_group(
            TOKEN,
            REALM,
            &parent,
            &Group {
                name: Some("engineering".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(parent, "g1");
    assert_eq!(child, "g2");
}

#[tokio::test]
async fn it_returns_empty_id_without_location() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/admin/realms/demo/groups"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let id = client
        .create_group(TOKEN, REALM, &Group::default())
        .await
        .unwrap();

    assert_eq!(id, "");
}

#[tokio::test]
async fn it_lists_and_counts_groups() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/groups"))
        .and(query_param("search", "eng"))
        .and(query_param("briefRepresentation", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "g1",
            "name": "staff",
            "path": "/staff",
            "subGroups": [{"id": "g2", "name": "engineering", "path": "/staff/engineering"}]
        }])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/groups/count"))
        .and(query_param("search", "eng"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 7})))
        .expect(1)
        .mount(&server)
        .await;

    let groups = client
        .get_groups(
            TOKEN,
            REALM,
            &GetGroupsParams {
                search: Some("eng".to_owned()),
                brief_representation: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let sub_groups = groups[0].sub_groups.as_ref().unwrap();
    assert_eq!(sub_groups[0].path.as_deref(), Some("/staff/engineering"));

    let count = client
        .get_groups_count(
            TOKEN,
            REALM,
            &GetGroupsParams {
                search: Some("eng".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(count, 7);
}

#[tokio::test]
async fn it_gets_group_by_id_and_path() {
    let (server, client) = setup().await;

    let body = json!({"id": "g2", "name": "engineering", "path": "/staff/engineering"});
    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/groups/g2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/group-by-path/staff/engineering"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let by_id = client.get_group(TOKEN, REALM, "g2").await.unwrap();
    let by_path = client
        .get_group_by_path(TOKEN, REALM, "/staff/engineering")
        .await
        .unwrap();

    assert_eq!(by_id, by_path);
}

#[tokio::test]
async fn it_rejects_empty_group_id() {
    let (server, client) = setup().await;

    let err = client.get_group(TOKEN, REALM, "").await.unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::BAD_REQUEST));

    let err = client
        .update_group(TOKEN, REALM, &Group::default())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::BAD_REQUEST));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn it_updates_deletes_and_lists_members() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/admin/realms/demo/groups/g1"))
        .and(body_json(json!({"id": "g1", "name": "renamed"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/groups/g1/members"))
        .and(query_param("max", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "u1", "username": "alice"},
            {"id": "u2", "username": "bob"}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/admin/realms/demo/groups/g1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .update_group(
            TOKEN,
            REALM,
            &Group {
                id: Some("g1".to_owned()),
                name: Some("renamed".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let members = client
        .get_group_members(
            TOKEN,
            REALM,
            "g1",
            &GetGroupsParams {
                max: Some(2),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(members[1].username.as_deref(), Some("bob"));

    client.delete_group(TOKEN, REALM, "g1").await.unwrap();
}

#[tokio::test]
async fn it_reports_missing_group() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/groups/nope"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "Could not find group by id"})),
        )
        .mount(&server)
        .await;

    let err = client.get_group(TOKEN, REALM, "nope").await.unwrap_err();

    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
    assert_eq!(
        err.to_string(),
        "could not get group: 404 Not Found: Could not find group by id"
    );
}
