use kcrest::models::{GetRoleParams, Role};
use serde_json::json;
use wiremock::matchers::{bearer_token, body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{REALM, TOKEN, setup};

mod common;

fn role(id: &str, name: &str) -> Role {
    Role {
        id: Some(id.to_owned()),
        name: Some(name.to_owned()),
        ..Default::default()
    }
}

fn roles_body() -> serde_json::Value {
    json!([
        {"id": "r1", "name": "viewer", "composite": false, "clientRole": false, "containerId": "demo"},
        {"id": "r2", "name": "editor", "composite": true, "clientRole": false, "containerId": "demo"}
    ])
}

#[tokio::test]
async fn it_creates_and_reads_realm_roles() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/admin/realms/demo/roles"))
        .and(bearer_token(TOKEN))
        .and(body_json(json!({"name": "viewer", "description": "Read only"})))
        .respond_with(ResponseTemplate::new(201).insert_header(
            "Location",
            format!("{}/admin/realms/demo/roles/viewer", server.uri()).as_str(),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/roles/viewer"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "r1", "name": "viewer"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/roles-by-id/r1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "r1", "name": "viewer"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/roles"))
        .and(query_param("search", "e"))
        .respond_with(ResponseTemplate::new(200).set_body_json(roles_body()))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .create_realm_role(
            TOKEN,
            REALM,
            &Role {
                name: Some("viewer".to_owned()),
                description: Some("Read only".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(created, "viewer");

    let by_name = client.get_realm_role(TOKEN, REALM, "viewer").await.unwrap();
    let by_id = client.get_realm_role_by_id(TOKEN, REALM, "r1").await.unwrap();
    assert_eq!(by_name, by_id);

    let roles = client
        .get_realm_roles(
            TOKEN,
            REALM,
            &GetRoleParams {
                search: Some("e".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(roles.len(), 2);
    assert_eq!(roles[1].composite, Some(true));
    assert_eq!(roles[1].container_id.as_deref(), Some("demo"));
}

#[tokio::test]
async fn it_updates_and_deletes_realm_roles() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/admin/realms/demo/roles/viewer"))
        .and(body_json(json!({"name": "viewer", "description": "Updated"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/admin/realms/demo/roles-by-id/r1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/admin/realms/demo/roles/viewer"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let updated = Role {
        name: Some("viewer".to_owned()),
        description: Some("Updated".to_owned()),
        ..Default::default()
    };
    client
        .update_realm_role(TOKEN, REALM, "viewer", &updated)
        .await
        .unwrap();
    client
        .update_realm_role_by_id(TOKEN, REALM, "r1", &updated)
        .await
        .unwrap();
    client.delete_realm_role(TOKEN, REALM, "viewer").await.unwrap();
}

#[tokio::test]
async fn it_maps_realm_roles_to_users_and_groups() {
    let (server, client) = setup().await;
    let roles = vec![role("r1", "viewer")];
    let body = json!([{"id": "r1", "name": "viewer"}]);

    for target in ["users/u1", "groups/g1"] {
        let mapping = format!("/admin/realms/demo/{}/role-mappings/realm", target);

        Mock::given(method("POST"))
            .and(path(mapping.as_str()))
            .and(body_json(body.clone()))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(mapping.as_str()))
            .and(body_json(body.clone()))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
    }

    client
        .add_realm_role_to_user(TOKEN, REALM, "u1", &roles)
        .await
        .unwrap();
    client
        .delete_realm_role_from_user(TOKEN, REALM, "u1", &roles)
        .await
        .unwrap();
    client
        .add_realm_role_to_group(TOKEN, REALM, "g1", &roles)
        .await
        .unwrap();
    client
        .delete_realm_role_from_group(TOKEN, REALM, "g1", &roles)
        .await
        .unwrap();
}

#[tokio::test]
async fn it_reads_role_mappings() {
    let (server, client) = setup().await;

    for mapping in [
        "/admin/realms/demo/users/u1/role-mappings/realm",
        "/admin/realms/demo/groups/g1/role-mappings/realm",
        "/admin/realms/demo/users/u1/role-mappings/realm/composite",
        "/admin/realms/demo/groups/g1/role-mappings/realm/composite",
        "/admin/realms/demo/users/u1/role-mappings/realm/available",
        "/admin/realms/demo/groups/g1/role-mappings/realm/available",
    ] {
        Mock::given(method("GET"))
            .and(path(mapping))
            .respond_with(ResponseTemplate::new(200).set_body_json(roles_body()))
            .expect(1)
            .mount(&server)
            .await;
    }

    let results = [
        client.get_realm_roles_by_user_id(TOKEN, REALM, "u1").await,
        client.get_realm_roles_by_group_id(TOKEN, REALM, "g1").await,
        client
            .get_composite_realm_roles_by_user_id(TOKEN, REALM, "u1")
            .await,
        client
            .get_composite_realm_roles_by_group_id(TOKEN, REALM, "g1")
            .await,
        client
            .get_available_realm_roles_by_user_id(TOKEN, REALM, "u1")
            .await,
        client
            .get_available_realm_roles_by_group_id(TOKEN, REALM, "g1")
            .await,
    ];

    for roles in results {
        assert_eq!(roles.unwrap().len(), 2);
    }
}

#[tokio::test]
async fn it_manages_composites() {
    let (server, client) = setup().await;
    let children = vec![role("r1", "viewer")];

    Mock::given(method("POST"))
        .and(path("/admin/realms/demo/roles/editor/composites"))
        .and(body_json(json!([{"id": "r1", "name": "viewer"}])))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/admin/realms/demo/roles/editor/composites"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/roles/editor/composites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(roles_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/roles-by-id/r2/composites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(roles_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/roles-by-id/r2/composites/realm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    client
        .add_realm_role_composite(TOKEN, REALM, "editor", &children)
        .await
        .unwrap();
    client
        .delete_realm_role_composite(TOKEN, REALM, "editor", &children)
        .await
        .unwrap();

    let composites = client
        .get_composite_realm_roles(TOKEN, REALM, "editor")
        .await
        .unwrap();
    assert_eq!(composites.len(), 2);

    let by_id = client
        .get_composite_roles_by_role_id(TOKEN, REALM, "r2")
        .await
        .unwrap();
    assert_eq!(by_id, composites);

    let realm_only = client
        .get_composite_realm_roles_by_role_id(TOKEN, REALM, "r2")
        .await
        .unwrap();
    assert!(realm_only.is_empty());
}

#[tokio::test]
async fn it_manages_client_roles() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/admin/realms/demo/clients/c1/roles"))
        .and(body_json(json!({"name": "auditor"})))
        .respond_with(ResponseTemplate::new(201).insert_header(
            "Location",
            format!("{}/admin/realms/demo/clients/c1/roles/auditor", server.uri()).as_str(),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/clients/c1/roles"))
        .and(query_param("briefRepresentation", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "cr1", "name": "auditor", "clientRole": true, "containerId": "c1"}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/clients/c1/roles/auditor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"id": "cr1", "name": "auditor", "clientRole": true}),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/users/u1/role-mappings/clients/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "cr1", "name": "auditor", "clientRole": true}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/admin/realms/demo/clients/c1/roles/auditor"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .create_client_role(
            TOKEN,
            REALM,
            "c1",
            &Role {
                name: Some("auditor".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(created, "auditor");

    let roles = client
        .get_client_roles(
            TOKEN,
            REALM,
            "c1",
            &GetRoleParams {
                brief_representation: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(roles[0].client_role, Some(true));

    let single = client
        .get_client_role(TOKEN, REALM, "c1", "auditor")
        .await
        .unwrap();
    assert_eq!(single.id.as_deref(), Some("cr1"));

    let mapped = client
        .get_client_roles_by_user_id(TOKEN, REALM, "c1", "u1")
        .await
        .unwrap();
    assert_eq!(mapped[0].name.as_deref(), Some("auditor"));

    client
        .delete_client_role(TOKEN, REALM, "c1", "auditor")
        .await
        .unwrap();
}

#[tokio::test]
async fn it_encodes_role_names_in_paths() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/roles/Power%20User%2FAdmin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Power User/Admin"})))
        .expect(1)
        .mount(&server)
        .await;

    let role = client
        .get_realm_role(TOKEN, REALM, "Power User/Admin")
        .await
        .unwrap();

    assert_eq!(role.name.as_deref(), Some("Power User/Admin"));
}

#[tokio::test]
async fn it_decodes_created_role_names_from_location() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/admin/realms/demo/roles"))
        .respond_with(ResponseTemplate::new(201).insert_header(
            "Location",
            format!("{}/admin/realms/demo/roles/Power%20User", server.uri()),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/roles/Power%20User"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Power User"})))
        .expect(1)
        .mount(&server)
        .await;

    let id = client
        .create_realm_role(
            TOKEN,
            REALM,
            &Role {
                name: Some("Power User".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(id, "Power User");

    let role = client.get_realm_role(TOKEN, REALM, &id).await.unwrap();
    assert_eq!(role.name.as_deref(), Some("Power User"));
}
