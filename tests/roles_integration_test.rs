use datadog_api_client::{
    models::{RelationshipToPermission, RelationshipToUser, RoleCreateRequest, RoleUpdateAttributes, RoleUpdateRequest, RolesSort},
    Configuration, DatadogClient, DatadogError, ListRoleUsersOptionalParams, ListRolesOptionalParams,
};
use serde_json::json;
use uuid::Uuid;
use wiremock::{
    matchers::{body_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

/// Helper to create a client pointed at a mock server
async fn create_test_client() -> (MockServer, DatadogClient) {
    let server = MockServer::start().await;
    let config = Configuration::new()
        .with_api_key("test-api-key")
        .with_app_key("test-app-key")
        .with_base_url(server.uri())
        .expect("Mock server URL should parse");
    let client = DatadogClient::new(config).expect("Failed to create client");
    (server, client)
}

fn role_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "type": "roles",
        "attributes": {
            "name": name,
            "user_count": 3,
            "created_at": "2024-02-01T10:00:00.000Z"
        },
        "relationships": {
            "permissions": {"data": [{"id": "p1", "type": "permissions"}]}
        }
    })
}

/// Test listing roles with paging, sort and filter
#[tokio::test]
async fn test_list_roles() {
    let _ = env_logger::try_init();
    let (server, client) = create_test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/roles"))
        .and(query_param("page[size]", "2"))
        .and(query_param("page[number]", "0"))
        .and(query_param("sort", "-name"))
        .and(query_param("filter", "admin"))
        .and(header("DD-API-KEY", "test-api-key"))
        .and(header("DD-APPLICATION-KEY", "test-app-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [role_json("r1", "Admin"), role_json("r2", "Admin RO")],
            "meta": {"page": {"total_count": 2, "total_filtered_count": 2}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = ListRolesOptionalParams::default()
        .page_size(2)
        .page_number(0)
        .sort(RolesSort::NameDescending)
        .filter("admin");
    let roles = client.roles().list_roles(params).await.expect("Failed to list roles");

    assert_eq!(roles.data.len(), 2);
    assert_eq!(roles.data[0].id.as_deref(), Some("r1"));
    let attributes = roles.data[1].attributes.as_ref().expect("Role should have attributes");
    assert_eq!(attributes.name.as_deref(), Some("Admin RO"));
    assert_eq!(attributes.user_count, Some(3));
    let page = roles.meta.and_then(|meta| meta.page).expect("Response should carry paging");
    assert_eq!(page.total_count, Some(2));
}

/// Test creating a role sends the expected payload
#[tokio::test]
async fn test_create_role() {
    let _ = env_logger::try_init();
    let (server, client) = create_test_client().await;
    let name = format!("test-role-{}", Uuid::new_v4());

    Mock::given(method("POST"))
        .and(path("/api/v2/roles"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "data": {"attributes": {"name": name}, "type": "roles"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": role_json("r9", &name)})))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .roles()
        .create_role(&RoleCreateRequest::new(&name))
        .await
        .expect("Failed to create role");

    let role = created.data.expect("Response should contain the role");
    assert_eq!(role.id.as_deref(), Some("r9"));
    assert_eq!(role.attributes.and_then(|a| a.name), Some(name));
}

/// Test a documented error status carries the decoded error payload
#[tokio::test]
async fn test_get_role_not_found() {
    let _ = env_logger::try_init();
    let (server, client) = create_test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/roles/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": ["Role not found"]})))
        .mount(&server)
        .await;

    let err = client.roles().get_role("missing").await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    assert_eq!(err.to_string(), "404 Not Found");

    let DatadogError::Api(api_error) = err else {
        panic!("expected an API error");
    };
    assert_eq!(api_error.errors(), ["Role not found".to_string()]);
    assert_eq!(api_error.body(), br#"{"errors":["Role not found"]}"#);
}

/// Test an undocumented status keeps only the raw body
#[tokio::test]
async fn test_get_role_undocumented_status() {
    let _ = env_logger::try_init();
    let (server, client) = create_test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/roles/r1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"errors": ["boom"]})))
        .mount(&server)
        .await;

    let err = client.roles().get_role("r1").await.unwrap_err();
    let DatadogError::Api(api_error) = err else {
        panic!("expected an API error");
    };
    assert_eq!(api_error.status().as_u16(), 500);
    assert!(api_error.model().is_none());
    assert!(api_error.errors().is_empty());
    assert_eq!(api_error.to_string(), "500 Internal Server Error");
}

/// Test a documented status with a foreign body still yields an API error
#[tokio::test]
async fn test_error_body_that_does_not_decode() {
    let _ = env_logger::try_init();
    let (server, client) = create_test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/roles/r1"))
        .respond_with(ResponseTemplate::new(403).set_body_string("<html>forbidden</html>"))
        .mount(&server)
        .await;

    let err = client.roles().get_role("r1").await.unwrap_err();
    let DatadogError::Api(api_error) = err else {
        panic!("expected an API error");
    };
    assert!(api_error.model().is_none());
    assert_eq!(api_error.body(), b"<html>forbidden</html>");
}

/// Test a success body that does not match the model is reported with the raw body
#[tokio::test]
async fn test_success_body_that_does_not_decode() {
    let _ = env_logger::try_init();
    let (server, client) = create_test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/roles/r1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client.roles().get_role("r1").await.unwrap_err();
    assert!(matches!(err, DatadogError::Decode { .. }));
    assert_eq!(err.body(), Some(&b"<html>maintenance</html>"[..]));
}

/// Test a role with an unknown type is kept raw without failing the listing
#[tokio::test]
async fn test_list_roles_with_unknown_role_type() {
    let _ = env_logger::try_init();
    let (server, client) = create_test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                role_json("r1", "Admin"),
                {"id": "r2", "type": "custom_roles", "attributes": {"name": "Custom"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let roles = client
        .roles()
        .list_roles(ListRolesOptionalParams::default())
        .await
        .expect("Failed to list roles");

    assert_eq!(roles.data.len(), 2);
    assert_eq!(roles.data[0].id.as_deref(), Some("r1"));
    assert!(!roles.data[0].is_unparsed());
    assert!(roles.data[1].is_unparsed());
    assert_eq!(
        roles.data[1].unparsed_object.as_ref().and_then(|raw| raw.get("id")),
        Some(&json!("r2"))
    );
}

/// Test an empty success body yields an empty model
#[tokio::test]
async fn test_empty_success_body() {
    let _ = env_logger::try_init();
    let (server, client) = create_test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/roles"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let roles = client
        .roles()
        .list_roles(ListRolesOptionalParams::default())
        .await
        .expect("Empty body should decode");
    assert!(roles.data.is_empty());
    assert!(roles.meta.is_none());
}

/// Test role ids are escaped in the path
#[tokio::test]
async fn test_role_id_is_path_escaped() {
    let _ = env_logger::try_init();
    let (server, client) = create_test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/roles/my%20role"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": role_json("my role", "Mine")})))
        .expect(1)
        .mount(&server)
        .await;

    let role = client.roles().get_role("my role").await.expect("Failed to get role");
    assert_eq!(role.data.and_then(|r| r.id).as_deref(), Some("my role"));
}

/// Test deleting a role with an empty response
#[tokio::test]
async fn test_delete_role() {
    let _ = env_logger::try_init();
    let (server, client) = create_test_client().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v2/roles/r1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.roles().delete_role("r1").await.expect("Failed to delete role");
}

/// Test cloning a role, including the conflict status
#[tokio::test]
async fn test_clone_role() {
    let _ = env_logger::try_init();
    let (server, client) = create_test_client().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/roles/r1/clone"))
        .and(body_json(json!({"data": {"attributes": {"name": "copy"}, "type": "roles"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": role_json("r2", "copy")})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v2/roles/r1/clone"))
        .and(body_json(json!({"data": {"attributes": {"name": "taken"}, "type": "roles"}})))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"errors": ["already exists"]})))
        .mount(&server)
        .await;

    let roles = client.roles();
    let cloned = roles
        .clone_role("r1", &datadog_api_client::models::RoleCloneRequest::new("copy"))
        .await
        .expect("Failed to clone role");
    assert_eq!(cloned.data.and_then(|r| r.id).as_deref(), Some("r2"));

    let err = roles
        .clone_role("r1", &datadog_api_client::models::RoleCloneRequest::new("taken"))
        .await
        .unwrap_err();
    let DatadogError::Api(api_error) = err else {
        panic!("expected an API error");
    };
    assert_eq!(api_error.errors(), ["already exists".to_string()]);
}

/// Test updating a role and the validation failure status
#[tokio::test]
async fn test_update_role() {
    let _ = env_logger::try_init();
    let (server, client) = create_test_client().await;

    Mock::given(method("PATCH"))
        .and(path("/api/v2/roles/r1"))
        .and(body_json(json!({
            "data": {"attributes": {"name": "renamed"}, "id": "r1", "type": "roles"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": role_json("r1", "renamed")})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/v2/roles/r2"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"errors": ["id mismatch"]})))
        .mount(&server)
        .await;

    let attributes = RoleUpdateAttributes {
        name: Some("renamed".into()),
        ..Default::default()
    };
    let updated = client
        .roles()
        .update_role("r1", &RoleUpdateRequest::new("r1", attributes.clone()))
        .await
        .expect("Failed to update role");
    assert_eq!(
        updated.data.and_then(|r| r.attributes).and_then(|a| a.name).as_deref(),
        Some("renamed")
    );

    let err = client
        .roles()
        .update_role("r2", &RoleUpdateRequest::new("r1", attributes))
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(422));
}

/// Test permission grant, listing and removal
#[tokio::test]
async fn test_role_permissions() {
    let _ = env_logger::try_init();
    let (server, client) = create_test_client().await;
    let permissions = json!({
        "data": [{
            "id": "p1",
            "type": "permissions",
            "attributes": {"name": "logs_read_data", "restricted": false, "group_name": "Logs"}
        }]
    });
    let relationship = json!({"data": {"id": "p1", "type": "permissions"}});

    Mock::given(method("POST"))
        .and(path("/api/v2/roles/r1/permissions"))
        .and(body_json(relationship.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(permissions.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/roles/r1/permissions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(permissions.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/roles/r1/permissions"))
        .and(body_json(relationship))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/permissions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(permissions))
        .expect(1)
        .mount(&server)
        .await;

    let roles = client.roles();
    let granted = roles
        .add_permission_to_role("r1", &RelationshipToPermission::new("p1"))
        .await
        .expect("Failed to grant permission");
    assert_eq!(granted.data[0].id.as_deref(), Some("p1"));

    let listed = roles.list_role_permissions("r1").await.expect("Failed to list permissions");
    let attributes = listed.data[0].attributes.as_ref().expect("Permission should have attributes");
    assert_eq!(attributes.name.as_deref(), Some("logs_read_data"));
    assert_eq!(attributes.restricted, Some(false));

    let remaining = roles
        .remove_permission_from_role("r1", &RelationshipToPermission::new("p1"))
        .await
        .expect("Failed to revoke permission");
    assert!(remaining.data.is_empty());

    let all = roles.list_permissions().await.expect("Failed to list all permissions");
    assert_eq!(all.data.len(), 1);
}

/// Test adding, listing and removing role users
#[tokio::test]
async fn test_role_users() {
    let _ = env_logger::try_init();
    let (server, client) = create_test_client().await;
    let users = json!({
        "data": [{
            "id": "u1",
            "type": "users",
            "attributes": {"email": "jane@example.com", "name": null, "title": "SRE"}
        }],
        "meta": {"page": {"total_count": 1}}
    });
    let relationship = json!({"data": {"id": "u1", "type": "users"}});

    Mock::given(method("POST"))
        .and(path("/api/v2/roles/r1/users"))
        .and(body_json(relationship.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(users.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/roles/r1/users"))
        .and(query_param("sort", "-email"))
        .and(query_param("page[size]", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/roles/r1/users"))
        .and(body_json(relationship))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let roles = client.roles();
    let added = roles
        .add_user_to_role("r1", &RelationshipToUser::new("u1"))
        .await
        .expect("Failed to add user");
    let attributes = added.data[0].attributes.as_ref().expect("User should have attributes");
    assert!(attributes.name.is_null());
    assert_eq!(attributes.title.value().map(String::as_str), Some("SRE"));

    let listed = roles
        .list_role_users(
            "r1",
            ListRoleUsersOptionalParams::default().sort("-email").page_size(50),
        )
        .await
        .expect("Failed to list role users");
    assert_eq!(listed.data.len(), 1);

    let remaining = roles
        .remove_user_from_role("r1", &RelationshipToUser::new("u1"))
        .await
        .expect("Failed to remove user");
    assert!(remaining.data.is_empty());
}
