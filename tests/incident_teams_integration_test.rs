use datadog_api_client::{
    models::{IncidentRelatedObject, IncidentTeamCreateRequest, IncidentTeamIncludedItems, IncidentTeamUpdateRequest},
    Configuration, DatadogClient, DatadogError, ListIncidentTeamsOptionalParams,
};
use serde_json::json;
use uuid::Uuid;
use wiremock::{
    matchers::{body_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const TEAM_OPERATIONS: [&str; 5] = [
    "v2.CreateIncidentTeam",
    "v2.DeleteIncidentTeam",
    "v2.GetIncidentTeam",
    "v2.ListIncidentTeams",
    "v2.UpdateIncidentTeam",
];

fn base_config(server: &MockServer) -> Configuration {
    Configuration::new()
        .with_api_key("test-api-key")
        .with_app_key("test-app-key")
        .with_base_url(server.uri())
        .expect("Mock server URL should parse")
}

/// Helper to create a client with the incident team operations enabled
async fn create_test_client() -> (MockServer, DatadogClient) {
    let server = MockServer::start().await;
    let config = TEAM_OPERATIONS
        .iter()
        .fold(base_config(&server), |config, op| config.with_unstable_operation(op, true));
    let client = DatadogClient::new(config).expect("Failed to create client");
    (server, client)
}

fn team_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "type": "teams",
        "attributes": {
            "name": name,
            "created": "2024-05-01T08:00:00Z",
            "modified": "2024-05-02T08:00:00Z"
        },
        "relationships": {
            "created_by": {"data": {"id": "u1", "type": "users"}}
        }
    })
}

/// Test that disabled unstable operations never reach the network
#[tokio::test]
async fn test_unstable_operations_disabled_by_default() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    let client = DatadogClient::new(base_config(&server)).expect("Failed to create client");

    let err = client
        .incident_teams()
        .list_incident_teams(ListIncidentTeamsOptionalParams::default())
        .await
        .unwrap_err();
    match err {
        DatadogError::UnstableOperationDisabled(operation) => {
            assert_eq!(operation, "v2.ListIncidentTeams")
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let err = client
        .incident_teams()
        .delete_incident_team("t1")
        .await
        .unwrap_err();
    assert!(matches!(err, DatadogError::UnstableOperationDisabled(_)));

    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

/// Test that the gate can be toggled on a configuration
#[tokio::test]
async fn test_unstable_operation_toggle() {
    let _ = env_logger::try_init();
    let mut config = Configuration::new();

    assert!(config.is_unstable_operation("v2.GetIncidentTeam"));
    assert!(!config.is_unstable_operation_enabled("v2.GetIncidentTeam"));
    assert!(config.set_unstable_operation_enabled("v2.GetIncidentTeam", true));
    assert!(config.is_unstable_operation_enabled("v2.GetIncidentTeam"));

    assert!(!config.is_unstable_operation("v2.ListRoles"));
    assert!(!config.set_unstable_operation_enabled("v2.ListRoles", true));
    assert!(!config.is_unstable_operation_enabled("v2.ListRoles"));
}

/// Test listing incident teams with paging and filter parameters
#[tokio::test]
async fn test_list_incident_teams() {
    let _ = env_logger::try_init();
    let (server, client) = create_test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/teams"))
        .and(query_param("include", "users"))
        .and(query_param("page[size]", "10"))
        .and(query_param("page[offset]", "20"))
        .and(query_param("filter", "sre"))
        .and(header("DD-API-KEY", "test-api-key"))
        .and(header("DD-APPLICATION-KEY", "test-app-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [team_json("t1", "sre-core")],
            "included": [{"id": "u1", "type": "users", "attributes": {"handle": "jane"}}],
            "meta": {"pagination": {"next_offset": 30, "offset": 20, "size": 10}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = ListIncidentTeamsOptionalParams::default()
        .include(IncidentRelatedObject::Users)
        .page_size(10)
        .page_offset(20)
        .filter("sre");
    let teams = client
        .incident_teams()
        .list_incident_teams(params)
        .await
        .expect("Failed to list incident teams");

    assert_eq!(teams.data.len(), 1);
    assert_eq!(teams.data[0].id.as_deref(), Some("t1"));
    assert!(matches!(teams.included[0], IncidentTeamIncludedItems::User(_)));
    let pagination = teams.meta.and_then(|m| m.pagination).expect("Response should carry paging");
    assert_eq!(pagination.next_offset, Some(30));
}

/// Test creating, fetching, updating and deleting an incident team
#[tokio::test]
async fn test_incident_team_lifecycle() {
    let _ = env_logger::try_init();
    let (server, client) = create_test_client().await;
    let name = format!("team-{}", Uuid::new_v4());

    Mock::given(method("POST"))
        .and(path("/api/v2/teams"))
        .and(body_json(json!({"data": {"attributes": {"name": name}, "type": "teams"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": team_json("t1", &name)})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/teams/t1"))
        .and(query_param("include", "users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": team_json("t1", &name),
            "included": [{"id": "u1", "type": "users", "attributes": {"name": null}}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/v2/teams/t1"))
        .and(body_json(json!({"data": {"attributes": {"name": "renamed"}, "type": "teams"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": team_json("t1", "renamed")})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/teams/t1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let teams = client.incident_teams();
    let created = teams
        .create_incident_team(&IncidentTeamCreateRequest::new(&name))
        .await
        .expect("Failed to create incident team");
    assert_eq!(created.data.id.as_deref(), Some("t1"));
    let creator = created
        .data
        .relationships
        .and_then(|r| r.created_by)
        .expect("Team should record its creator");
    assert_eq!(creator.data.id, "u1");

    let fetched = teams
        .get_incident_team("t1", Some(IncidentRelatedObject::Users))
        .await
        .expect("Failed to get incident team");
    let IncidentTeamIncludedItems::User(user) = &fetched.included[0] else {
        panic!("expected an included user");
    };
    assert!(user.attributes.as_ref().is_some_and(|a| a.name.is_null()));

    let updated = teams
        .update_incident_team("t1", &IncidentTeamUpdateRequest::new("renamed"))
        .await
        .expect("Failed to update incident team");
    assert_eq!(
        updated.data.attributes.and_then(|a| a.name).as_deref(),
        Some("renamed")
    );

    teams.delete_incident_team("t1").await.expect("Failed to delete incident team");
}

/// Test a documented error status on a gated operation
#[tokio::test]
async fn test_get_incident_team_unauthorized() {
    let _ = env_logger::try_init();
    let (server, client) = create_test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/teams/t1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"errors": ["Unauthorized"]})))
        .mount(&server)
        .await;

    let err = client
        .incident_teams()
        .get_incident_team("t1", None)
        .await
        .unwrap_err();
    let DatadogError::Api(api_error) = err else {
        panic!("expected an API error");
    };
    assert_eq!(api_error.status().as_u16(), 401);
    assert_eq!(api_error.errors(), ["Unauthorized".to_string()]);
}
