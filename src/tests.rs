use crate::{
    models::*, ApiKeyAuth, AuthScheme, Authentication, BearerAuth, NoAuth, API_KEY_HEADER,
    APP_KEY_HEADER,
};
use reqwest::header::{HeaderMap, AUTHORIZATION};
use serde_json::json;

#[test]
fn string_enums_reject_unknown_values() {
    assert_eq!("-name".parse::<RolesSort>().unwrap(), RolesSort::NameDescending);
    assert_eq!(RolesSort::UserCountAscending.to_string(), "user_count");
    assert!(RolesSort::is_valid("modified_at"));
    assert!(!RolesSort::is_valid("created_at"));

    let err = "pc50".parse::<LogsAggregationFunction>().unwrap_err();
    assert_eq!(err.value, "pc50");
    assert_eq!(err.type_name, "LogsAggregationFunction");
    assert!(err.allowed.contains(&"pc99"));

    assert!(serde_json::from_value::<LogsStorageTier>(json!("flex")).is_err());
    assert_eq!(
        serde_json::from_value::<LogsStorageTier>(json!("online-archives")).unwrap(),
        LogsStorageTier::OnlineArchives
    );
}

#[test]
fn invalid_enum_inside_a_model_keeps_it_unparsed() {
    let raw = json!({"id": "1", "type": "users"});
    let role: Role = serde_json::from_value(raw.clone()).unwrap();
    assert!(role.is_unparsed());
    assert_eq!(role.id, None);
    assert_eq!(serde_json::to_value(&role).unwrap(), raw);
}

#[test]
fn one_unknown_role_does_not_drop_the_page() {
    let response: RolesResponse = serde_json::from_value(json!({
        "data": [
            {"id": "r1", "type": "roles", "attributes": {"name": "Admin"}},
            {"id": "r2", "type": "custom_roles", "attributes": {"name": "Custom"}}
        ],
        "meta": {"page": {"total_count": 2}}
    }))
    .unwrap();

    assert_eq!(response.data.len(), 2);
    assert!(!response.data[0].is_unparsed());
    assert_eq!(response.data[0].id.as_deref(), Some("r1"));
    assert_eq!(
        response.data[1].unparsed_object.as_ref().and_then(|raw| raw.get("type")),
        Some(&json!("custom_roles"))
    );
}

#[test]
fn unknown_members_are_kept() {
    let permission: Permission = serde_json::from_value(json!({
        "id": "p1",
        "type": "permissions",
        "scope": "org"
    }))
    .unwrap();
    assert!(!permission.is_unparsed());
    assert_eq!(permission.additional_properties["scope"], json!("org"));
    assert_eq!(
        serde_json::to_value(&permission).unwrap(),
        json!({"id": "p1", "type": "permissions", "scope": "org"})
    );
}

#[test]
fn nullable_user_fields_round_trip_their_state() {
    let attributes: UserAttributes = serde_json::from_value(json!({
        "email": "jane@example.com",
        "name": null
    }))
    .unwrap();
    assert!(attributes.name.is_null());
    assert!(attributes.title.is_absent());

    let encoded = serde_json::to_value(&attributes).unwrap();
    assert_eq!(encoded, json!({"email": "jane@example.com", "name": null}));
}

#[test]
fn bucket_values_decode_each_shape() {
    let bucket: LogsAggregateBucket = serde_json::from_value(json!({
        "by": {"service": "web"},
        "computes": {
            "c0": 42.0,
            "c1": "n/a",
            "c2": [{"time": "2024-01-01T00:00:00Z", "value": 3.0}],
            "c3": {"unexpected": true}
        }
    }))
    .unwrap();

    assert_eq!(bucket.computes["c0"], LogsAggregateBucketValue::SingleNumber(42.0));
    assert_eq!(
        bucket.computes["c1"],
        LogsAggregateBucketValue::SingleString("n/a".into())
    );
    assert!(matches!(
        &bucket.computes["c2"],
        LogsAggregateBucketValue::Timeseries(points) if points.len() == 1
    ));
    assert!(matches!(
        bucket.computes["c3"],
        LogsAggregateBucketValue::UnparsedObject(_)
    ));
}

#[test]
fn group_by_total_and_missing_keep_their_json_shape() {
    let group_by: LogsGroupBy = serde_json::from_value(json!({
        "facet": "host",
        "missing": "unknown",
        "total": true
    }))
    .unwrap();
    assert_eq!(group_by.missing, Some(LogsGroupByMissing::String("unknown".into())));
    assert_eq!(group_by.total, Some(LogsGroupByTotal::Boolean(true)));

    let encoded = serde_json::to_value(&group_by).unwrap();
    assert_eq!(encoded["total"], json!(true));
    assert_eq!(encoded["missing"], json!("unknown"));
}

#[test]
fn service_definition_schema_picks_version() {
    let v2: ServiceDefinitionSchema = serde_json::from_value(json!({
        "dd-service": "checkout",
        "schema-version": "v2",
        "contacts": [
            {"type": "email", "contact": "team@example.com"},
            {"type": "slack", "contact": "https://slack.example.com/archives/C1"},
            {"type": "pager", "contact": "555"}
        ]
    }))
    .unwrap();

    let ServiceDefinitionSchema::V2(definition) = v2 else {
        panic!("expected a v2 schema");
    };
    assert!(matches!(definition.contacts[0], ServiceDefinitionV2Contact::Email(_)));
    assert!(matches!(definition.contacts[1], ServiceDefinitionV2Contact::Slack(_)));
    assert!(matches!(
        definition.contacts[2],
        ServiceDefinitionV2Contact::UnparsedObject(_)
    ));

    let v1: ServiceDefinitionSchema = serde_json::from_value(json!({
        "schema-version": "v1",
        "info": {"dd-service": "legacy"}
    }))
    .unwrap();
    assert!(matches!(v1, ServiceDefinitionSchema::V1(_)));

    let unknown: ServiceDefinitionSchema =
        serde_json::from_value(json!({"schema-version": "v9"})).unwrap();
    assert!(matches!(unknown, ServiceDefinitionSchema::UnparsedObject(_)));
}

#[test]
fn raw_service_definition_serializes_as_string() {
    let request = ServiceDefinitionsCreateRequest::Raw("schema-version: v2\ndd-service: x\n".into());
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!("schema-version: v2\ndd-service: x\n")
    );

    let request = ServiceDefinitionsCreateRequest::from(ServiceDefinitionV2::new("checkout"));
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"dd-service": "checkout", "schema-version": "v2"})
    );
}

#[test]
fn incident_team_included_users_decode() {
    let response: IncidentTeamResponse = serde_json::from_value(json!({
        "data": {"id": "t1", "type": "teams", "attributes": {"name": "SRE"}},
        "included": [
            {"id": "u1", "type": "users", "attributes": {"handle": "jane"}},
            "not an object"
        ]
    }))
    .unwrap();
    assert!(matches!(response.included[0], IncidentTeamIncludedItems::User(_)));
    assert!(matches!(
        response.included[1],
        IncidentTeamIncludedItems::UnparsedObject(_)
    ));
}

#[test]
fn included_items_without_user_members_stay_unparsed() {
    for raw in [json!({}), json!({"kind": "team"}), json!({"id": "u1", "type": "teams"})] {
        let item: IncidentTeamIncludedItems = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(item, IncidentTeamIncludedItems::UnparsedObject(raw));
    }
}

#[test]
fn http_log_item_flattens_extra_properties() {
    let mut item = HTTPLogItem::new("disk full");
    item.service = Some("storage".into());
    item.additional_properties
        .insert("status".into(), "error".into());

    assert_eq!(
        serde_json::to_value(&item).unwrap(),
        json!({"message": "disk full", "service": "storage", "status": "error"})
    );
}

#[test]
fn api_key_auth_sends_only_declared_schemes() {
    let auth = ApiKeyAuth::new("api-123", "app-456");

    let mut headers = HeaderMap::new();
    tokio_test::block_on(auth.apply_auth(&mut headers, &[AuthScheme::ApiKey])).unwrap();
    assert_eq!(headers.get(API_KEY_HEADER).unwrap(), "api-123");
    assert!(headers.get(APP_KEY_HEADER).is_none());
    assert!(headers.get(API_KEY_HEADER).unwrap().is_sensitive());

    let mut headers = HeaderMap::new();
    tokio_test::block_on(
        auth.apply_auth(&mut headers, &[AuthScheme::ApiKey, AuthScheme::AppKey]),
    )
    .unwrap();
    assert_eq!(headers.get(APP_KEY_HEADER).unwrap(), "app-456");
}

#[test]
fn missing_keys_are_skipped() {
    let auth = ApiKeyAuth::api_key_only("api-123");
    let mut headers = HeaderMap::new();
    tokio_test::block_on(
        auth.apply_auth(&mut headers, &[AuthScheme::ApiKey, AuthScheme::AppKey]),
    )
    .unwrap();
    assert_eq!(headers.len(), 1);

    let mut headers = HeaderMap::new();
    tokio_test::block_on(NoAuth.apply_auth(&mut headers, &[AuthScheme::ApiKey])).unwrap();
    assert!(headers.is_empty());
}

#[test]
fn bearer_auth_sets_authorization() {
    let auth = BearerAuth::new("token");
    let mut headers = HeaderMap::new();
    tokio_test::block_on(auth.apply_auth(&mut headers, &[])).unwrap();
    assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer token");
}

#[test]
fn api_key_auth_debug_hides_keys() {
    let rendered = format!("{:?}", ApiKeyAuth::new("api-123", "app-456"));
    assert!(!rendered.contains("api-123"));
    assert!(rendered.contains("REDACTED"));
}
