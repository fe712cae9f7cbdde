use super::{exactly_one, try_variant};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

string_enum! {
    /// Schema version being used
    pub enum ServiceDefinitionV1Version {
        V1 = "v1",
    }
}

string_enum! {
    /// Schema version being used
    pub enum ServiceDefinitionV2Version {
        V2 = "v2",
    }
}

string_enum! {
    /// Link type
    pub enum ServiceDefinitionV1ResourceType {
        Doc = "doc",
        Wiki = "wiki",
        Runbook = "runbook",
        Url = "url",
        Repo = "repo",
        Dashboard = "dashboard",
        Oncall = "oncall",
        Code = "code",
        Link = "link",
    }
}

string_enum! {
    /// Link type
    pub enum ServiceDefinitionV2LinkType {
        Doc = "doc",
        Wiki = "wiki",
        Runbook = "runbook",
        Url = "url",
        Repo = "repo",
        Dashboard = "dashboard",
        Oncall = "oncall",
        Code = "code",
        Link = "link",
    }
}

string_enum! {
    /// Opsgenie instance region
    pub enum ServiceDefinitionV1OpsgenieRegion {
        Us = "US",
        Eu = "EU",
    }
}

string_enum! {
    /// Opsgenie instance region
    pub enum ServiceDefinitionV2OpsgenieRegion {
        Us = "US",
        Eu = "EU",
    }
}

string_enum! {
    /// Contact type
    pub enum ServiceDefinitionV2EmailType {
        Email = "email",
    }
}

string_enum! {
    /// Contact type
    pub enum ServiceDefinitionV2SlackType {
        Slack = "slack",
    }
}

string_enum! {
    /// Contact type
    pub enum ServiceDefinitionV2MSTeamsType {
        MicrosoftTeams = "microsoft-teams",
    }
}

/// Contact information about the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionV1Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack: Option<String>,
}

/// Service's external links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionV1Resource {
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: ServiceDefinitionV1ResourceType,
    pub url: String,
}

/// Basic information about a service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionV1Info {
    #[serde(rename = "dd-service")]
    pub dd_service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "display-name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "service-tier", skip_serializing_if = "Option::is_none")]
    pub service_tier: Option<String>,
}

/// Opsgenie integration for the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionV1Opsgenie {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<ServiceDefinitionV1OpsgenieRegion>,
    #[serde(rename = "service-url")]
    pub service_url: String,
}

/// Third party integrations that Datadog supports
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionV1Integrations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opsgenie: Option<ServiceDefinitionV1Opsgenie>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagerduty: Option<String>,
}

/// Org related information about the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionV1Org {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

/// Deprecated - Service definition V1 for providing additional service metadata and integrations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionV1 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<ServiceDefinitionV1Contact>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extensions: Map<String, Value>,
    #[serde(rename = "external-resources", default, skip_serializing_if = "Vec::is_empty")]
    pub external_resources: Vec<ServiceDefinitionV1Resource>,
    pub info: ServiceDefinitionV1Info,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrations: Option<ServiceDefinitionV1Integrations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<ServiceDefinitionV1Org>,
    #[serde(rename = "schema-version")]
    pub schema_version: ServiceDefinitionV1Version,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Service owner's email
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionV2Email {
    pub contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub contact_type: ServiceDefinitionV2EmailType,
}

/// Service owner's Slack channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionV2Slack {
    pub contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub contact_type: ServiceDefinitionV2SlackType,
}

/// Service owner's Microsoft Teams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionV2MSTeams {
    pub contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub contact_type: ServiceDefinitionV2MSTeamsType,
}

/// Service owner's contacts information
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceDefinitionV2Contact {
    Email(ServiceDefinitionV2Email),
    Slack(ServiceDefinitionV2Slack),
    MSTeams(ServiceDefinitionV2MSTeams),
    UnparsedObject(Value),
}

impl ServiceDefinitionV2Contact {
    pub fn email(address: impl Into<String>) -> Self {
        Self::Email(ServiceDefinitionV2Email {
            contact: address.into(),
            name: None,
            contact_type: ServiceDefinitionV2EmailType::Email,
        })
    }

    pub fn slack(channel_url: impl Into<String>) -> Self {
        Self::Slack(ServiceDefinitionV2Slack {
            contact: channel_url.into(),
            name: None,
            contact_type: ServiceDefinitionV2SlackType::Slack,
        })
    }
}

impl Serialize for ServiceDefinitionV2Contact {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Email(contact) => contact.serialize(serializer),
            Self::Slack(contact) => contact.serialize(serializer),
            Self::MSTeams(contact) => contact.serialize(serializer),
            Self::UnparsedObject(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ServiceDefinitionV2Contact {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let decoded = exactly_one([
            try_variant(&value).map(Self::Email),
            try_variant(&value).map(Self::Slack),
            try_variant(&value).map(Self::MSTeams),
        ]);
        Ok(decoded.unwrap_or(Self::UnparsedObject(value)))
    }
}

/// Service documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionV2Doc {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    pub url: String,
}

/// Opsgenie integration for the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionV2Opsgenie {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<ServiceDefinitionV2OpsgenieRegion>,
    #[serde(rename = "service-url")]
    pub service_url: String,
}

/// Third party integrations that Datadog supports
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionV2Integrations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opsgenie: Option<ServiceDefinitionV2Opsgenie>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagerduty: Option<String>,
}

/// Service's external links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionV2Link {
    pub name: String,
    #[serde(rename = "type")]
    pub link_type: ServiceDefinitionV2LinkType,
    pub url: String,
}

/// Service code repositories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionV2Repo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    pub url: String,
}

/// Service definition V2 for providing service metadata and integrations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionV2 {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<ServiceDefinitionV2Contact>,
    #[serde(rename = "dd-service")]
    pub dd_service: String,
    #[serde(rename = "dd-team", skip_serializing_if = "Option::is_none")]
    pub dd_team: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<ServiceDefinitionV2Doc>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extensions: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrations: Option<ServiceDefinitionV2Integrations>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<ServiceDefinitionV2Link>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repos: Vec<ServiceDefinitionV2Repo>,
    #[serde(rename = "schema-version")]
    pub schema_version: ServiceDefinitionV2Version,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

impl ServiceDefinitionV2 {
    pub fn new(dd_service: impl Into<String>) -> Self {
        Self {
            contacts: Vec::new(),
            dd_service: dd_service.into(),
            dd_team: None,
            docs: Vec::new(),
            extensions: Map::new(),
            integrations: None,
            links: Vec::new(),
            repos: Vec::new(),
            schema_version: ServiceDefinitionV2Version::V2,
            tags: Vec::new(),
            team: None,
        }
    }
}

/// Service definition schema, either version 1 or version 2
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceDefinitionSchema {
    V1(Box<ServiceDefinitionV1>),
    V2(Box<ServiceDefinitionV2>),
    UnparsedObject(Value),
}

impl Serialize for ServiceDefinitionSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::V1(schema) => schema.serialize(serializer),
            Self::V2(schema) => schema.serialize(serializer),
            Self::UnparsedObject(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ServiceDefinitionSchema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let decoded = exactly_one([
            try_variant(&value).map(|schema| Self::V1(Box::new(schema))),
            try_variant(&value).map(|schema| Self::V2(Box::new(schema))),
        ]);
        Ok(decoded.unwrap_or(Self::UnparsedObject(value)))
    }
}

/// Create service definitions request: a V2 definition, or raw YAML/JSON text
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceDefinitionsCreateRequest {
    V2(Box<ServiceDefinitionV2>),
    Raw(String),
    UnparsedObject(Value),
}

impl From<ServiceDefinitionV2> for ServiceDefinitionsCreateRequest {
    fn from(definition: ServiceDefinitionV2) -> Self {
        Self::V2(Box::new(definition))
    }
}

impl Serialize for ServiceDefinitionsCreateRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::V2(definition) => definition.serialize(serializer),
            Self::Raw(text) => text.serialize(serializer),
            Self::UnparsedObject(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ServiceDefinitionsCreateRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let decoded = exactly_one([
            try_variant(&value).map(|definition| Self::V2(Box::new(definition))),
            try_variant(&value).map(Self::Raw),
        ]);
        Ok(decoded.unwrap_or(Self::UnparsedObject(value)))
    }
}

/// Schema validation warnings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionMetaWarnings {
    #[serde(rename = "instance-location", skip_serializing_if = "Option::is_none")]
    pub instance_location: Option<String>,
    #[serde(rename = "keyword-location", skip_serializing_if = "Option::is_none")]
    pub keyword_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Metadata about a service definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionMeta {
    #[serde(rename = "github-html-url", skip_serializing_if = "Option::is_none")]
    pub github_html_url: Option<String>,
    #[serde(rename = "ingested-schema-version", skip_serializing_if = "Option::is_none")]
    pub ingested_schema_version: Option<String>,
    #[serde(rename = "ingestion-source", skip_serializing_if = "Option::is_none")]
    pub ingestion_source: Option<String>,
    #[serde(rename = "last-modified-time", skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(rename = "origin-detail", skip_serializing_if = "Option::is_none")]
    pub origin_detail: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ServiceDefinitionMetaWarnings>,
}

/// Service definition attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionDataAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ServiceDefinitionMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<ServiceDefinitionSchema>,
}

/// Service definition data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct ServiceDefinitionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ServiceDefinitionDataAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
    #[serde(skip)]
    pub unparsed_object: Option<Value>,
}

unparsed_fallback!(ServiceDefinitionData);

/// Get service definition response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionGetResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ServiceDefinitionData>,
}

/// Create service definitions response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionCreateResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<ServiceDefinitionData>,
}

/// List of service definitions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinitionsListResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<ServiceDefinitionData>,
}
