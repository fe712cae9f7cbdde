use super::{exactly_one, try_variant, RelationshipToUser, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

string_enum! {
    /// Incident Team resource type
    pub enum IncidentTeamType {
        Teams = "teams",
    }
}

impl Default for IncidentTeamType {
    fn default() -> Self {
        Self::Teams
    }
}

string_enum! {
    /// Object related to an incident
    pub enum IncidentRelatedObject {
        Users = "users",
    }
}

/// The incident team's attributes for a create request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentTeamCreateAttributes {
    pub name: String,
}

/// The incident team's attributes for an update request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentTeamUpdateAttributes {
    pub name: String,
}

/// The incident team's relationships
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentTeamRelationships {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<RelationshipToUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<RelationshipToUser>,
}

/// Incident Team data for a create request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentTeamCreateData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<IncidentTeamCreateAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<IncidentTeamRelationships>,
    #[serde(rename = "type")]
    pub team_type: IncidentTeamType,
}

/// Create request for an incident team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentTeamCreateRequest {
    pub data: IncidentTeamCreateData,
}

impl IncidentTeamCreateRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            data: IncidentTeamCreateData {
                attributes: Some(IncidentTeamCreateAttributes { name: name.into() }),
                relationships: None,
                team_type: IncidentTeamType::Teams,
            },
        }
    }
}

/// Incident Team data for an update request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentTeamUpdateData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<IncidentTeamUpdateAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<IncidentTeamRelationships>,
    #[serde(rename = "type")]
    pub team_type: IncidentTeamType,
}

/// Update request for an incident team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentTeamUpdateRequest {
    pub data: IncidentTeamUpdateData,
}

impl IncidentTeamUpdateRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            data: IncidentTeamUpdateData {
                attributes: Some(IncidentTeamUpdateAttributes { name: name.into() }),
                id: None,
                relationships: None,
                team_type: IncidentTeamType::Teams,
            },
        }
    }
}

/// The incident team's attributes from a response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentTeamResponseAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Incident Team data from a response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct IncidentTeamResponseData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<IncidentTeamResponseAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<IncidentTeamRelationships>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub team_type: Option<IncidentTeamType>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
    #[serde(skip)]
    pub unparsed_object: Option<Value>,
}

unparsed_fallback!(IncidentTeamResponseData);

/// An object related to an incident team which is present in the included payload
#[derive(Debug, Clone, PartialEq)]
pub enum IncidentTeamIncludedItems {
    User(Box<User>),
    UnparsedObject(Value),
}

impl Serialize for IncidentTeamIncludedItems {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::User(user) => user.serialize(serializer),
            Self::UnparsedObject(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for IncidentTeamIncludedItems {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let user = try_variant::<User>(&value).filter(|user| !user.is_unparsed());
        let decoded = exactly_one([user.map(|user| Self::User(Box::new(user)))]);
        Ok(decoded.unwrap_or(Self::UnparsedObject(value)))
    }
}

/// Response with an incident team payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentTeamResponse {
    pub data: IncidentTeamResponseData,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<IncidentTeamIncludedItems>,
}

/// Pagination properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentResponseMetaPagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

/// The metadata object containing pagination metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentResponseMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<IncidentResponseMetaPagination>,
}

/// Response with a list of incident team payloads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentTeamsResponse {
    #[serde(default)]
    pub data: Vec<IncidentTeamResponseData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<IncidentTeamIncludedItems>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<IncidentResponseMeta>,
}
