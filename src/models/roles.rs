use super::{
    PermissionsType, RelationshipToPermissions, RelationshipToUsers, ResponseMetaAttributes,
    RolesType,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

string_enum! {
    /// Sorting options for roles
    pub enum RolesSort {
        NameAscending = "name",
        NameDescending = "-name",
        ModifiedAtAscending = "modified_at",
        ModifiedAtDescending = "-modified_at",
        UserCountAscending = "user_count",
        UserCountDescending = "-user_count",
    }
}

impl Default for RolesSort {
    fn default() -> Self {
        Self::NameAscending
    }
}

/// Attributes of the role
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_count: Option<i64>,
}

/// Relationships of a role returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleResponseRelationships {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<RelationshipToPermissions>,
}

/// Relationships a role is created or updated with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleRelationships {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<RelationshipToPermissions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<RelationshipToUsers>,
}

/// Role object returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Role {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<RoleAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<RoleResponseRelationships>,
    #[serde(rename = "type")]
    pub role_type: RolesType,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
    #[serde(skip)]
    pub unparsed_object: Option<Value>,
}

/// Response containing information about a single role
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Role>,
}

/// Response containing information about multiple roles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RolesResponse {
    #[serde(default)]
    pub data: Vec<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMetaAttributes>,
}

/// Attributes of a created role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleCreateAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
    pub name: String,
}

/// Data related to the creation of a role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleCreateData {
    pub attributes: RoleCreateAttributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<RoleRelationships>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub role_type: Option<RolesType>,
}

/// Create a role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleCreateRequest {
    pub data: RoleCreateData,
}

impl RoleCreateRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            data: RoleCreateData {
                attributes: RoleCreateAttributes {
                    created_at: None,
                    modified_at: None,
                    name: name.into(),
                },
                relationships: None,
                role_type: Some(RolesType::Roles),
            },
        }
    }

    pub fn with_relationships(mut self, relationships: RoleRelationships) -> Self {
        self.data.relationships = Some(relationships);
        self
    }
}

/// Response containing information about a created role
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleCreateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Role>,
}

/// Attributes of the role being updated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleUpdateAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_count: Option<i32>,
}

/// Data related to the update of a role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleUpdateData {
    pub attributes: RoleUpdateAttributes,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<RoleRelationships>,
    #[serde(rename = "type")]
    pub role_type: RolesType,
}

/// Update a role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleUpdateRequest {
    pub data: RoleUpdateData,
}

impl RoleUpdateRequest {
    pub fn new(role_id: impl Into<String>, attributes: RoleUpdateAttributes) -> Self {
        Self {
            data: RoleUpdateData {
                attributes,
                id: role_id.into(),
                relationships: None,
                role_type: RolesType::Roles,
            },
        }
    }
}

/// Response containing information about an updated role
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleUpdateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Role>,
}

/// Attributes required to clone a role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleCloneAttributes {
    pub name: String,
}

/// Data for the clone role request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleClone {
    pub attributes: RoleCloneAttributes,
    #[serde(rename = "type")]
    pub role_type: RolesType,
}

/// Request to create a role by cloning an existing role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleCloneRequest {
    pub data: RoleClone,
}

impl RoleCloneRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            data: RoleClone {
                attributes: RoleCloneAttributes { name: name.into() },
                role_type: RolesType::Roles,
            },
        }
    }
}

/// Attributes of a permission
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted: Option<bool>,
}

/// Permission object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Permission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<PermissionAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub permission_type: PermissionsType,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
    #[serde(skip)]
    pub unparsed_object: Option<Value>,
}

unparsed_fallback!(Role, Permission);

/// Payload with API-returned permissions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionsResponse {
    #[serde(default)]
    pub data: Vec<Permission>,
}
