use super::Nullable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error payload returned by the API for documented failure statuses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub errors: Vec<String>,
}

string_enum! {
    /// Users resource type
    pub enum UsersType {
        Users = "users",
    }
}

impl Default for UsersType {
    fn default() -> Self {
        Self::Users
    }
}

string_enum! {
    /// Roles resource type
    pub enum RolesType {
        Roles = "roles",
    }
}

impl Default for RolesType {
    fn default() -> Self {
        Self::Roles
    }
}

string_enum! {
    /// Permissions resource type
    pub enum PermissionsType {
        Permissions = "permissions",
    }
}

impl Default for PermissionsType {
    fn default() -> Self {
        Self::Permissions
    }
}

/// Attributes of a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub title: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

/// Relationship data pointing at a role
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipToRoleData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub role_type: Option<RolesType>,
}

/// Relationship to a list of roles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipToRoles {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<RelationshipToRoleData>,
}

/// Relationships of a user object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserResponseRelationships {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<RelationshipToRoles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<Value>,
}

/// A user object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<UserAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<UserResponseRelationships>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UsersType>,
    #[serde(skip)]
    pub unparsed_object: Option<Value>,
}

unparsed_fallback!(User);

/// Pagination totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_filtered_count: Option<i64>,
}

/// Object describing meta attributes of a response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseMetaAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<Pagination>,
}

/// Response containing information about multiple users
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub data: Vec<User>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMetaAttributes>,
}

/// Relationship to user object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipToUserData {
    pub id: String,
    #[serde(rename = "type")]
    pub user_type: UsersType,
}

/// Relationship to a single user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipToUser {
    pub data: RelationshipToUserData,
}

impl RelationshipToUser {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            data: RelationshipToUserData {
                id: user_id.into(),
                user_type: UsersType::Users,
            },
        }
    }
}

/// Relationship to permission object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipToPermissionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub permission_type: Option<PermissionsType>,
}

/// Relationship to a single permission
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipToPermission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<RelationshipToPermissionData>,
}

impl RelationshipToPermission {
    pub fn new(permission_id: impl Into<String>) -> Self {
        Self {
            data: Some(RelationshipToPermissionData {
                id: Some(permission_id.into()),
                permission_type: Some(PermissionsType::Permissions),
            }),
        }
    }
}

/// Relationship to a list of permissions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipToPermissions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<RelationshipToPermissionData>,
}

/// Relationship to a list of users
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipToUsers {
    pub data: Vec<RelationshipToUserData>,
}
