use super::Operation;
use crate::{
    client::DatadogClient,
    error::DatadogResult,
    models::{
        PermissionsResponse, RelationshipToPermission, RelationshipToUser, RoleCloneRequest,
        RoleCreateRequest, RoleCreateResponse, RoleResponse, RoleUpdateRequest,
        RoleUpdateResponse, RolesResponse, RolesSort, UsersResponse,
    },
};
use log::{debug, info};
use reqwest::{Method, RequestBuilder};

const ADD_PERMISSION_TO_ROLE: Operation =
    Operation::new("RolesApi", "AddPermissionToRole", &[400, 403, 404, 429]);
const ADD_USER_TO_ROLE: Operation = Operation::new("RolesApi", "AddUserToRole", &[400, 403, 404, 429]);
const CLONE_ROLE: Operation = Operation::new("RolesApi", "CloneRole", &[400, 403, 404, 409, 429]);
const CREATE_ROLE: Operation = Operation::new("RolesApi", "CreateRole", &[400, 403, 429]);
const DELETE_ROLE: Operation = Operation::new("RolesApi", "DeleteRole", &[403, 404, 429]);
const GET_ROLE: Operation = Operation::new("RolesApi", "GetRole", &[403, 404, 429]);
const LIST_PERMISSIONS: Operation = Operation::new("RolesApi", "ListPermissions", &[400, 403, 429]);
const LIST_ROLE_PERMISSIONS: Operation =
    Operation::new("RolesApi", "ListRolePermissions", &[403, 404, 429]);
const LIST_ROLE_USERS: Operation = Operation::new("RolesApi", "ListRoleUsers", &[403, 404, 429]);
const LIST_ROLES: Operation = Operation::new("RolesApi", "ListRoles", &[403, 429]);
const REMOVE_PERMISSION_FROM_ROLE: Operation =
    Operation::new("RolesApi", "RemovePermissionFromRole", &[400, 403, 404, 429]);
const REMOVE_USER_FROM_ROLE: Operation =
    Operation::new("RolesApi", "RemoveUserFromRole", &[400, 403, 404, 429]);
const UPDATE_ROLE: Operation = Operation::new("RolesApi", "UpdateRole", &[400, 403, 404, 422, 429]);

/// Optional parameters for [`RolesApi::list_roles`]
#[derive(Debug, Clone, Default)]
pub struct ListRolesOptionalParams {
    pub page_size: Option<i64>,
    pub page_number: Option<i64>,
    pub sort: Option<RolesSort>,
    pub filter: Option<String>,
}

impl ListRolesOptionalParams {
    /// Size for a given page. The maximum allowed value is 100.
    pub fn page_size(mut self, value: i64) -> Self {
        self.page_size = Some(value);
        self
    }

    /// Specific page number to return.
    pub fn page_number(mut self, value: i64) -> Self {
        self.page_number = Some(value);
        self
    }

    /// Sort roles depending on the given field. Prefix with `-` for descending order.
    pub fn sort(mut self, value: RolesSort) -> Self {
        self.sort = Some(value);
        self
    }

    /// Filter all roles by the given string.
    pub fn filter(mut self, value: impl Into<String>) -> Self {
        self.filter = Some(value.into());
        self
    }

    fn apply(&self, mut req: RequestBuilder) -> RequestBuilder {
        if let Some(size) = self.page_size {
            req = req.query(&[("page[size]", size.to_string())]);
        }
        if let Some(number) = self.page_number {
            req = req.query(&[("page[number]", number.to_string())]);
        }
        if let Some(sort) = self.sort {
            req = req.query(&[("sort", sort.as_str())]);
        }
        if let Some(filter) = &self.filter {
            req = req.query(&[("filter", filter.as_str())]);
        }
        req
    }
}

/// Optional parameters for [`RolesApi::list_role_users`]
#[derive(Debug, Clone, Default)]
pub struct ListRoleUsersOptionalParams {
    pub page_size: Option<i64>,
    pub page_number: Option<i64>,
    pub sort: Option<String>,
    pub filter: Option<String>,
}

impl ListRoleUsersOptionalParams {
    pub fn page_size(mut self, value: i64) -> Self {
        self.page_size = Some(value);
        self
    }

    pub fn page_number(mut self, value: i64) -> Self {
        self.page_number = Some(value);
        self
    }

    /// User attribute to order results by, e.g. `-email`.
    pub fn sort(mut self, value: impl Into<String>) -> Self {
        self.sort = Some(value.into());
        self
    }

    /// Filter all users by the given string.
    pub fn filter(mut self, value: impl Into<String>) -> Self {
        self.filter = Some(value.into());
        self
    }

    fn apply(&self, mut req: RequestBuilder) -> RequestBuilder {
        if let Some(size) = self.page_size {
            req = req.query(&[("page[size]", size.to_string())]);
        }
        if let Some(number) = self.page_number {
            req = req.query(&[("page[number]", number.to_string())]);
        }
        if let Some(sort) = &self.sort {
            req = req.query(&[("sort", sort.as_str())]);
        }
        if let Some(filter) = &self.filter {
            req = req.query(&[("filter", filter.as_str())]);
        }
        req
    }
}

/// Roles API operations
pub struct RolesApi<'a> {
    client: &'a DatadogClient,
}

impl<'a> RolesApi<'a> {
    pub fn new(client: &'a DatadogClient) -> Self {
        Self { client }
    }

    /// Grant a permission to a role
    ///
    /// # Arguments
    /// * `role_id` - The unique identifier of the role
    /// * `body` - The permission to grant
    pub async fn add_permission_to_role(
        &self,
        role_id: &str,
        body: &RelationshipToPermission,
    ) -> DatadogResult<PermissionsResponse> {
        info!("Adding permission to role {}", role_id);
        let path = format!("/api/v2/roles/{}/permissions", urlencoding::encode(role_id));
        debug!("HTTP POST {}", path);

        let req = self.client.request(Method::POST, &ADD_PERMISSION_TO_ROLE, &path).await?;
        let req = DatadogClient::json_body(req, body, None)?;
        self.client.execute(req, &ADD_PERMISSION_TO_ROLE).await
    }

    /// Add a user to a role
    ///
    /// # Arguments
    /// * `role_id` - The unique identifier of the role
    /// * `body` - The user to add
    pub async fn add_user_to_role(
        &self,
        role_id: &str,
        body: &RelationshipToUser,
    ) -> DatadogResult<UsersResponse> {
        info!("Adding user {} to role {}", body.data.id, role_id);
        let path = format!("/api/v2/roles/{}/users", urlencoding::encode(role_id));
        debug!("HTTP POST {}", path);

        let req = self.client.request(Method::POST, &ADD_USER_TO_ROLE, &path).await?;
        let req = DatadogClient::json_body(req, body, None)?;
        self.client.execute(req, &ADD_USER_TO_ROLE).await
    }

    /// Clone an existing role under a new name
    pub async fn clone_role(
        &self,
        role_id: &str,
        body: &RoleCloneRequest,
    ) -> DatadogResult<RoleResponse> {
        info!("Cloning role {} as {}", role_id, body.data.attributes.name);
        let path = format!("/api/v2/roles/{}/clone", urlencoding::encode(role_id));
        debug!("HTTP POST {}", path);

        let req = self.client.request(Method::POST, &CLONE_ROLE, &path).await?;
        let req = DatadogClient::json_body(req, body, None)?;
        self.client.execute(req, &CLONE_ROLE).await
    }

    /// Create a new role for your organization
    pub async fn create_role(&self, body: &RoleCreateRequest) -> DatadogResult<RoleCreateResponse> {
        info!("Creating role {}", body.data.attributes.name);
        let path = "/api/v2/roles";
        debug!("HTTP POST {}", path);

        let req = self.client.request(Method::POST, &CREATE_ROLE, path).await?;
        let req = DatadogClient::json_body(req, body, None)?;
        self.client.execute(req, &CREATE_ROLE).await
    }

    /// Disable a role
    pub async fn delete_role(&self, role_id: &str) -> DatadogResult<()> {
        info!("Deleting role {}", role_id);
        let path = format!("/api/v2/roles/{}", urlencoding::encode(role_id));
        debug!("HTTP DELETE {}", path);

        let req = self.client.request(Method::DELETE, &DELETE_ROLE, &path).await?;
        self.client.execute_empty(req, &DELETE_ROLE).await
    }

    /// Get a role in the organization specified by the role's `role_id`
    pub async fn get_role(&self, role_id: &str) -> DatadogResult<RoleResponse> {
        info!("Getting role {}", role_id);
        let path = format!("/api/v2/roles/{}", urlencoding::encode(role_id));
        debug!("HTTP GET {}", path);

        let req = self.client.request(Method::GET, &GET_ROLE, &path).await?;
        self.client.execute(req, &GET_ROLE).await
    }

    /// Return a list of all permissions, including name, description, and ID
    pub async fn list_permissions(&self) -> DatadogResult<PermissionsResponse> {
        info!("Listing permissions");
        let path = "/api/v2/permissions";
        debug!("HTTP GET {}", path);

        let req = self.client.request(Method::GET, &LIST_PERMISSIONS, path).await?;
        self.client.execute(req, &LIST_PERMISSIONS).await
    }

    /// Return a list of all permissions for a single role
    pub async fn list_role_permissions(&self, role_id: &str) -> DatadogResult<PermissionsResponse> {
        info!("Listing permissions of role {}", role_id);
        let path = format!("/api/v2/roles/{}/permissions", urlencoding::encode(role_id));
        debug!("HTTP GET {}", path);

        let req = self.client.request(Method::GET, &LIST_ROLE_PERMISSIONS, &path).await?;
        self.client.execute(req, &LIST_ROLE_PERMISSIONS).await
    }

    /// Get all users of a role
    pub async fn list_role_users(
        &self,
        role_id: &str,
        params: ListRoleUsersOptionalParams,
    ) -> DatadogResult<UsersResponse> {
        info!("Listing users of role {}", role_id);
        let path = format!("/api/v2/roles/{}/users", urlencoding::encode(role_id));
        debug!("HTTP GET {}", path);

        let req = self.client.request(Method::GET, &LIST_ROLE_USERS, &path).await?;
        let req = params.apply(req);
        self.client.execute(req, &LIST_ROLE_USERS).await
    }

    /// Return all roles, including their names and their unique identifiers
    pub async fn list_roles(&self, params: ListRolesOptionalParams) -> DatadogResult<RolesResponse> {
        info!("Listing roles");
        let path = "/api/v2/roles";
        debug!("HTTP GET {}", path);

        let req = self.client.request(Method::GET, &LIST_ROLES, path).await?;
        let req = params.apply(req);
        self.client.execute(req, &LIST_ROLES).await
    }

    /// Remove a permission from a role
    pub async fn remove_permission_from_role(
        &self,
        role_id: &str,
        body: &RelationshipToPermission,
    ) -> DatadogResult<PermissionsResponse> {
        info!("Removing permission from role {}", role_id);
        let path = format!("/api/v2/roles/{}/permissions", urlencoding::encode(role_id));
        debug!("HTTP DELETE {}", path);

        let req = self
            .client
            .request(Method::DELETE, &REMOVE_PERMISSION_FROM_ROLE, &path)
            .await?;
        let req = DatadogClient::json_body(req, body, None)?;
        self.client.execute(req, &REMOVE_PERMISSION_FROM_ROLE).await
    }

    /// Remove a user from a role
    pub async fn remove_user_from_role(
        &self,
        role_id: &str,
        body: &RelationshipToUser,
    ) -> DatadogResult<UsersResponse> {
        info!("Removing user {} from role {}", body.data.id, role_id);
        let path = format!("/api/v2/roles/{}/users", urlencoding::encode(role_id));
        debug!("HTTP DELETE {}", path);

        let req = self
            .client
            .request(Method::DELETE, &REMOVE_USER_FROM_ROLE, &path)
            .await?;
        let req = DatadogClient::json_body(req, body, None)?;
        self.client.execute(req, &REMOVE_USER_FROM_ROLE).await
    }

    /// Edit a role. Can only be used with application keys belonging to administrators.
    pub async fn update_role(
        &self,
        role_id: &str,
        body: &RoleUpdateRequest,
    ) -> DatadogResult<RoleUpdateResponse> {
        info!("Updating role {}", role_id);
        let path = format!("/api/v2/roles/{}", urlencoding::encode(role_id));
        debug!("HTTP PATCH {}", path);

        let req = self.client.request(Method::PATCH, &UPDATE_ROLE, &path).await?;
        let req = DatadogClient::json_body(req, body, None)?;
        self.client.execute(req, &UPDATE_ROLE).await
    }
}
