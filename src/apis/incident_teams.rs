use super::Operation;
use crate::{
    client::DatadogClient,
    error::DatadogResult,
    models::{
        IncidentRelatedObject, IncidentTeamCreateRequest, IncidentTeamResponse,
        IncidentTeamUpdateRequest, IncidentTeamsResponse,
    },
};
use log::{debug, info};
use reqwest::Method;

const ERROR_STATUSES: &[u16] = &[400, 401, 403, 404, 429];

const CREATE_INCIDENT_TEAM: Operation =
    Operation::new("IncidentTeamsApi", "CreateIncidentTeam", ERROR_STATUSES);
const DELETE_INCIDENT_TEAM: Operation =
    Operation::new("IncidentTeamsApi", "DeleteIncidentTeam", ERROR_STATUSES);
const GET_INCIDENT_TEAM: Operation = Operation::new("IncidentTeamsApi", "GetIncidentTeam", ERROR_STATUSES);
const LIST_INCIDENT_TEAMS: Operation =
    Operation::new("IncidentTeamsApi", "ListIncidentTeams", ERROR_STATUSES);
const UPDATE_INCIDENT_TEAM: Operation =
    Operation::new("IncidentTeamsApi", "UpdateIncidentTeam", ERROR_STATUSES);

/// Optional parameters for [`IncidentTeamsApi::list_incident_teams`]
#[derive(Debug, Clone, Default)]
pub struct ListIncidentTeamsOptionalParams {
    pub include: Option<IncidentRelatedObject>,
    pub page_size: Option<i64>,
    pub page_offset: Option<i64>,
    pub filter: Option<String>,
}

impl ListIncidentTeamsOptionalParams {
    /// Related object to include in the response.
    pub fn include(mut self, value: IncidentRelatedObject) -> Self {
        self.include = Some(value);
        self
    }

    /// Size for a given page. The maximum allowed value is 100.
    pub fn page_size(mut self, value: i64) -> Self {
        self.page_size = Some(value);
        self
    }

    /// Offset of the first element of the page.
    pub fn page_offset(mut self, value: i64) -> Self {
        self.page_offset = Some(value);
        self
    }

    /// A search query that filters teams by name.
    pub fn filter(mut self, value: impl Into<String>) -> Self {
        self.filter = Some(value.into());
        self
    }
}

/// Incident Teams API operations.
///
/// Every operation here is unstable and must be enabled on the
/// [`Configuration`](crate::Configuration) before use.
pub struct IncidentTeamsApi<'a> {
    client: &'a DatadogClient,
}

impl<'a> IncidentTeamsApi<'a> {
    pub fn new(client: &'a DatadogClient) -> Self {
        Self { client }
    }

    /// Create an incident team
    pub async fn create_incident_team(
        &self,
        body: &IncidentTeamCreateRequest,
    ) -> DatadogResult<IncidentTeamResponse> {
        info!("Creating incident team");
        let path = "/api/v2/teams";
        debug!("HTTP POST {}", path);

        let req = self.client.request(Method::POST, &CREATE_INCIDENT_TEAM, path).await?;
        let req = DatadogClient::json_body(req, body, None)?;
        self.client.execute(req, &CREATE_INCIDENT_TEAM).await
    }

    /// Delete an existing incident team
    pub async fn delete_incident_team(&self, team_id: &str) -> DatadogResult<()> {
        info!("Deleting incident team {}", team_id);
        let path = format!("/api/v2/teams/{}", urlencoding::encode(team_id));
        debug!("HTTP DELETE {}", path);

        let req = self.client.request(Method::DELETE, &DELETE_INCIDENT_TEAM, &path).await?;
        self.client.execute_empty(req, &DELETE_INCIDENT_TEAM).await
    }

    /// Get details of an incident team
    ///
    /// # Arguments
    /// * `team_id` - The ID of the incident team
    /// * `include` - Related object to include in the response
    pub async fn get_incident_team(
        &self,
        team_id: &str,
        include: Option<IncidentRelatedObject>,
    ) -> DatadogResult<IncidentTeamResponse> {
        info!("Getting incident team {}", team_id);
        let path = format!("/api/v2/teams/{}", urlencoding::encode(team_id));
        debug!("HTTP GET {}", path);

        let mut req = self.client.request(Method::GET, &GET_INCIDENT_TEAM, &path).await?;
        if let Some(include) = include {
            req = req.query(&[("include", include.as_str())]);
        }
        self.client.execute(req, &GET_INCIDENT_TEAM).await
    }

    /// Get all incident teams for the requesting user's organization
    pub async fn list_incident_teams(
        &self,
        params: ListIncidentTeamsOptionalParams,
    ) -> DatadogResult<IncidentTeamsResponse> {
        info!("Listing incident teams");
        let path = "/api/v2/teams";
        debug!("HTTP GET {}", path);

        let mut req = self.client.request(Method::GET, &LIST_INCIDENT_TEAMS, path).await?;
        if let Some(include) = params.include {
            req = req.query(&[("include", include.as_str())]);
        }
        if let Some(size) = params.page_size {
            req = req.query(&[("page[size]", size.to_string())]);
        }
        if let Some(offset) = params.page_offset {
            req = req.query(&[("page[offset]", offset.to_string())]);
        }
        if let Some(filter) = &params.filter {
            req = req.query(&[("filter", filter.as_str())]);
        }
        self.client.execute(req, &LIST_INCIDENT_TEAMS).await
    }

    /// Update an existing incident team
    pub async fn update_incident_team(
        &self,
        team_id: &str,
        body: &IncidentTeamUpdateRequest,
    ) -> DatadogResult<IncidentTeamResponse> {
        info!("Updating incident team {}", team_id);
        let path = format!("/api/v2/teams/{}", urlencoding::encode(team_id));
        debug!("HTTP PATCH {}", path);

        let req = self.client.request(Method::PATCH, &UPDATE_INCIDENT_TEAM, &path).await?;
        let req = DatadogClient::json_body(req, body, None)?;
        self.client.execute(req, &UPDATE_INCIDENT_TEAM).await
    }
}
